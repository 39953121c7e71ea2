//! Memoization of rendered markup, keyed by the exact message text.
//!
//! Identical messages are re-rendered on every UI update, so the composer
//! can consult a [`MarkupCache`] before running the parser. A cache never
//! changes output: a miss only costs a render.

use std::collections::{HashMap, VecDeque};
use std::sync::{PoisonError, RwLock};

/// Store of rendered fragments.
pub trait MarkupCache: Send + Sync {
    /// Retrieve the fragment previously stored for `text`.
    fn get(&self, text: &str) -> Option<String>;

    /// Store the fragment rendered for `text`.
    fn set(&self, text: &str, html: &str);
}

/// No-op [`MarkupCache`]: every lookup misses, every store is discarded.
pub struct NullMarkupCache;

impl MarkupCache for NullMarkupCache {
    fn get(&self, _text: &str) -> Option<String> {
        None
    }

    fn set(&self, _text: &str, _html: &str) {}
}

#[derive(Debug, Default)]
struct Entries {
    map: HashMap<String, String>,
    /// Insertion order, oldest first.
    order: VecDeque<String>,
}

/// Bounded in-memory [`MarkupCache`] with first-in first-out eviction.
///
/// A poisoned lock is recovered rather than propagated: entries are plain
/// strings, so a panic elsewhere cannot leave them half-written.
#[derive(Debug)]
pub struct MemoryMarkupCache {
    capacity: usize,
    entries: RwLock<Entries>,
}

impl MemoryMarkupCache {
    /// Create a cache holding at most `capacity` fragments (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: RwLock::new(Entries::default()),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MarkupCache for MemoryMarkupCache {
    fn get(&self, text: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let html = entries.map.get(text).cloned();
        if html.is_some() {
            tracing::trace!(bytes = text.len(), "Markup cache hit");
        }
        html
    }

    fn set(&self, text: &str, html: &str) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = entries.map.get_mut(text) {
            html.clone_into(existing);
            return;
        }

        while entries.map.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.map.remove(&oldest);
            tracing::trace!("Markup cache evicted oldest entry");
        }

        entries.order.push_back(text.to_owned());
        entries.map.insert(text.to_owned(), html.to_owned());
    }
}
