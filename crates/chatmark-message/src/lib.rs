//! Render entry point for chat messages.
//!
//! Combines the markup renderer, the mood classifier and the presentation
//! config into one [`RenderedMessage`] per message:
//!
//! ```
//! use chatmark_config::RenderConfig;
//! use chatmark_message::render_message;
//! use chatmark_mood::Sentiment;
//!
//! let message = render_message("hi", Some(&Sentiment::user(0.0)), &RenderConfig::default());
//! assert_eq!(message.html, r#"<div class="chat-content theme-dark"><p>hi</p></div>"#);
//! assert_eq!(message.indicator.unwrap().color_class, "sentiment-neutral");
//! ```

mod cache;

pub use cache::{MarkupCache, MemoryMarkupCache, NullMarkupCache};

use std::fmt::Write;

use chatmark_config::{Config, RenderConfig};
use chatmark_mood::{MoodIndicator, MoodResult, Sentiment, classify};
use serde::Serialize;

/// Finished artifact for the display layer.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedMessage {
    /// Markup fragment wrapped in the themed content container.
    pub html: String,
    /// Moods detected in a user-authored message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<MoodResult>,
    /// Glyph shown next to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator: Option<MoodIndicator>,
}

/// Renders messages with a fixed configuration and an optional cache.
///
/// `Send + Sync`: the only shared state is the cache, which locks
/// internally.
pub struct MessageRenderer {
    config: RenderConfig,
    cache: Box<dyn MarkupCache>,
}

impl MessageRenderer {
    /// Create a renderer without caching.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            cache: Box::new(NullMarkupCache),
        }
    }

    /// Replace the markup cache.
    #[must_use]
    pub fn with_cache(mut self, cache: Box<dyn MarkupCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Create a renderer from loaded configuration, enabling the in-memory
    /// cache when configured.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let renderer = Self::new(config.render);
        if config.cache.enabled {
            tracing::debug!(capacity = config.cache.capacity, "Markup cache enabled");
            renderer.with_cache(Box::new(MemoryMarkupCache::new(config.cache.capacity)))
        } else {
            renderer
        }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one message.
    ///
    /// Without a sentiment there is no mood and no indicator. Moods are only
    /// classified for user-authored messages; AI responses get a
    /// score-based indicator.
    #[must_use]
    pub fn render(&self, text: &str, sentiment: Option<&Sentiment>) -> RenderedMessage {
        let fragment = self.fragment(text);
        let html = self.wrap(&fragment);

        let mood = sentiment
            .filter(|sentiment| !sentiment.is_ai_response)
            .map(|_| classify(text));
        let indicator = sentiment
            .filter(|_| self.config.show_sentiment)
            .map(|sentiment| MoodIndicator::select(&mood.unwrap_or_default(), sentiment.score));

        RenderedMessage {
            html,
            mood,
            indicator,
        }
    }

    fn fragment(&self, text: &str) -> String {
        if let Some(html) = self.cache.get(text) {
            return html;
        }
        let html = chatmark_renderer::render(text);
        self.cache.set(text, &html);
        html
    }

    /// Wrap a fragment in the themed content container.
    fn wrap(&self, fragment: &str) -> String {
        let mut html = String::with_capacity(fragment.len() + 64);
        let _ = write!(html, r#"<div class="chat-content {}"#, self.config.theme.class());
        if self.config.compact {
            html.push_str(" compact");
        }
        html.push_str(r#"">"#);
        html.push_str(fragment);
        html.push_str("</div>");
        html
    }
}

impl Default for MessageRenderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

/// Render one message without keeping a renderer around.
#[must_use]
pub fn render_message(
    text: &str,
    sentiment: Option<&Sentiment>,
    config: &RenderConfig,
) -> RenderedMessage {
    MessageRenderer::new(*config).render(text, sentiment)
}
