//! Per-render parser state and escaping helpers.
//!
//! A [`ParserState`] is created at the start of a render call and consumed at
//! its end. Nothing in here is shared between calls.

use crate::fence::CodeFence;
use crate::html;
use crate::list::ListStack;
use crate::table::TableBuilder;

/// Open state tracked across lines while rendering one message.
#[derive(Debug, Default)]
pub(crate) struct ParserState {
    /// Append-only markup buffer.
    pub(crate) output: String,
    /// Nested list frames, innermost last.
    pub(crate) lists: ListStack,
    /// Table being accumulated from consecutive pipe rows.
    pub(crate) table: Option<TableBuilder>,
    /// Code fence being captured.
    pub(crate) fence: Option<CodeFence>,
    /// Whether a `<blockquote>` is currently open.
    pub(crate) quote_open: bool,
}

impl ParserState {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Close every open list frame, innermost first.
    pub(crate) fn close_lists(&mut self) {
        self.lists.close_all(&mut self.output);
    }

    /// Emit the pending table, if any.
    pub(crate) fn flush_table(&mut self) {
        if let Some(table) = self.table.take() {
            table.flush(&mut self.output);
        }
    }

    /// Close the open blockquote, if any.
    pub(crate) fn close_quote(&mut self) {
        if self.quote_open {
            html::blockquote_end(&mut self.output);
            self.quote_open = false;
        }
    }

    /// Close every open block before starting an unrelated one.
    pub(crate) fn close_blocks(&mut self) {
        self.flush_table();
        self.close_quote();
        self.close_lists();
    }

    /// Flush everything still open and return the finished markup.
    pub(crate) fn finish(mut self) -> String {
        if let Some(fence) = self.fence.take() {
            tracing::debug!(
                language = fence.language(),
                lines = fence.line_count(),
                "unterminated code fence flushed at end of input"
            );
            fence.finish(&mut self.output);
        }
        if let Some(table) = &self.table {
            tracing::trace!(rows = table.row_count(), "table flushed at end of input");
        }
        self.close_blocks();
        self.output
    }
}

/// Escape HTML special characters.
///
/// # Examples
///
/// ```
/// use chatmark_renderer::escape_html;
///
/// assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape only angle brackets, leaving code content otherwise untouched.
pub(crate) fn escape_code(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
