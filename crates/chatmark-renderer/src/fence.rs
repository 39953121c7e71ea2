//! Fenced code block capture.
//!
//! A fence opens with three or more backticks and an optional language
//! token, and closes with a line of at least as many backticks and nothing
//! else. Lines in between are buffered verbatim.

use crate::html;
use crate::state::escape_code;

const DEFAULT_LANGUAGE: &str = "text";

/// Code block being captured between an opening and a closing fence.
#[derive(Debug)]
pub(crate) struct CodeFence {
    language: String,
    /// Length of the opening backtick run (minimum length for closing).
    fence_len: usize,
    buffer: String,
    lines: usize,
}

impl CodeFence {
    /// Start a fence if `line` is an opening delimiter.
    ///
    /// An info string containing a backtick disqualifies the line, so
    /// ```` ```a` b``` ```` stays inline code.
    pub(crate) fn open(line: &str) -> Option<Self> {
        let (fence_len, info) = backtick_run(line)?;
        if info.contains('`') {
            return None;
        }
        let language = info
            .split_whitespace()
            .next()
            .unwrap_or(DEFAULT_LANGUAGE)
            .to_owned();

        Some(Self {
            language,
            fence_len,
            buffer: String::new(),
            lines: 0,
        })
    }

    /// Check whether `line` closes this fence.
    pub(crate) fn is_closing(&self, line: &str) -> bool {
        backtick_run(line).is_some_and(|(len, rest)| len >= self.fence_len && rest.is_empty())
    }

    /// Append one content line, escaping only angle brackets.
    pub(crate) fn push_line(&mut self, line: &str) {
        if self.lines > 0 {
            self.buffer.push('\n');
        }
        self.buffer.push_str(&escape_code(line));
        self.lines += 1;
    }

    pub(crate) fn language(&self) -> &str {
        &self.language
    }

    pub(crate) fn line_count(&self) -> usize {
        self.lines
    }

    /// Emit the captured block.
    pub(crate) fn finish(self, out: &mut String) {
        html::code_block(&self.language, &self.buffer, out);
    }
}

/// Split a line into its leading backtick run length (3 or more) and the
/// trimmed remainder.
fn backtick_run(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_start();
    let len = trimmed.bytes().take_while(|&b| b == b'`').count();
    (len >= 3).then(|| (len, trimmed[len..].trim()))
}

/// Check whether a line would open a fence.
pub(crate) fn is_fence_start(line: &str) -> bool {
    CodeFence::open(line).is_some()
}
