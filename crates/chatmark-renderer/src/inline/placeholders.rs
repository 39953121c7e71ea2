//! Opaque placeholders for finished HTML fragments.
//!
//! Code spans and link targets are cut out of a line before the emphasis
//! cascade runs, and rendered link tags are cut out as soon as they are built. Both are put
//! back verbatim after the cascade. Placeholders are built from private-use
//! characters that are scrubbed from user input, so they can neither be
//! forged nor matched by any span rule.

use std::borrow::Cow;

const OPEN: char = '\u{E000}';
const CLOSE: char = '\u{E001}';

/// Replace placeholder delimiter characters in user text with U+FFFD.
pub(super) fn scrub_placeholders(text: &str) -> Cow<'_, str> {
    if text.contains([OPEN, CLOSE]) {
        Cow::Owned(text.replace([OPEN, CLOSE], "\u{FFFD}"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Whether `text` holds a placeholder delimiter.
pub(super) fn contains_placeholder(text: &str) -> bool {
    text.contains([OPEN, CLOSE])
}

/// Finished fragments cut out of a line, indexed by placeholder number.
#[derive(Debug, Default)]
pub(super) struct Placeholders {
    fragments: Vec<String>,
    /// Indices of fragments holding link targets.
    targets: Vec<usize>,
}

impl Placeholders {
    /// Cut every code span out of `text`, returning the masked text.
    ///
    /// A span opens with a run of backticks and closes at the next run of the
    /// same length. Unmatched runs are kept as literal text.
    pub(super) fn mask_code_spans(text: &str) -> (String, Self) {
        let mut spans = Self::default();
        let mut masked = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find('`') {
            masked.push_str(&rest[..start]);
            let run = &rest[start..];
            let ticks = run.bytes().take_while(|&b| b == b'`').count();

            match find_closing_run(&run[ticks..], ticks) {
                Some(end) => {
                    let content = strip_padding(&run[ticks..ticks + end]);
                    let code = format!(r#"<code class="inline-code">{content}</code>"#);
                    masked.push_str(&spans.stash(code));
                    rest = &run[ticks + end + ticks..];
                }
                None => {
                    masked.push_str(&run[..ticks]);
                    rest = &run[ticks..];
                }
            }
        }
        masked.push_str(rest);

        (masked, spans)
    }

    /// Store a finished fragment and return the placeholder standing for it.
    pub(super) fn stash(&mut self, html: String) -> String {
        let token = format!("{OPEN}{}{CLOSE}", self.fragments.len());
        self.fragments.push(html);
        token
    }

    /// Store a link target and return the placeholder standing for it.
    pub(super) fn stash_target(&mut self, url: &str) -> String {
        self.targets.push(self.fragments.len());
        self.stash(url.to_owned())
    }

    /// Look up the link target behind `token`, which must be exactly one
    /// target placeholder.
    pub(super) fn target(&self, token: &str) -> Option<&str> {
        let index = token
            .strip_prefix(OPEN)?
            .strip_suffix(CLOSE)?
            .parse::<usize>()
            .ok()?;
        if !self.targets.contains(&index) {
            return None;
        }
        self.fragments.get(index).map(String::as_str)
    }

    /// Put the stashed fragments back in place of their placeholders.
    pub(super) fn restore(self, text: &str) -> String {
        if self.fragments.is_empty() {
            return text.to_owned();
        }

        let mut restored = String::with_capacity(text.len());
        let mut rest = text;
        while let Some(start) = rest.find(OPEN) {
            restored.push_str(&rest[..start]);
            let after = &rest[start + OPEN.len_utf8()..];
            let span = after.find(CLOSE).and_then(|end| {
                let index = after[..end].parse::<usize>().ok()?;
                Some((self.fragments.get(index)?, end))
            });
            match span {
                Some((html, end)) => {
                    restored.push_str(html);
                    rest = &after[end + CLOSE.len_utf8()..];
                }
                None => {
                    restored.push(OPEN);
                    rest = after;
                }
            }
        }
        restored.push_str(rest);
        restored
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.fragments.len()
    }
}

/// Find the byte offset of a backtick run of exactly `ticks` length.
fn find_closing_run(text: &str, ticks: usize) -> Option<usize> {
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('`') {
        let start = pos + offset;
        let len = text[start..].bytes().take_while(|&b| b == b'`').count();
        if len == ticks {
            return Some(start);
        }
        pos = start + len;
    }
    None
}

/// Strip one space on each side when both are present, so `` ` `x` ` `` can
/// show a backtick.
fn strip_padding(content: &str) -> &str {
    match content
        .strip_prefix(' ')
        .and_then(|inner| inner.strip_suffix(' '))
    {
        Some(inner) if !inner.trim().is_empty() => inner,
        _ => content,
    }
}
