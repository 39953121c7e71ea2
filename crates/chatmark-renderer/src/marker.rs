//! Special marker lines: emoji callouts, checkboxes and dividers.
//!
//! The vocabulary is fixed. Prefixes are matched exactly against the line
//! with leading whitespace removed.

use crate::html;
use crate::inline::format_inline;

/// Emoji-prefixed callout kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    Info,
    Tip,
    Analysis,
    Note,
    Warning,
    KeyPoint,
    Summary,
    HowTo,
    Highlight,
    Question,
}

impl CalloutKind {
    /// Every kind, in prefix matching order.
    pub const ALL: [Self; 10] = [
        Self::Info,
        Self::Tip,
        Self::Analysis,
        Self::Note,
        Self::Warning,
        Self::KeyPoint,
        Self::Summary,
        Self::HowTo,
        Self::Highlight,
        Self::Question,
    ];

    /// The emoji that introduces this callout.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Info => "\u{2139}\u{FE0F}",
            Self::Tip => "\u{1F4A1}",
            Self::Analysis => "\u{1F4CA}",
            Self::Note => "\u{1F4DD}",
            Self::Warning => "\u{26A0}\u{FE0F}",
            Self::KeyPoint => "\u{1F511}",
            Self::Summary => "\u{1F4CB}",
            Self::HowTo => "\u{1F527}",
            Self::Highlight => "\u{2728}",
            Self::Question => "\u{2753}",
        }
    }

    /// CSS class of the callout container.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "callout-info",
            Self::Tip => "callout-tip",
            Self::Analysis => "callout-analysis",
            Self::Note => "callout-note",
            Self::Warning => "callout-warning",
            Self::KeyPoint => "callout-key-point",
            Self::Summary => "callout-summary",
            Self::HowTo => "callout-how-to",
            Self::Highlight => "callout-highlight",
            Self::Question => "callout-question",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Tip => "Tip",
            Self::Analysis => "Analysis",
            Self::Note => "Note",
            Self::Warning => "Warning",
            Self::KeyPoint => "Key point",
            Self::Summary => "Summary",
            Self::HowTo => "How-to",
            Self::Highlight => "Highlight",
            Self::Question => "Question",
        }
    }
}

/// Checkbox states: `[x]`, `[ ]` and `[~]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckboxState {
    Done,
    Open,
    Partial,
}

impl CheckboxState {
    const ALL: [Self; 3] = [Self::Done, Self::Open, Self::Partial];

    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Done => "[x]",
            Self::Open => "[ ]",
            Self::Partial => "[~]",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Done => "checkbox-done",
            Self::Open => "checkbox-open",
            Self::Partial => "checkbox-partial",
        }
    }
}

/// Horizontal rule styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DividerStyle {
    /// Three or more `-`.
    Solid,
    /// Three or more `*`.
    Dotted,
    /// Four or more `=`.
    Double,
}

impl DividerStyle {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Solid => "divider-solid",
            Self::Dotted => "divider-dotted",
            Self::Double => "divider-double",
        }
    }

    fn parse(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let first = trimmed.chars().next()?;
        let (style, min) = match first {
            '-' => (Self::Solid, 3),
            '*' => (Self::Dotted, 3),
            '=' => (Self::Double, 4),
            _ => return None,
        };
        (trimmed.len() >= min && trimmed.chars().all(|c| c == first)).then_some(style)
    }
}

/// A recognized marker line with its remaining text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Marker<'a> {
    Callout(CalloutKind, &'a str),
    Checkbox(CheckboxState, &'a str),
    Divider(DividerStyle),
}

impl Marker<'_> {
    /// Emit the marker's markup, inline-formatting any text it carries.
    pub(crate) fn render(self, out: &mut String) {
        match self {
            Self::Callout(kind, text) => html::callout(kind, &format_inline(text), out),
            Self::Checkbox(state, text) => html::checkbox(state, &format_inline(text), out),
            Self::Divider(style) => html::divider(style, out),
        }
    }
}

/// Recognize a special marker line.
pub(crate) fn parse_marker(line: &str) -> Option<Marker<'_>> {
    if let Some(style) = DividerStyle::parse(line) {
        return Some(Marker::Divider(style));
    }

    let rest = line.trim_start();
    for kind in CalloutKind::ALL {
        if let Some(text) = rest.strip_prefix(kind.prefix()) {
            return Some(Marker::Callout(kind, text.trim()));
        }
    }

    CheckboxState::ALL.into_iter().find_map(|state| {
        let text = rest.strip_prefix(state.prefix())?;
        (text.is_empty() || text.starts_with(char::is_whitespace))
            .then(|| Marker::Checkbox(state, text.trim()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_callout_prefix_is_recognized() {
        for kind in CalloutKind::ALL {
            let line = format!("{} body", kind.prefix());
            assert_eq!(parse_marker(&line), Some(Marker::Callout(kind, "body")), "{kind:?}");
        }
    }

    #[test]
    fn test_callout_with_leading_whitespace() {
        assert_eq!(
            parse_marker("   💡 Use a cache"),
            Some(Marker::Callout(CalloutKind::Tip, "Use a cache"))
        );
    }

    #[test]
    fn test_callout_requires_exact_prefix() {
        // Info and warning need the emoji presentation selector.
        assert_eq!(parse_marker("\u{2139} bare"), None);
        assert_eq!(parse_marker("\u{26A0} bare"), None);
        assert_eq!(parse_marker("text 💡 later"), None);
    }

    #[test]
    fn test_checkbox_states() {
        assert_eq!(
            parse_marker("[x] done"),
            Some(Marker::Checkbox(CheckboxState::Done, "done"))
        );
        assert_eq!(
            parse_marker("[ ] todo"),
            Some(Marker::Checkbox(CheckboxState::Open, "todo"))
        );
        assert_eq!(
            parse_marker("[~]"),
            Some(Marker::Checkbox(CheckboxState::Partial, ""))
        );
    }

    #[test]
    fn test_checkbox_needs_separator() {
        assert_eq!(parse_marker("[x]y"), None);
        assert_eq!(parse_marker("[X] upper"), None);
    }

    #[test]
    fn test_dividers() {
        assert_eq!(parse_marker("---"), Some(Marker::Divider(DividerStyle::Solid)));
        assert_eq!(parse_marker("  ******  "), Some(Marker::Divider(DividerStyle::Dotted)));
        assert_eq!(parse_marker("===="), Some(Marker::Divider(DividerStyle::Double)));
        assert_eq!(parse_marker("=="), None);
        assert_eq!(parse_marker("==="), None);
        assert_eq!(parse_marker("--"), None);
        assert_eq!(parse_marker("-*-"), None);
    }

    #[test]
    fn test_render_formats_text() {
        let mut out = String::new();
        parse_marker("📝 **remember** this").unwrap().render(&mut out);
        assert!(out.contains("callout-note"));
        assert!(out.contains("<strong>remember</strong> this"));
    }

    #[test]
    fn test_plain_line_is_not_marker() {
        assert_eq!(parse_marker("hello"), None);
        assert_eq!(parse_marker(""), None);
    }
}
