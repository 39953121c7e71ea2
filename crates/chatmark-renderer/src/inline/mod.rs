//! Span-level formatting for a single line of text.
//!
//! The line is HTML-escaped, inline code is masked, and then a fixed cascade
//! of substitutions runs in this order:
//!
//! | Syntax | Output |
//! |---|---|
//! | `***x***` | `<strong><em>` |
//! | `**x**`, `__x__` | `<strong>` |
//! | `*x*`, `_x_` | `<em>` |
//! | `[text](url)` | `<a>` |
//! | `~~x~~` | `<s>` |
//! | `==x==` | `<mark>` |
//! | `~x~` | `<sub>` |
//! | `^x^` | `<sup>` |
//! | `[[Key]]` | `<kbd>` |
//!
//! Bold runs before italic so `**x**` is never read as nested emphasis, and
//! strikethrough runs before subscript for the same reason. Link targets are
//! masked alongside code spans, so emphasis markers in a URL stay literal. A
//! target containing a code span is not a link.

mod placeholders;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::state::escape_html;
use placeholders::{Placeholders, contains_placeholder, scrub_placeholders};

static BOLD_ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*\*([^*]+?)\*\*\*").unwrap());
static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*").unwrap());
/// Underscores only count at word boundaries so `snake_case_names` survive.
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b_([^_\s](?:[^_]*[^_\s])?)_\b").unwrap());
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]\(([^()\s]+)\)").unwrap());
static STRIKETHROUGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());
/// No whitespace just inside the delimiters, so `a == b` stays a comparison.
static HIGHLIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==([^=\s](?:[^=]*[^=\s])?)==").unwrap());
static SUBSCRIPT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~([^~\s]+)~").unwrap());
static SUPERSCRIPT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\^([^\^\s]+)\^").unwrap());
static KEYBOARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]]+)\]\]").unwrap());

/// Format inline spans of a single line into HTML.
///
/// The input is plain user text; it is escaped here, so callers must not
/// escape it first. Content of inline code spans is never touched by any
/// other rule.
///
/// # Examples
///
/// ```
/// use chatmark_renderer::format_inline;
///
/// assert_eq!(format_inline("**bold** and *italic*"), "<strong>bold</strong> and <em>italic</em>");
/// assert_eq!(
///     format_inline("`**not bold**`"),
///     r#"<code class="inline-code">**not bold**</code>"#
/// );
/// ```
#[must_use]
pub fn format_inline(text: &str) -> String {
    let escaped = escape_html(&scrub_placeholders(text));
    let (masked, mut fragments) = Placeholders::mask_code_spans(&escaped);
    let masked = LINK
        .replace_all(&masked, |caps: &Captures<'_>| mask_link_target(caps, &mut fragments))
        .into_owned();

    let html = substitute(&BOLD_ITALIC, masked, "<strong><em>${1}</em></strong>");
    let html = substitute(&BOLD_STARS, html, "<strong>${1}</strong>");
    let html = substitute(&BOLD_UNDERSCORES, html, "<strong>${1}</strong>");
    let html = substitute(&ITALIC_STAR, html, "<em>${1}</em>");
    let html = substitute(&ITALIC_UNDERSCORE, html, "<em>${1}</em>");
    let html = LINK
        .replace_all(&html, |caps: &Captures<'_>| render_link(caps, &mut fragments))
        .into_owned();
    let html = substitute(&STRIKETHROUGH, html, "<s>${1}</s>");
    let html = substitute(&HIGHLIGHT, html, "<mark>${1}</mark>");
    let html = substitute(&SUBSCRIPT, html, "<sub>${1}</sub>");
    let html = substitute(&SUPERSCRIPT, html, "<sup>${1}</sup>");
    let html = substitute(&KEYBOARD, html, "<kbd>${1}</kbd>");

    fragments.restore(&html)
}

fn substitute(pattern: &Regex, text: String, replacement: &str) -> String {
    if pattern.is_match(&text) {
        pattern.replace_all(&text, replacement).into_owned()
    } else {
        text
    }
}

/// Hide a link target behind a placeholder before the cascade runs.
fn mask_link_target(caps: &Captures<'_>, fragments: &mut Placeholders) -> String {
    let (label, url) = (&caps[1], &caps[2]);
    if contains_placeholder(url) {
        return caps[0].to_owned();
    }
    format!("[{label}]({})", fragments.stash_target(url))
}

/// Render a link, stashing the opening tag so no later rule sees the URL.
///
/// Only targets masked by [`mask_link_target`] count; anything else that
/// looks like a link is left as written.
fn render_link(caps: &Captures<'_>, fragments: &mut Placeholders) -> String {
    let label = &caps[1];
    let Some(url) = fragments.target(&caps[2]).map(str::to_owned) else {
        return caps[0].to_owned();
    };
    if is_safe_url(&url) {
        let open = fragments.stash(format!(
            r#"<a href="{url}" target="_blank" rel="noopener noreferrer">"#
        ));
        format!("{open}{label}</a>")
    } else {
        label.to_owned()
    }
}

/// Allow web, mail, fragment and relative targets only.
fn is_safe_url(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return true;
    };
    let scheme = &url[..colon];
    if scheme.contains(['/', '?', '#']) {
        // The colon belongs to the path or query of a relative URL.
        return true;
    }
    matches!(
        scheme.to_ascii_lowercase().as_str(),
        "http" | "https" | "mailto"
    )
}
