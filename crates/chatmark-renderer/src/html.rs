//! HTML emission helpers for block-level elements.
//!
//! Callers pass already-formatted inline HTML for text content; only
//! attribute values are escaped here.

use std::fmt::Write;

use crate::marker::{CalloutKind, CheckboxState, DividerStyle};
use crate::state::escape_html;

/// Emit a code block with its language header. `body` is already escaped.
pub(crate) fn code_block(language: &str, body: &str, out: &mut String) {
    let lang = escape_html(language);
    let _ = write!(
        out,
        concat!(
            r#"<div class="chat-code-block" data-language="{lang}">"#,
            r#"<div class="code-header"><span class="code-language">{lang}</span></div>"#,
            r#"<pre><code class="language-{lang}">{body}</code></pre></div>"#
        ),
        lang = lang,
        body = body,
    );
}

pub(crate) fn blockquote_start(out: &mut String) {
    out.push_str(r#"<blockquote class="chat-quote">"#);
}

pub(crate) fn blockquote_end(out: &mut String) {
    out.push_str("</blockquote>");
}

pub(crate) fn paragraph(content: &str, out: &mut String) {
    let _ = write!(out, "<p>{content}</p>");
}

pub(crate) fn heading(level: u8, content: &str, out: &mut String) {
    let _ = write!(out, "<h{level}>{content}</h{level}>");
}

pub(crate) fn definition(term: &str, description: &str, out: &mut String) {
    let _ = write!(
        out,
        r#"<dl class="chat-definition"><dt>{term}</dt><dd>{description}</dd></dl>"#
    );
}

pub(crate) fn callout(kind: CalloutKind, content: &str, out: &mut String) {
    let _ = write!(
        out,
        concat!(
            r#"<div class="chat-callout {class}" role="note">"#,
            r#"<span class="callout-icon" title="{title}">{icon}</span>"#,
            r#"<div class="callout-content">{content}</div></div>"#
        ),
        class = kind.class(),
        title = kind.label(),
        icon = kind.prefix(),
        content = content,
    );
}

pub(crate) fn checkbox(state: CheckboxState, content: &str, out: &mut String) {
    let input = match state {
        CheckboxState::Done => r#"<input type="checkbox" checked disabled>"#,
        CheckboxState::Open => r#"<input type="checkbox" disabled>"#,
        CheckboxState::Partial => r#"<input type="checkbox" disabled aria-checked="mixed">"#,
    };
    let _ = write!(
        out,
        r#"<div class="chat-checkbox {class}">{input}<span class="checkbox-label">{content}</span></div>"#,
        class = state.class(),
    );
}

pub(crate) fn divider(style: DividerStyle, out: &mut String) {
    let _ = write!(out, r#"<hr class="chat-divider {}">"#, style.class());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_code_block() {
        let mut out = String::new();
        code_block("js", "const x = 1;", &mut out);
        assert_eq!(
            out,
            concat!(
                r#"<div class="chat-code-block" data-language="js">"#,
                r#"<div class="code-header"><span class="code-language">js</span></div>"#,
                r#"<pre><code class="language-js">const x = 1;</code></pre></div>"#
            )
        );
    }

    #[test]
    fn test_code_block_escapes_language() {
        let mut out = String::new();
        code_block(r#"a"b"#, "", &mut out);
        assert!(out.contains(r#"data-language="a&quot;b""#));
    }

    #[test]
    fn test_blockquote() {
        let mut out = String::new();
        blockquote_start(&mut out);
        paragraph("quoted", &mut out);
        blockquote_end(&mut out);
        assert_eq!(out, r#"<blockquote class="chat-quote"><p>quoted</p></blockquote>"#);
    }

    #[test]
    fn test_heading() {
        let mut out = String::new();
        heading(3, "Title", &mut out);
        assert_eq!(out, "<h3>Title</h3>");
    }

    #[test]
    fn test_definition() {
        let mut out = String::new();
        definition("Term", "Meaning", &mut out);
        assert_eq!(
            out,
            r#"<dl class="chat-definition"><dt>Term</dt><dd>Meaning</dd></dl>"#
        );
    }

    #[test]
    fn test_callout_warning() {
        let mut out = String::new();
        callout(CalloutKind::Warning, "careful", &mut out);
        assert!(out.starts_with(r#"<div class="chat-callout callout-warning" role="note">"#));
        assert!(out.contains(r#"title="Warning""#));
        assert!(out.contains(r#"<div class="callout-content">careful</div>"#));
    }

    #[test]
    fn test_checkbox_states() {
        let mut out = String::new();
        checkbox(CheckboxState::Done, "shipped", &mut out);
        assert_eq!(
            out,
            concat!(
                r#"<div class="chat-checkbox checkbox-done"><input type="checkbox" checked disabled>"#,
                r#"<span class="checkbox-label">shipped</span></div>"#
            )
        );

        let mut out = String::new();
        checkbox(CheckboxState::Partial, "half", &mut out);
        assert!(out.contains(r#"aria-checked="mixed""#));
        assert!(out.contains("checkbox-partial"));
    }

    #[test]
    fn test_divider() {
        let mut out = String::new();
        divider(DividerStyle::Double, &mut out);
        assert_eq!(out, r#"<hr class="chat-divider divider-double">"#);
    }
}
