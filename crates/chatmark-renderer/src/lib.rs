//! Line-oriented chat markup renderer.
//!
//! Turns free-form chat text into an HTML fragment in a single forward pass
//! over its lines. The supported syntax is a pragmatic subset of markdown
//! tuned for chat: nested lists with literal numbering, pipe tables, fenced
//! code blocks, blockquotes, definition lists, headings, inline emphasis and
//! a fixed vocabulary of emoji callouts, checkboxes and dividers.
//!
//! # Architecture
//!
//! Each call to [`render`] owns a fresh parser state, so the function is safe
//! to call concurrently without locking. Lines are dispatched to block
//! handlers in a fixed precedence order:
//!
//! 1. code fences (content is buffered verbatim)
//! 2. blockquotes
//! 3. table rows
//! 4. definition-list terms
//! 5. blank lines
//! 6. headings
//! 7. special markers (see [`CalloutKind`], [`CheckboxState`], [`DividerStyle`])
//! 8. list items
//! 9. paragraphs
//!
//! Inline spans are handled by [`format_inline`], which protects inline code
//! from every other substitution.
//!
//! # Example
//!
//! ```
//! let html = chatmark_renderer::render("- a\n- b\n  - c");
//! assert!(html.starts_with(r#"<ul class="chat-list nest-0"><li>a</li><li>b<ul"#));
//! ```

mod blocks;
mod fence;
mod html;
mod inline;
mod list;
mod marker;
mod renderer;
mod state;
mod table;

pub use inline::format_inline;
pub use list::ListKind;
pub use marker::{CalloutKind, CheckboxState, DividerStyle};
pub use renderer::render;
pub use state::escape_html;
pub use table::Alignment;
