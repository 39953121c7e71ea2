//! Line dispatcher driving one render call.

use crate::blocks::{self, parse_heading, quote_content};
use crate::fence::CodeFence;
use crate::html;
use crate::inline::format_inline;
use crate::list::parse_list_item;
use crate::marker::parse_marker;
use crate::state::ParserState;
use crate::table::{TableBuilder, is_table_row};

/// Render chat text into an HTML fragment.
///
/// Total over every input: malformed or truncated constructs are flushed as
/// far as they got, and the output always has balanced block tags. Empty or
/// whitespace-only input renders to an empty string.
///
/// # Examples
///
/// ```
/// use chatmark_renderer::render;
///
/// assert_eq!(render("hi"), "<p>hi</p>");
/// assert_eq!(
///     render("1. a\n3. b"),
///     r#"<ol class="chat-list nest-0"><li>a</li><li value="3">b</li></ol>"#
/// );
/// ```
#[must_use]
pub fn render(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut renderer = Renderer {
        lines: &lines,
        cursor: 0,
        state: ParserState::with_capacity(text.len() + text.len() / 2),
    };
    renderer.run();
    renderer.state.finish()
}

struct Renderer<'a> {
    lines: &'a [&'a str],
    /// Index of the next unread line.
    cursor: usize,
    state: ParserState,
}

impl<'a> Renderer<'a> {
    fn run(&mut self) {
        while let Some(&line) = self.lines.get(self.cursor) {
            self.cursor += 1;
            self.dispatch(line);
        }
    }

    fn dispatch(&mut self, line: &'a str) {
        if self.capture_fence_line(line) {
            return;
        }
        if let Some(fence) = CodeFence::open(line) {
            self.state.close_blocks();
            self.state.fence = Some(fence);
            return;
        }

        let table_row = is_table_row(line);
        let quoted = quote_content(line);
        if !table_row {
            self.state.flush_table();
        }
        if quoted.is_none() {
            self.state.close_quote();
        }

        if let Some(content) = quoted {
            self.quote_line(content);
        } else if table_row {
            self.table_row(line);
        } else if let Some(definition) = blocks::definition_at(self.lines, self.cursor - 1) {
            self.state.close_lists();
            html::definition(
                &format_inline(definition.term),
                &format_inline(&definition.description),
                &mut self.state.output,
            );
            self.cursor += definition.consumed - 1;
        } else if line.trim().is_empty() {
            self.blank_line();
        } else if let Some((level, content)) = parse_heading(line) {
            self.state.close_lists();
            html::heading(level, &format_inline(content), &mut self.state.output);
        } else if let Some(marker) = parse_marker(line) {
            self.state.close_lists();
            marker.render(&mut self.state.output);
        } else if let Some(item) = parse_list_item(line) {
            self.state.lists.push_item(&item, &mut self.state.output);
        } else {
            self.state.close_lists();
            html::paragraph(&format_inline(line.trim()), &mut self.state.output);
        }
    }

    /// Feed a line to the open fence, if any. Returns whether it was consumed.
    fn capture_fence_line(&mut self, line: &str) -> bool {
        let Some(fence) = self.state.fence.as_mut() else {
            return false;
        };
        if fence.is_closing(line) {
            if let Some(fence) = self.state.fence.take() {
                fence.finish(&mut self.state.output);
            }
        } else {
            fence.push_line(line);
        }
        true
    }

    fn quote_line(&mut self, content: &str) {
        if !self.state.quote_open {
            self.state.close_lists();
            html::blockquote_start(&mut self.state.output);
            self.state.quote_open = true;
        }
        let content = content.trim();
        if !content.is_empty() {
            html::paragraph(&format_inline(content), &mut self.state.output);
        }
    }

    fn table_row(&mut self, line: &str) {
        match self.state.table.as_mut() {
            Some(table) => table.push_line(line),
            None => {
                self.state.close_lists();
                self.state.table = Some(TableBuilder::new(line));
            }
        }
    }

    /// A blank line ends list context unless another item follows it.
    ///
    /// The rest of the blank run is skipped in the same step, so the
    /// lookahead runs once per run instead of once per line.
    fn blank_line(&mut self) {
        let next = self.lines[self.cursor..]
            .iter()
            .position(|line| !line.trim().is_empty())
            .map_or(self.lines.len(), |offset| self.cursor + offset);
        self.cursor = next;

        if self.state.lists.is_empty() || self.is_list_item_at(next) {
            return;
        }
        self.state.close_lists();
    }

    /// Check the line at `index`, as written, for a list item.
    fn is_list_item_at(&self, index: usize) -> bool {
        self.lines
            .get(index)
            .is_some_and(|line| parse_list_item(line).is_some())
    }
}
