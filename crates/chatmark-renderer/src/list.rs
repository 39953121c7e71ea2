//! List item parsing and the nested list stack.
//!
//! Nesting is driven purely by indentation: a deeper indent opens a nested
//! list inside the current item, a shallower indent closes frames until the
//! stack top is no deeper than the new item.

use std::fmt::Write;

use crate::inline::format_inline;

/// Kind of list a frame renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered list (`1.`), rendered as `<ol>`.
    Ordered,
    /// Bulleted list (`-` or `•`), rendered as `<ul>`.
    Unordered,
}

/// A single list line split into its parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListItem<'a> {
    /// Count of leading whitespace characters.
    pub(crate) indent: u32,
    pub(crate) kind: ListKind,
    /// Literal number of an ordered item.
    pub(crate) number: Option<u32>,
    pub(crate) content: &'a str,
}

/// Parse a list line: `- item`, `• item` or `12. item`.
///
/// The marker must be followed by whitespace, so `---` or `-x` are not
/// list items.
pub(crate) fn parse_list_item(line: &str) -> Option<ListItem<'_>> {
    let rest = line.trim_start();
    let indent = u32::try_from(line[..line.len() - rest.len()].chars().count()).ok()?;

    if let Some(after) = rest.strip_prefix(['-', '•']) {
        return after
            .starts_with(char::is_whitespace)
            .then(|| ListItem {
                indent,
                kind: ListKind::Unordered,
                number: None,
                content: after.trim(),
            });
    }

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let number = rest[..digits].parse::<u32>().ok()?;
    let after = rest[digits..].strip_prefix('.')?;
    if !after.starts_with(char::is_whitespace) {
        return None;
    }

    Some(ListItem {
        indent,
        kind: ListKind::Ordered,
        number: Some(number),
        content: after.trim(),
    })
}

/// One open list level.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ListFrame {
    kind: ListKind,
    indent: u32,
    last_number: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    /// Same indent and kind as the top frame.
    Continue,
    /// Same indent, different kind: replace the top frame.
    Switch,
    /// Deeper than the top frame, or no frame open.
    Nest,
}

/// Stack of open list frames.
///
/// Invariant: frame indents strictly increase from bottom to top. Every
/// frame keeps its last `<li>` open so nested lists land inside it.
#[derive(Debug, Default)]
pub(crate) struct ListStack {
    frames: Vec<ListFrame>,
}

impl ListStack {
    pub(crate) fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Place an item on the stack, emitting whatever open/close tags it implies.
    pub(crate) fn push_item(&mut self, item: &ListItem<'_>, out: &mut String) {
        while self
            .frames
            .last()
            .is_some_and(|top| item.indent < top.indent)
        {
            self.close_top(out);
        }

        let placement = match self.frames.last() {
            Some(top) if top.indent == item.indent && top.kind == item.kind => Placement::Continue,
            Some(top) if top.indent == item.indent => Placement::Switch,
            _ => Placement::Nest,
        };

        match placement {
            Placement::Continue => self.continue_top(item, out),
            Placement::Switch => {
                self.close_top(out);
                self.open(item, out);
            }
            Placement::Nest => self.open(item, out),
        }
    }

    /// Close every frame, innermost first.
    pub(crate) fn close_all(&mut self, out: &mut String) {
        while !self.frames.is_empty() {
            self.close_top(out);
        }
    }

    fn open(&mut self, item: &ListItem<'_>, out: &mut String) {
        let nest = item.indent / 2;
        match (item.kind, item.number) {
            (ListKind::Ordered, Some(n)) if n != 1 => {
                let _ = write!(out, r#"<ol class="chat-list nest-{nest}" start="{n}">"#);
            }
            (ListKind::Ordered, _) => {
                let _ = write!(out, r#"<ol class="chat-list nest-{nest}">"#);
            }
            (ListKind::Unordered, _) => {
                let _ = write!(out, r#"<ul class="chat-list nest-{nest}">"#);
            }
        }
        self.frames.push(ListFrame {
            kind: item.kind,
            indent: item.indent,
            last_number: item.number,
        });
        open_item(None, item.content, out);
    }

    fn continue_top(&mut self, item: &ListItem<'_>, out: &mut String) {
        let Some(top) = self.frames.last_mut() else {
            return;
        };
        out.push_str("</li>");

        // Literal numbers are kept: a jump other than a restart at 1 is
        // pinned with an explicit value.
        let value = match (item.number, top.last_number) {
            (Some(n), Some(prev)) if n != 1 && prev.checked_add(1) != Some(n) => Some(n),
            _ => None,
        };
        if item.number.is_some() {
            top.last_number = item.number;
        }
        open_item(value, item.content, out);
    }

    fn close_top(&mut self, out: &mut String) {
        if let Some(frame) = self.frames.pop() {
            out.push_str(match frame.kind {
                ListKind::Ordered => "</li></ol>",
                ListKind::Unordered => "</li></ul>",
            });
        }
    }
}

fn open_item(value: Option<u32>, content: &str, out: &mut String) {
    match value {
        Some(n) => {
            let _ = write!(out, r#"<li value="{n}">"#);
        }
        None => out.push_str("<li>"),
    }
    out.push_str(&format_inline(content));
}
