//! Line recognizers for blockquotes, headings and definition lists.

use crate::fence::is_fence_start;
use crate::list::parse_list_item;

/// Strip a blockquote marker and one following space.
pub(crate) fn quote_content(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix('>')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

/// Parse a `#` to `#####` heading followed by whitespace.
pub(crate) fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let rest = line.trim_start();
    let hashes = rest.bytes().take_while(|&b| b == b'#').count();
    if !(1..=5).contains(&hashes) {
        return None;
    }
    let content = &rest[hashes..];
    if !content.starts_with(char::is_whitespace) {
        return None;
    }
    let level = u8::try_from(hashes).ok()?;
    Some((level, content.trim()))
}

/// A term line and its indented description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Definition<'a> {
    pub(crate) term: &'a str,
    pub(crate) description: String,
    /// Lines used, including the term line.
    pub(crate) consumed: usize,
}

/// Try to read a definition whose term is `lines[index]`.
///
/// The term is an unindented line ending in `:`. The description is every
/// directly following indented line that is not blank, not a list item and
/// not a code fence, trimmed and joined with single spaces.
pub(crate) fn definition_at<'a>(lines: &[&'a str], index: usize) -> Option<Definition<'a>> {
    let line = *lines.get(index)?;
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let term = line.trim_end().strip_suffix(':')?.trim_end();
    if term.is_empty() || parse_list_item(line).is_some() || parse_heading(line).is_some() {
        return None;
    }

    let parts: Vec<&str> = lines[index + 1..]
        .iter()
        .copied()
        .take_while(|next| is_description_line(next))
        .map(str::trim)
        .collect();
    if parts.is_empty() {
        return None;
    }

    Some(Definition {
        term,
        consumed: parts.len() + 1,
        description: parts.join(" "),
    })
}

fn is_description_line(line: &str) -> bool {
    line.starts_with(char::is_whitespace)
        && !line.trim().is_empty()
        && parse_list_item(line).is_none()
        && !is_fence_start(line)
}
