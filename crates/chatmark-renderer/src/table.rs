//! Pipe table accumulation and emission.

use std::fmt::Write;

use crate::inline::format_inline;

/// Column alignment derived from a separator row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Alignment for one separator cell such as `:--:` or `--:`.
    fn from_separator(cell: &str) -> Self {
        match (cell.starts_with(':'), cell.ends_with(':')) {
            (true, true) => Self::Center,
            (false, true) => Self::Right,
            _ => Self::Left,
        }
    }

    /// CSS `text-align` value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Check whether a line has the `|...|` shape of a table row.
pub(crate) fn is_table_row(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a table row into trimmed cells. The caller checks [`is_table_row`].
fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = &trimmed[1..trimmed.len() - 1];
    inner.split('|').map(|cell| cell.trim().to_owned()).collect()
}

/// A separator row holds only dashes and colons, with a dash in every cell.
fn is_separator(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells.iter().all(|cell| {
            cell.contains('-') && cell.chars().all(|c| c == '-' || c == ':')
        })
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct HeaderCell {
    text: String,
    align: Alignment,
}

/// Table accumulated from consecutive pipe rows.
#[derive(Debug)]
pub(crate) struct TableBuilder {
    headers: Vec<HeaderCell>,
    rows: Vec<Vec<String>>,
    aligned: bool,
}

impl TableBuilder {
    /// Start a table whose header is the given row.
    pub(crate) fn new(header_line: &str) -> Self {
        let headers = split_cells(header_line)
            .into_iter()
            .map(|text| HeaderCell {
                text,
                align: Alignment::default(),
            })
            .collect();
        Self {
            headers,
            rows: Vec::new(),
            aligned: false,
        }
    }

    /// Consume the next row: a separator sets alignment, anything else is data.
    pub(crate) fn push_line(&mut self, line: &str) {
        let cells = split_cells(line);
        if !is_separator(&cells) {
            self.rows.push(cells);
            return;
        }
        if self.aligned {
            return;
        }
        for (header, cell) in self.headers.iter_mut().zip(&cells) {
            header.align = Alignment::from_separator(cell);
        }
        self.aligned = true;
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn align_at(&self, column: usize) -> Alignment {
        self.headers
            .get(column)
            .map_or(Alignment::Left, |header| header.align)
    }

    /// Emit the table markup.
    pub(crate) fn flush(self, out: &mut String) {
        out.push_str(r#"<div class="chat-table-wrapper"><table class="chat-table"><thead><tr>"#);
        for header in &self.headers {
            let _ = write!(
                out,
                r#"<th style="text-align:{}">{}</th>"#,
                header.align.as_str(),
                format_inline(&header.text)
            );
        }
        out.push_str("</tr></thead><tbody>");

        for (index, row) in self.rows.iter().enumerate() {
            let class = if index % 2 == 0 { "row-even" } else { "row-odd" };
            let _ = write!(out, r#"<tr class="{class}">"#);
            for (column, cell) in row.iter().enumerate() {
                let _ = write!(
                    out,
                    r#"<td style="text-align:{}">{}</td>"#,
                    self.align_at(column).as_str(),
                    format_inline(cell)
                );
            }
            out.push_str("</tr>");
        }
        out.push_str("</tbody></table></div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> String {
        let mut table = TableBuilder::new(lines[0]);
        for line in &lines[1..] {
            table.push_line(line);
        }
        let mut out = String::new();
        table.flush(&mut out);
        out
    }

    #[test]
    fn test_is_table_row() {
        assert!(is_table_row("| a | b |"));
        assert!(is_table_row("  |x|  "));
        assert!(is_table_row("||"));
        assert!(!is_table_row("|"));
        assert!(!is_table_row("| a | b"));
        assert!(!is_table_row("a | b |"));
    }

    #[test]
    fn test_split_cells() {
        assert_eq!(split_cells("| H1 |  H2|"), vec!["H1", "H2"]);
        assert_eq!(split_cells("||"), vec![""]);
    }

    #[test]
    fn test_is_separator() {
        let cells = split_cells("|---|:--:|--:|");
        assert!(is_separator(&cells));
        assert!(!is_separator(&split_cells("| - | x |")));
        assert!(!is_separator(&split_cells("| : |")));
        assert!(!is_separator(&split_cells("| --- | |")));
    }

    #[test]
    fn test_alignment_from_separator() {
        assert_eq!(Alignment::from_separator("---"), Alignment::Left);
        assert_eq!(Alignment::from_separator(":--"), Alignment::Left);
        assert_eq!(Alignment::from_separator(":-:"), Alignment::Center);
        assert_eq!(Alignment::from_separator("--:"), Alignment::Right);
    }

    #[test]
    fn test_two_column_table() {
        assert_eq!(
            build(&["| H1 | H2 |", "|---|---|", "| a | b |"]),
            concat!(
                r#"<div class="chat-table-wrapper"><table class="chat-table"><thead><tr>"#,
                r#"<th style="text-align:left">H1</th><th style="text-align:left">H2</th>"#,
                r#"</tr></thead><tbody><tr class="row-even">"#,
                r#"<td style="text-align:left">a</td><td style="text-align:left">b</td>"#,
                r#"</tr></tbody></table></div>"#
            )
        );
    }

    #[test]
    fn test_alignment_applies_to_header_and_cells() {
        let html = build(&["| L | C | R |", "|:--|:-:|--:|", "| 1 | 2 | 3 |"]);
        assert!(html.contains(r#"<th style="text-align:left">L</th>"#));
        assert!(html.contains(r#"<th style="text-align:center">C</th>"#));
        assert!(html.contains(r#"<th style="text-align:right">R</th>"#));
        assert!(html.contains(r#"<td style="text-align:center">2</td>"#));
        assert!(html.contains(r#"<td style="text-align:right">3</td>"#));
    }

    #[test]
    fn test_rows_alternate_classes() {
        let html = build(&["| h |", "|---|", "| 1 |", "| 2 |", "| 3 |"]);
        assert_eq!(html.matches(r#"class="row-even""#).count(), 2);
        assert_eq!(html.matches(r#"class="row-odd""#).count(), 1);
    }

    #[test]
    fn test_later_separator_is_dropped() {
        let mut table = TableBuilder::new("| h |");
        table.push_line("|:-:|");
        table.push_line("| 1 |");
        table.push_line("|--:|");
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.align_at(0), Alignment::Center);
    }

    #[test]
    fn test_header_only_table() {
        let html = build(&["| only |"]);
        assert!(html.contains("<th"));
        assert!(html.contains("<tbody></tbody>"));
    }

    #[test]
    fn test_cells_are_inline_formatted() {
        let html = build(&["| **h** |", "| `a|b` |"]);
        assert!(html.contains("<strong>h</strong>"));
        // The pipe splits cells before inline formatting runs.
        assert!(html.contains("`a"));
    }

    #[test]
    fn test_extra_cells_default_to_left() {
        let html = build(&["| a |", "|--:|", "| 1 | 2 |"]);
        assert!(html.contains(r#"<td style="text-align:right">1</td>"#));
        assert!(html.contains(r#"<td style="text-align:left">2</td>"#));
    }
}
