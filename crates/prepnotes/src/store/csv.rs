//! Quote-aware delimited text codec.
//!
//! Parsing tolerates CRLF and LF line breaks, doubled-quote escapes and line
//! breaks inside quoted cells (stage notes often carry multi-line HTML).
//! Writing quotes a cell only when it has to, which is also what the tables
//! this tool edits were produced with.

use std::io::{self, Write};
use std::mem::take;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Uses the terminator of the first line; text without any line break is `Lf`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if pos > 0 && text.as_bytes()[pos - 1] == b'\r' => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/* ---------------- Parsing ---------------- */

/// Splits `text` into rows of cells. Blank lines are skipped.
///
/// A quote opens a quoted section only as the first character of a cell;
/// anywhere else it is kept as a literal (`Rod 5" dia`).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next(); // doubled-quote escape
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
                at_field_start = true;
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if is_blank_row(&row) {
                    row.clear();
                } else {
                    rows.push(take(&mut row));
                }
                at_field_start = true;
            }
            _ => {
                field.push(ch);
                at_field_start = false;
            }
        }
    }

    // Flush a trailing row without a final line break, even if quotes were unterminated.
    row.push(field);
    if !is_blank_row(&row) {
        rows.push(row);
    }

    rows
}

fn is_blank_row(row: &[String]) -> bool {
    row.is_empty() || (row.len() == 1 && row[0].is_empty())
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single row, terminated by `eol`.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char, eol: LineEnding) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", sep)?;
        } else {
            first = false;
        }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    w.write_all(eol.as_str().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_simple_rows() {
        let rows = parse_rows("a,b,c\n1,2,3\n", ',');
        assert_eq!(rows, vec![cells(&["a", "b", "c"]), cells(&["1", "2", "3"])]);
    }

    #[test]
    fn test_parse_quoted_cell_with_separator_and_newline() {
        let rows = parse_rows("name,notes\nSteel,\"line one,\nline two\"\n", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][1], "line one,\nline two");
    }

    #[test]
    fn test_parse_doubled_quote_escape() {
        let rows = parse_rows("a\n\"<ul style=\"\"x\"\">\"\n", ',');
        assert_eq!(rows[1][0], "<ul style=\"x\">");
    }

    #[test]
    fn test_parse_quote_inside_unquoted_cell_is_literal() {
        let rows = parse_rows("name,status\nRod 5\" dia,draft\n1018,published\n", ',');
        assert_eq!(
            rows,
            vec![
                cells(&["name", "status"]),
                cells(&["Rod 5\" dia", "draft"]),
                cells(&["1018", "published"]),
            ]
        );
    }

    #[test]
    fn test_parse_empty_quoted_cell() {
        let rows = parse_rows("a,b,c\n\"\",x,\"\"\n", ',');
        assert_eq!(rows[1], cells(&["", "x", ""]));
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let rows = parse_rows("a,b\r\n\r\n1,2\r\n", ',');
        assert_eq!(rows, vec![cells(&["a", "b"]), cells(&["1", "2"])]);
    }

    #[test]
    fn test_parse_without_trailing_newline() {
        let rows = parse_rows("a,b\n1,", ',');
        assert_eq!(rows, vec![cells(&["a", "b"]), cells(&["1", ""])]);
    }

    #[test]
    fn test_write_row_quotes_only_when_needed() {
        let mut buf = Vec::new();
        write_row(
            &mut buf,
            &cells(&["plain", "a,b", "say \"hi\"", ""]),
            ',',
            LineEnding::CrLf,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "plain,\"a,b\",\"say \"\"hi\"\"\",\r\n"
        );
    }

    #[test]
    fn test_detect_line_ending() {
        assert_eq!(LineEnding::detect("a,b\r\n1,2\r\n"), LineEnding::CrLf);
        assert_eq!(LineEnding::detect("a,b\n1,2\n"), LineEnding::Lf);
        assert_eq!(LineEnding::detect("a,b"), LineEnding::Lf);
    }
}
