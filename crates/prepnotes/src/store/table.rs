use std::path::{Path, PathBuf};

use super::csv::{parse_rows, write_row, LineEnding};
use crate::error::TableError;

const BOM: char = '\u{feff}';

/// Formatting facts captured on read so the table is written back the way it came in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    pub delimiter: char,
    pub line_ending: LineEnding,
    pub bom: bool,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: ',',
            line_ending: LineEnding::Lf,
            bom: false,
        }
    }
}

/// A header-first table held fully in memory.
///
/// Rows keep whatever width they had on disk; cells are only touched through
/// [`Table::set_cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub format: TableFormat,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            format: TableFormat::default(),
        }
    }

    /// Parses comma-delimited text. Returns `None` when there is no header row.
    pub fn parse(text: &str) -> Option<Self> {
        let (bom, body) = match text.strip_prefix(BOM) {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let format = TableFormat {
            delimiter: ',',
            line_ending: LineEnding::detect(body),
            bom,
        };

        let mut rows = parse_rows(body, format.delimiter);
        if rows.is_empty() {
            return None;
        }
        let headers = rows.remove(0);

        Some(Self {
            headers,
            rows,
            format,
        })
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TableError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&text).ok_or_else(|| TableError::MissingHeader(path.to_path_buf()))
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns the cell, or `""` when the row is shorter than the header.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Overwrites a cell, padding a short row up to the header width first.
    pub fn set_cell(&mut self, row: usize, column: usize, value: String) {
        let width = self.headers.len().max(column + 1);
        if let Some(cells) = self.rows.get_mut(row) {
            if cells.len() <= column {
                cells.resize(width, String::new());
            }
            cells[column] = value;
        }
    }

    pub fn to_text(&self) -> String {
        let mut buf: Vec<u8> = Vec::new();
        if self.format.bom {
            let mut encoded = [0u8; 4];
            buf.extend_from_slice(BOM.encode_utf8(&mut encoded).as_bytes());
        }

        // Writing into a Vec cannot fail.
        let _ = write_row(
            &mut buf,
            &self.headers,
            self.format.delimiter,
            self.format.line_ending,
        );
        for row in &self.rows {
            let _ = write_row(&mut buf, row, self.format.delimiter, self.format.line_ending);
        }

        match String::from_utf8(buf) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
        }
    }

    /// Writes the whole table to a sibling temporary file, then moves it over
    /// `path`. If anything fails, `path` keeps its previous contents.
    pub fn write_atomic<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        let path = path.as_ref();
        let tmp = temp_path_for(path);

        std::fs::write(&tmp, self.to_text()).map_err(|e| TableError::WriteFile {
            path: tmp.clone(),
            source: e,
        })?;

        if let Err(e) = replace_file(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Renames the finished temp file over `dst`. The temp file is a sibling of
/// `dst`, so a failed rename is never retried as an in-place copy.
fn replace_file(src: &Path, dst: &Path) -> Result<(), TableError> {
    std::fs::rename(src, dst).map_err(|e| TableError::Replace {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source: e,
    })
}
