//! CSV row parsing for the import pipeline.
//!
//! The first line is a header naming columns; every subsequent line is
//! mapped onto the header positionally. The reader is a plain forward
//! iterator: rows are produced lazily and exactly once.

use std::collections::HashMap;

/// Error raised when the input stream cannot be parsed at all.
///
/// This aborts the whole run before any row is yielded; per-row
/// problems are the validator's business, not the parser's.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("artifact is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// A single raw CSV row, keyed by column header.
///
/// A column that was present in the header but had no field on this
/// line (a short row) is *absent* from the map — distinguishable from
/// a column that was present but empty.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    columns: HashMap<String, String>,
}

impl RawRow {
    /// Look up a column by exact header name.
    ///
    /// Returns `None` when the column is missing from this row,
    /// `Some("")` when it is present but empty.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            columns: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Iterator over the data rows of a CSV document.
///
/// Construction validates the encoding and consumes the header row.
/// Header-only or zero-byte input yields an empty iterator; that is a
/// distinguishable terminal state for the engine, not an error.
pub struct RowReader<'a> {
    headers: Vec<String>,
    lines: std::str::Lines<'a>,
}

impl<'a> RowReader<'a> {
    /// Build a reader over raw artifact bytes.
    pub fn new(data: &'a [u8]) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(data)?;
        let mut lines = text.lines();
        let headers = match lines.next() {
            Some(header_line) => parse_csv_line(header_line),
            None => Vec::new(),
        };
        Ok(Self { headers, lines })
    }

    /// Column names from the header row, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl Iterator for RowReader<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        loop {
            let line = self.lines.next()?;
            if line.trim().is_empty() {
                continue;
            }
            let values = parse_csv_line(line);
            let mut columns = HashMap::with_capacity(self.headers.len());
            for (i, header) in self.headers.iter().enumerate() {
                // A short line leaves the trailing columns absent.
                if let Some(value) = values.get(i) {
                    columns.insert(header.clone(), value.clone());
                }
            }
            return Some(RawRow { columns });
        }
    }
}

/// Parse a single CSV line, handling quoted fields.
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            result.push(current.clone());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    result.push(current);
    result
}
