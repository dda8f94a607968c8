//! Fixed-width column layout shared by all three reports.
//!
//! A report table has a row-number column sized from the row count, then one
//! column per header label whose width is the label's own character length.
//! Labels carry their internal padding by construction (e.g. `"     NCSS"`),
//! so the header line prints them verbatim. Widths are fixed once from the
//! labels and never re-measured from data: a value wider than its label
//! overflows and breaks alignment, which is accepted behavior.

use crate::error::ReportError;
use crate::Result;

/// Minimum row-number column width, the length of the literal `Nr.` label.
const LEN_NR: usize = 3;

/// Column layout and row counter for one report render.
///
/// Each report call builds a fresh layout; the 1-based row counter is owned
/// here and advances on every [`TableLayout::row_line`] call, so callers
/// never pass row numbers explicitly.
#[derive(Debug)]
pub struct TableLayout {
    headers: Vec<String>,
    width: usize,
    next_row: usize,
    newline: String,
}

impl TableLayout {
    /// Create a layout for `row_count` rows under the given header labels.
    ///
    /// The last label names the row's name column; the ones before it each
    /// define one numeric column.
    pub fn new(row_count: usize, headers: &[&str], newline: &str) -> Self {
        let digits = row_count.to_string().len();
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            width: digits.max(LEN_NR),
            next_row: 0,
            newline: newline.to_string(),
        }
    }

    /// Render the header line: spaces filling the row-number column, the
    /// literal `Nr.`, then each label preceded by one space.
    pub fn header_line(&self) -> String {
        let mut line = " ".repeat(self.width - LEN_NR);
        line.push_str("Nr.");
        for label in &self.headers {
            line.push(' ');
            line.push_str(label);
        }
        line.push_str(&self.newline);
        line
    }

    /// Render the next data row.
    ///
    /// Emits the auto-incremented row number right-aligned to the
    /// row-number column, each value right-aligned to its label's length,
    /// then the name verbatim. Errors when the value count does not match
    /// the layout's value-column count.
    pub fn row_line(&mut self, name: &str, values: &[i64]) -> Result<String> {
        let expected = self.headers.len() - 1;
        if values.len() != expected {
            return Err(ReportError::ColumnMismatch {
                expected,
                actual: values.len(),
            });
        }

        self.next_row += 1;
        let mut line = format!("{:>width$}", self.next_row, width = self.width);
        for (value, label) in values.iter().zip(&self.headers) {
            line.push(' ');
            line.push_str(&format!("{:>width$}", value, width = label.len()));
        }
        line.push(' ');
        line.push_str(name);
        line.push_str(&self.newline);
        Ok(line)
    }

    /// Row-number column width; trailer lines indent by this plus one.
    pub fn width(&self) -> usize {
        self.width
    }
}
