//! HTML table extraction
//!
//! This module turns raw HTML into the rows of its first `<table>`:
//! parse with html5ever, locate the first `table` element, and collect the
//! `td`/`th` text of every `tr` below it. `TableConverter` chains these steps
//! with the CSV encoder.

pub mod errors;
pub mod grid;
pub mod locator;
mod node_util;
pub mod parser;

pub use errors::{ConversionError, ConversionResult};
pub use grid::{CellTextMode, Grid, Row, extract_grid};
pub use locator::find_table;
pub use parser::{log_recovered_errors, parse_html, validate_html};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::csv_encoder::{LineTerminator, encode_csv};

/// Options for one HTML → CSV conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub cell_text: CellTextMode,
    pub line_terminator: LineTerminator,
}

/// Converts the first table of an HTML document to CSV.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableConverter {
    options: ConvertOptions,
}

impl TableConverter {
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Extract the rows of the first table without encoding them.
    ///
    /// The document is parsed once; recovered markup errors are logged from
    /// that parse.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::NoTable` if the document has no `table`
    /// element, or `ConversionError::Parse` if the parser fails.
    pub fn extract(&self, html: &str) -> ConversionResult<Grid> {
        let dom = parse_html(html)?;
        log_recovered_errors(&dom);
        let table = find_table(&dom.document).ok_or(ConversionError::NoTable)?;
        let grid = extract_grid(&table, self.options.cell_text);
        debug!(
            rows = grid.len(),
            cell_text = ?self.options.cell_text,
            "Extracted table grid"
        );
        Ok(grid)
    }

    /// Convert the first table of `html` to CSV text.
    ///
    /// Either the full CSV document is returned or an error; there is no
    /// partial output.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError::NoTable`, `ConversionError::Parse` or
    /// `ConversionError::Encode`.
    pub fn convert(&self, html: &str) -> ConversionResult<String> {
        let grid = self.extract(html)?;
        let csv = encode_csv(&grid, self.options.line_terminator)?;
        debug!(bytes = csv.len(), "Encoded table as CSV");
        Ok(csv)
    }
}

/// Convert the first table of `html` to CSV with default options.
///
/// # Errors
///
/// See [`TableConverter::convert`].
pub fn convert_html_to_csv(html: &str) -> ConversionResult<String> {
    TableConverter::default().convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_repairs_malformed_markup() {
        let grid = TableConverter::default()
            .extract("<table><tr><td>a<td>b<tr><td>c")
            .unwrap();
        assert_eq!(grid.rows(), &[vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_extract_without_table() {
        assert!(matches!(
            TableConverter::default().extract("<p>no rows here</p>"),
            Err(ConversionError::NoTable)
        ));
    }
}
