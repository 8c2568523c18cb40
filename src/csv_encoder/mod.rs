//! CSV serialization of extracted table grids
//!
//! Built on the `csv` crate writer: fields are quoted only when they contain
//! the delimiter, a double quote or a line break, and embedded quotes are
//! doubled. Every record, including the last one, ends with the configured
//! terminator.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::table_extractor::{ConversionError, ConversionResult, Grid};

/// Record terminator written after every CSV row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTerminator {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    Crlf,
}

impl LineTerminator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::Crlf => "\r\n",
        }
    }

    fn to_csv_terminator(self) -> Terminator {
        match self {
            LineTerminator::Lf => Terminator::Any(b'\n'),
            LineTerminator::Crlf => Terminator::CRLF,
        }
    }
}

impl FromStr for LineTerminator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lf" => Ok(LineTerminator::Lf),
            "crlf" => Ok(LineTerminator::Crlf),
            other => Err(format!(
                "unknown line ending '{other}' (expected 'lf' or 'crlf')"
            )),
        }
    }
}

/// Serialize a grid to CSV text.
///
/// Rows may have different lengths. An empty grid encodes to an empty string.
pub fn encode_csv(grid: &Grid, terminator: LineTerminator) -> ConversionResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(terminator.to_csv_terminator())
        .flexible(true)
        .from_writer(Vec::new());

    for row in grid.rows() {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConversionError::Encode(e.error().to_string()))?;

    String::from_utf8(bytes).map_err(|e| ConversionError::Encode(e.to_string()))
}
