//! Error types for HTML table conversion
//!
//! Every failure of the conversion pipeline is scoped to a single call.
//! Nothing is retried and no partial CSV is ever returned.

use thiserror::Error;

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Error types for the parse → locate → extract → encode pipeline
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The HTML parser could not build a document tree
    #[error("Failed to parse HTML: {0}")]
    Parse(#[from] std::io::Error),

    /// The document contains no `table` element
    #[error("no table")]
    NoTable,

    /// CSV serialization failed
    #[error("Failed to encode CSV: {0}")]
    Encode(String),
}

impl From<csv::Error> for ConversionError {
    fn from(error: csv::Error) -> Self {
        ConversionError::Encode(error.to_string())
    }
}

impl ConversionError {
    /// Check if the error was caused by the caller's input
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, ConversionError::Parse(_) | ConversionError::NoTable)
    }
}
