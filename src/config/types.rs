//! Core configuration types for the table2csv server
//!
//! `ServerConfig` holds everything the HTTP host needs plus the options passed
//! down to each conversion.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::csv_encoder::LineTerminator;
use crate::table_extractor::CellTextMode;

/// Main configuration struct for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    ///
    /// **INVARIANT:** Always parses as a `SocketAddr` (validated in builder).
    pub(crate) bind_addr: String,

    /// How `td`/`th` text is read
    ///
    /// Default: `Flatten`
    pub(crate) cell_text: CellTextMode,

    /// Record terminator of the produced CSV
    ///
    /// Default: `Lf`
    pub(crate) line_terminator: LineTerminator,

    /// Maximum accepted request body size in bytes
    ///
    /// Default: 2 MiB, must be greater than zero
    pub(crate) max_body_bytes: usize,

    /// Directory containing `favicon.ico`
    pub(crate) assets_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: crate::utils::DEFAULT_BIND_ADDR.to_string(),
            cell_text: CellTextMode::default(),
            line_terminator: LineTerminator::default(),
            max_body_bytes: crate::utils::DEFAULT_MAX_BODY_BYTES,
            assets_dir: PathBuf::from(crate::utils::DEFAULT_ASSETS_DIR),
        }
    }
}

impl ServerConfig {
    /// Create a new builder
    #[must_use]
    pub fn builder() -> super::builder::ServerConfigBuilder {
        super::builder::ServerConfigBuilder::default()
    }
}
