//! Builder for `ServerConfig`
//!
//! Every field has a default, so `ServerConfig::builder().build()` always
//! yields a usable configuration. `build()` validates the values that cannot
//! be expressed in the type system.

use anyhow::{Result, anyhow};
use std::net::SocketAddr;
use std::path::PathBuf;

use super::types::ServerConfig;
use crate::csv_encoder::LineTerminator;
use crate::table_extractor::CellTextMode;
use crate::utils::{DEFAULT_ASSETS_DIR, DEFAULT_BIND_ADDR, DEFAULT_MAX_BODY_BYTES};

pub struct ServerConfigBuilder {
    pub(crate) bind_addr: String,
    pub(crate) cell_text: CellTextMode,
    pub(crate) line_terminator: LineTerminator,
    pub(crate) max_body_bytes: usize,
    pub(crate) assets_dir: PathBuf,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cell_text: CellTextMode::default(),
            line_terminator: LineTerminator::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
        }
    }
}

impl ServerConfigBuilder {
    #[must_use]
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = addr.into();
        self
    }

    /// Select how cell text is read; see [`CellTextMode`]
    #[must_use]
    pub fn cell_text(mut self, mode: CellTextMode) -> Self {
        self.cell_text = mode;
        self
    }

    #[must_use]
    pub fn line_terminator(mut self, terminator: LineTerminator) -> Self {
        self.line_terminator = terminator;
        self
    }

    #[must_use]
    pub fn max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    #[must_use]
    pub fn assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `bind_addr` is not a valid socket address or
    /// `max_body_bytes` is zero.
    pub fn build(self) -> Result<ServerConfig> {
        self.bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| anyhow!("Invalid bind address '{}': {e}", self.bind_addr))?;

        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than zero"));
        }

        Ok(ServerConfig {
            bind_addr: self.bind_addr,
            cell_text: self.cell_text,
            line_terminator: self.line_terminator,
            max_body_bytes: self.max_body_bytes,
            assets_dir: self.assets_dir,
        })
    }
}
