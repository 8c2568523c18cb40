//! Getter methods for `ServerConfig`

use std::path::Path;

use super::types::ServerConfig;
use crate::csv_encoder::LineTerminator;
use crate::table_extractor::{CellTextMode, ConvertOptions};

impl ServerConfig {
    #[must_use]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    #[must_use]
    pub fn cell_text(&self) -> CellTextMode {
        self.cell_text
    }

    #[must_use]
    pub fn line_terminator(&self) -> LineTerminator {
        self.line_terminator
    }

    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }

    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    /// Options handed to each conversion
    #[must_use]
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            cell_text: self.cell_text,
            line_terminator: self.line_terminator,
        }
    }
}
