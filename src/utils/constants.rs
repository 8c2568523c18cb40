//! Shared configuration constants for table2csv
//!
//! Default values and environment variable names used by the server
//! configuration, kept in one place to avoid magic values.

/// Default listen address: all interfaces, port 8080
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Host used when only a port is given via `PORT`
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default request body limit: 2 MiB
///
/// Pasted HTML pages with a single data table are typically well below
/// 500 KB. The limit bounds parser memory per request.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Default directory holding `favicon.ico`
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// Full listen address, e.g. `127.0.0.1:9000`. Takes precedence over `PORT`.
pub const ENV_BIND_ADDR: &str = "TABLE2CSV_ADDR";

/// Port only; combined with [`DEFAULT_BIND_HOST`].
pub const ENV_PORT: &str = "PORT";

/// `flatten` or `first-child`
pub const ENV_CELL_TEXT: &str = "TABLE2CSV_CELL_TEXT";

/// `lf` or `crlf`
pub const ENV_LINE_ENDING: &str = "TABLE2CSV_LINE_ENDING";

pub const ENV_MAX_BODY_BYTES: &str = "TABLE2CSV_MAX_BODY_BYTES";

pub const ENV_ASSETS_DIR: &str = "TABLE2CSV_ASSETS_DIR";
