//! Loading `ServerConfig` from environment variables
//!
//! Unset variables keep the builder defaults. `TABLE2CSV_ADDR` wins over
//! `PORT`; `PORT` alone binds all interfaces on that port.

use anyhow::Result;
use std::str::FromStr;

use super::types::ServerConfig;
use crate::utils::{
    DEFAULT_BIND_HOST, ENV_ASSETS_DIR, ENV_BIND_ADDR, ENV_CELL_TEXT, ENV_LINE_ENDING,
    ENV_MAX_BODY_BYTES, ENV_PORT,
};

/// Error for an environment variable that is set but unusable
#[derive(Debug, thiserror::Error)]
#[error("Invalid value '{value}' for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

impl ServerConfig {
    /// Build a configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or the
    /// resulting configuration fails validation.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = ServerConfig::builder();

        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            builder = builder.bind_addr(addr.trim());
        } else if let Some(port) = lookup(ENV_PORT) {
            let port: u16 = parse_var(ENV_PORT, port)?;
            builder = builder.bind_addr(format!("{DEFAULT_BIND_HOST}:{port}"));
        }

        if let Some(mode) = lookup(ENV_CELL_TEXT) {
            builder = builder.cell_text(parse_var(ENV_CELL_TEXT, mode)?);
        }

        if let Some(ending) = lookup(ENV_LINE_ENDING) {
            builder = builder.line_terminator(parse_var(ENV_LINE_ENDING, ending)?);
        }

        if let Some(limit) = lookup(ENV_MAX_BODY_BYTES) {
            builder = builder.max_body_bytes(parse_var(ENV_MAX_BODY_BYTES, limit)?);
        }

        if let Some(dir) = lookup(ENV_ASSETS_DIR) {
            builder = builder.assets_dir(dir);
        }

        builder.build()
    }
}
