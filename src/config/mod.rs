//! Configuration module for the table2csv server
//!
//! This module provides the `ServerConfig` struct, its builder and
//! environment-variable loading with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::ServerConfigBuilder;
pub use env::ConfigError;
pub use types::ServerConfig;
