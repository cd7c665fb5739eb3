//! Error types for geokd.
//!
//! Inserting, querying and counting never fail. Errors only come from the
//! checked edges: coordinate validation, configuration parsing and
//! configuration validation.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeoKdError>;

#[derive(Debug, Error)]
pub enum GeoKdError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
