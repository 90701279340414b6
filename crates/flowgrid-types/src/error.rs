//! Error types for flowgrid.
//!
//! Packing and placement are total and never fail; these errors only come
//! from loading and validating configuration.

use std::io;

/// Errors produced by flowgrid.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FlowError>;
