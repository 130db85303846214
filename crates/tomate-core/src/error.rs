//! Core error types for tomate-core.
//!
//! A thiserror-based hierarchy: `CoreError` at the top, with store and
//! configuration failures as their own enums so callers can react to a
//! corrupt session log differently from an unwritable one.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tomate-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session log errors
    #[error("Session log error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Session-log-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or read the log file
    #[error("Failed to open session log at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to append a record
    #[error("Failed to append to session log at {path}: {source}")]
    AppendFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode a record as JSON
    #[error("Failed to encode session record: {0}")]
    Encode(#[from] serde_json::Error),

    /// The log exists but a line does not parse as a record
    #[error("Session log at {path} is corrupt (line {line}): {message}")]
    Corrupt {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
