//! Structured error types for structq-core.
//!
//! The binary (structq-cli) wraps these in `anyhow` for context; library
//! callers get a matchable enum.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for structq-core operations
#[derive(Error, Debug)]
pub enum StructqError {
    /// Connecting to or querying the data store failed
    #[error("Database error: {source}")]
    Database {
        #[from]
        source: sqlx::Error,
    },

    /// Writing the result set failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serializing the result set failed
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// Configuration file could not be parsed
    #[error("Invalid config file {path:?}: {reason}")]
    ConfigFile { path: PathBuf, reason: String },
}

/// Result type alias for structq-core operations
pub type Result<T> = std::result::Result<T, StructqError>;

impl StructqError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a config file error
    pub fn config_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::ConfigFile {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
