//! Error types for the weather engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for ledger storage operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised by a ledger storage backend.
///
/// The ledger itself never propagates these; it logs them and degrades.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Reading or writing the backing file failed.
    #[error("ledger I/O error at {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stored data could not be encoded or decoded.
    #[error("ledger data is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The daily post time is not `HH:MM`.
    #[error("invalid post time '{0}': expected HH:MM")]
    InvalidPostTime(String),

    /// A numeric setting could not be parsed.
    #[error("invalid value for {key}: '{value}'")]
    InvalidNumber {
        /// Environment key.
        key: &'static str,
        /// Raw value.
        value: String,
    },
}
