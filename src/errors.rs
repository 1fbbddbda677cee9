//! Unified error types for the fallible edges of the dashboard.
//!
//! Metric derivation itself never fails; only configuration loading and the
//! export writer can produce these errors.

use thiserror::Error;

/// Errors raised while configuring the dashboard or writing its export.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment value was unreadable or invalid
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Filesystem failure while reading config or writing the export
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Export document could not be serialized
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment variable present but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
