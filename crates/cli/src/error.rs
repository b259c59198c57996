//! CLI error types.

use std::path::PathBuf;

use analytics::AnalyticsError;
use thiserror::Error;

/// Errors that can stop the report from being produced.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input document could not be opened or read.
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Analysis failed or the input was rejected.
    #[error("Analysis error: {0}")]
    Analytics(#[from] AnalyticsError),

    /// The report could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An environment variable held an unusable value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<domain::DomainError> for CliError {
    fn from(err: domain::DomainError) -> Self {
        CliError::Analytics(err.into())
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
