//! Domain error types.

use thiserror::Error;

/// Errors that can occur while validating sales data or scoring it.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Top-level input collections are missing, malformed, or empty.
    #[error("Invalid input data: {0}")]
    InvalidData(String),

    /// A required scoring strategy was not supplied.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A single purchase item failed validation in a revenue strategy.
    #[error("Invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: String },
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, DomainError>;
