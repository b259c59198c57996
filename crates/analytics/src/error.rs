//! Analytics error types.

use domain::DomainError;
use thiserror::Error;

/// Errors that can abort an analysis run.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Invalid data, missing strategies, or a rejected purchase item.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// An item error policy name could not be parsed.
    #[error("Unknown item error policy: {0} (expected \"abort\" or \"skip\")")]
    UnknownItemErrorPolicy(String),
}

impl AnalyticsError {
    /// Returns true for malformed or empty input collections.
    pub fn is_invalid_data(&self) -> bool {
        matches!(self, AnalyticsError::Domain(DomainError::InvalidData(_)))
    }

    /// Returns true when a required strategy was missing.
    pub fn is_invalid_options(&self) -> bool {
        matches!(self, AnalyticsError::Domain(DomainError::InvalidOptions(_)))
    }

    /// Returns true when a purchase item was rejected by the revenue strategy.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            AnalyticsError::Domain(DomainError::InvalidInput { .. })
        )
    }
}

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
