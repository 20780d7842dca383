//! Domain error taxonomy
//!
//! Only infrastructure failures are errors. A task that finds no match is
//! data (an unassigned reason), never an error.

use thiserror::Error;

/// Errors raised by the distribution engine and its collaborators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// Status filter value is not supported
    #[error("invalid status filter: {0:?} (use \"pending\", \"in-progress\" or \"\")")]
    InvalidFilter(String),

    /// Task/employee storage could not be reached
    #[error("persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// CV-parsing service could not be reached
    #[error("CV service unavailable: {0}")]
    CvServiceUnavailable(String),

    /// The atomic commit failed after the result was computed
    #[error("commit failed, no assignments were persisted: {0}")]
    PartialCommitFailure(String),
}

impl DistributionError {
    /// Whether the caller may retry the whole run
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::PersistenceUnavailable(_) | Self::PartialCommitFailure(_))
    }
}
