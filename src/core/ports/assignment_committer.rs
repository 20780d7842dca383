//! Assignment commit port
//!
//! Defines the single write the engine ever asks for.

use crate::core::error::DistributionError;
use crate::core::models::Assignment;

/// Atomic batch write of a run's assignments
///
/// Implementations must apply every task status/assignee update and every
/// employee workload update together, or none of them. A failure must leave
/// storage exactly as it was before the call.
pub trait AssignmentCommitter: Send + Sync {
    /// Persist all assignments as one atomic operation
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::PartialCommitFailure`] if the write did
    /// not go through.
    fn commit_assignments(&self, assignments: &[Assignment]) -> Result<(), DistributionError>;
}
