//! Task repository port
//!
//! Defines the interface for reading candidate tasks.

use crate::core::error::DistributionError;
use crate::core::models::{StatusFilter, Task};

/// Read access to persisted tasks
pub trait TaskRepository: Send + Sync {
    /// List tasks passing the status filter
    ///
    /// Order is unspecified; the candidate pool sorts.
    fn list_tasks(&self, filter: StatusFilter) -> Result<Vec<Task>, DistributionError>;

    /// Look up a single task by ID
    fn get_task(&self, id: &str) -> Result<Option<Task>, DistributionError> {
        Ok(self
            .list_tasks(StatusFilter::AllUnassigned)?
            .into_iter()
            .find(|t| t.id == id))
    }
}
