//! Run output models
//!
//! [`Assignment`] records are produced only by the solver and never change
//! afterwards. A [`RunResult`] lives for a single run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One committed (task, employee) pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Task that was assigned
    pub task_id: String,
    /// Employee that received it
    pub employee_id: String,
    /// Final match score
    pub score: i64,
    /// Which scoring components fired
    pub reason: String,
}

/// Outcome of one completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    /// Number of tasks assigned
    pub assigned_count: usize,
    /// Number of tasks left unassigned
    pub unassigned_count: usize,
    /// Number of tasks considered
    pub total_tasks: usize,
    /// Assignments in commit order
    pub assignments: Vec<Assignment>,
    /// Task id to reason, for every task left unassigned
    pub unassigned_reasons: BTreeMap<String, String>,
}

impl RunResult {
    /// Assemble a result from committed assignments and unassigned reasons
    #[must_use]
    pub fn new(assignments: Vec<Assignment>, unassigned_reasons: BTreeMap<String, String>) -> Self {
        Self {
            assigned_count: assignments.len(),
            unassigned_count: unassigned_reasons.len(),
            total_tasks: assignments.len() + unassigned_reasons.len(),
            assignments,
            unassigned_reasons,
        }
    }

    /// Result for a run with no candidate tasks
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Find the assignment for a task
    #[must_use]
    pub fn assignment_for(&self, task_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.task_id == task_id)
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run finished
    Completed(RunResult),
    /// The run was cancelled between tasks; nothing was committed
    Cancelled,
}

impl RunOutcome {
    /// The result, if the run completed
    #[must_use]
    pub const fn result(&self) -> Option<&RunResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Cancelled => None,
        }
    }

    /// Whether the run was cancelled
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
