//! Result reporter - turns a run result into its presentation form
//!
//! Pure transformation; IDs are swapped for task titles and employee names.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::models::{Employee, RunResult, Task};

/// Summary returned to whoever triggered the run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionReport {
    /// Number of tasks assigned
    pub assigned_count: usize,
    /// Number of tasks left unassigned
    pub unassigned_count: usize,
    /// Number of tasks considered
    pub total_tasks: usize,
    /// Assignments in commit order
    pub assignments: Vec<AssignmentLine>,
    /// Tasks left unassigned, ordered by task ID
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unassigned: Vec<UnassignedLine>,
}

/// One assignment, in display form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentLine {
    /// Task title
    pub task_title: String,
    /// Employee display name
    pub employee_name: String,
    /// Scoring explanation
    pub reason: String,
    /// Final score
    pub score: i64,
}

/// One unassigned task, in display form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnassignedLine {
    /// Task title
    pub task_title: String,
    /// Why no one got it
    pub reason: String,
}

/// Render a run result
///
/// Unknown IDs fall back to the raw ID.
#[must_use]
pub fn render(result: &RunResult, tasks: &[Task], employees: &[Employee]) -> DistributionReport {
    let titles: HashMap<&str, &str> =
        tasks.iter().map(|t| (t.id.as_str(), t.title.as_str())).collect();
    let names: HashMap<&str, &str> =
        employees.iter().map(|e| (e.id.as_str(), e.name.as_str())).collect();
    let title_of = |id: &str| titles.get(id).copied().unwrap_or(id).to_string();

    DistributionReport {
        assigned_count: result.assigned_count,
        unassigned_count: result.unassigned_count,
        total_tasks: result.total_tasks,
        assignments: result
            .assignments
            .iter()
            .map(|a| AssignmentLine {
                task_title: title_of(&a.task_id),
                employee_name: names
                    .get(a.employee_id.as_str())
                    .copied()
                    .unwrap_or(&a.employee_id)
                    .to_string(),
                reason: a.reason.clone(),
                score: a.score,
            })
            .collect(),
        unassigned: result
            .unassigned_reasons
            .iter()
            .map(|(id, reason)| UnassignedLine {
                task_title: title_of(id),
                reason: reason.clone(),
            })
            .collect(),
    }
}
