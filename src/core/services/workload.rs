//! Per-run workload view
//!
//! Seeded once from persisted active-task counts and bumped after every
//! committed assignment, so later tasks in the same run see the load of
//! employees that were already picked. One snapshot belongs to one run.

use std::collections::BTreeMap;

use crate::core::models::Employee;

/// Mutable active-task counts for a single run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WorkloadSnapshot {
    counts: BTreeMap<String, u32>,
}

impl WorkloadSnapshot {
    /// Seed from the employees' persisted counts
    #[must_use]
    pub fn from_employees(employees: &[Employee]) -> Self {
        Self {
            counts: employees
                .iter()
                .map(|e| (e.id.clone(), e.current_active_tasks))
                .collect(),
        }
    }

    /// Current count for an employee (0 if unknown)
    #[must_use]
    pub fn get(&self, employee_id: &str) -> u32 {
        self.counts.get(employee_id).copied().unwrap_or(0)
    }

    /// Record one more active task for an employee
    ///
    /// Called exactly once per committed assignment, before the next task
    /// is scored.
    pub fn increment(&mut self, employee_id: &str) {
        let count = self.counts.entry(employee_id.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }
}
