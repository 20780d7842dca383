//! Candidate pool - tasks and employees eligible for one run
//!
//! Both lists come out in a stable order (tasks by creation time then ID,
//! employees by ID) so repeated runs on the same data agree.

use serde::{Deserialize, Serialize};

use crate::core::error::DistributionError;
use crate::core::models::{Employee, Role, StatusFilter, Task};
use crate::core::ports::{EmployeeRepository, TaskRepository};

/// Which employees may receive tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolPolicy {
    /// Roles that receive tasks
    pub eligible_roles: Vec<Role>,
}

impl Default for PoolPolicy {
    fn default() -> Self {
        Self {
            eligible_roles: vec![Role::Employee, Role::Trainee],
        }
    }
}

impl PoolPolicy {
    /// Whether an employee can receive tasks at all
    ///
    /// Workload is not considered here; the solver applies the capacity
    /// filter per task.
    #[must_use]
    pub fn admits(&self, employee: &Employee) -> bool {
        employee.active && self.eligible_roles.contains(&employee.role)
    }
}

/// Filtered, ordered inputs for a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    /// Candidate tasks, by creation time then ID
    pub tasks: Vec<Task>,
    /// Candidate employees, by ID
    pub employees: Vec<Employee>,
}

impl CandidatePool {
    /// Read both sources and build the pool
    ///
    /// # Errors
    ///
    /// Propagates storage failures from either repository.
    pub fn build(
        filter: StatusFilter,
        policy: &PoolPolicy,
        task_source: &dyn TaskRepository,
        employee_source: &dyn EmployeeRepository,
    ) -> Result<Self, DistributionError> {
        let tasks = task_source.list_tasks(filter)?;
        let employees = employee_source.list_active_employees()?;
        let pool = Self::from_parts(filter, policy, tasks, employees);
        log::debug!(
            "Candidate pool ({filter}): {} task(s), {} employee(s)",
            pool.tasks.len(),
            pool.employees.len()
        );
        Ok(pool)
    }

    /// Filter and order already-loaded data
    #[must_use]
    pub fn from_parts(
        filter: StatusFilter,
        policy: &PoolPolicy,
        tasks: Vec<Task>,
        employees: Vec<Employee>,
    ) -> Self {
        let mut tasks: Vec<Task> = tasks.into_iter().filter(|t| filter.matches(t)).collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let mut employees: Vec<Employee> =
            employees.into_iter().filter(|e| policy.admits(e)).collect();
        employees.sort_by(|a, b| a.id.cmp(&b.id));

        Self { tasks, employees }
    }

    /// Whether there is nothing to distribute
    #[must_use]
    pub fn has_no_tasks(&self) -> bool {
        self.tasks.is_empty()
    }
}
