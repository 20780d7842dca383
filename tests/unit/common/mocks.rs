//! In-memory implementations of port traits for testing
//!
//! These provide configurable behavior for unit testing without real I/O.

use std::collections::BTreeMap;
use std::sync::Mutex;

use taskdist::core::DistributionError;
use taskdist::core::models::{Assignment, CvProfile, Employee, StatusFilter, Task, TaskStatus};
use taskdist::core::ports::{AssignmentCommitter, CvService, EmployeeRepository, TaskRepository};

/// Workforce held in memory; implements all three persistence ports
#[derive(Default)]
pub struct InMemoryWorkforce {
    tasks: Mutex<Vec<Task>>,
    employees: Mutex<Vec<Employee>>,
    commits: Mutex<Vec<Vec<Assignment>>>,
    reads: Mutex<usize>,
    unreachable: bool,
    fail_commit: bool,
}

impl InMemoryWorkforce {
    pub fn new(tasks: Vec<Task>, employees: Vec<Employee>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
            employees: Mutex::new(employees),
            ..Self::default()
        }
    }

    /// Every read fails with `PersistenceUnavailable`
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    /// Reads succeed, commits fail
    pub fn failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.employees.lock().unwrap().clone()
    }

    /// Batches that were committed, in order
    pub fn commits(&self) -> Vec<Vec<Assignment>> {
        self.commits.lock().unwrap().clone()
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    fn check_reachable(&self) -> Result<(), DistributionError> {
        *self.reads.lock().unwrap() += 1;
        if self.unreachable {
            return Err(DistributionError::PersistenceUnavailable("store offline".into()));
        }
        Ok(())
    }
}

impl TaskRepository for InMemoryWorkforce {
    fn list_tasks(&self, filter: StatusFilter) -> Result<Vec<Task>, DistributionError> {
        self.check_reachable()?;
        Ok(self.tasks.lock().unwrap().iter().filter(|t| filter.matches(t)).cloned().collect())
    }
}

impl EmployeeRepository for InMemoryWorkforce {
    fn list_active_employees(&self) -> Result<Vec<Employee>, DistributionError> {
        self.check_reachable()?;
        Ok(self.employees.lock().unwrap().iter().filter(|e| e.active).cloned().collect())
    }
}

impl AssignmentCommitter for InMemoryWorkforce {
    fn commit_assignments(&self, assignments: &[Assignment]) -> Result<(), DistributionError> {
        if self.fail_commit {
            return Err(DistributionError::PersistenceUnavailable("write refused".into()));
        }
        let mut tasks = self.tasks.lock().unwrap();
        let mut employees = self.employees.lock().unwrap();
        for a in assignments {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == a.task_id) {
                task.assignee = Some(a.employee_id.clone());
                task.status = TaskStatus::InProgress;
            }
            if let Some(employee) = employees.iter_mut().find(|e| e.id == a.employee_id) {
                employee.current_active_tasks += 1;
            }
        }
        self.commits.lock().unwrap().push(assignments.to_vec());
        Ok(())
    }
}

/// CV service backed by a fixed map
#[derive(Default)]
pub struct StaticCvService {
    profiles: BTreeMap<String, CvProfile>,
    unavailable: bool,
}

impl StaticCvService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, employee_id: &str, profile: CvProfile) -> Self {
        self.profiles.insert(employee_id.to_string(), profile);
        self
    }

    /// Every lookup fails with `CvServiceUnavailable`
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

impl CvService for StaticCvService {
    fn profile(&self, employee_id: &str) -> Result<Option<CvProfile>, DistributionError> {
        if self.unavailable {
            return Err(DistributionError::CvServiceUnavailable("parser offline".into()));
        }
        Ok(self.profiles.get(employee_id).cloned())
    }
}
