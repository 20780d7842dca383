//! TOML-backed workforce store
//!
//! Implements `TaskRepository`, `EmployeeRepository` and
//! `AssignmentCommitter` over one workforce file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::error::DistributionError;
use crate::core::models::{Assignment, Employee, StatusFilter, Task, TaskStatus};
use crate::core::ports::{AssignmentCommitter, EmployeeRepository, TaskRepository};

use super::parser::{WorkforceFile, load_file};
use super::writer::write_atomic;

/// Workforce store backed by a TOML file
#[derive(Debug)]
pub struct TomlWorkforceStore {
    path: PathBuf,
    /// Serializes read-modify-write commits within this process
    write_lock: Mutex<()>,
}

impl TomlWorkforceStore {
    /// Create a store for the given file
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole file
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::PersistenceUnavailable`] if the file is
    /// missing or cannot be parsed.
    pub fn load(&self) -> Result<WorkforceFile, DistributionError> {
        if !self.path.exists() {
            return Err(DistributionError::PersistenceUnavailable(format!(
                "workforce file not found: {}",
                self.path.display()
            )));
        }
        load_file(&self.path).map_err(|e| {
            DistributionError::PersistenceUnavailable(format!("{}: {e}", self.path.display()))
        })
    }
}

impl TaskRepository for TomlWorkforceStore {
    fn list_tasks(&self, filter: StatusFilter) -> Result<Vec<Task>, DistributionError> {
        Ok(self.load()?.tasks.into_iter().filter(|t| filter.matches(t)).collect())
    }

    fn get_task(&self, id: &str) -> Result<Option<Task>, DistributionError> {
        Ok(self.load()?.tasks.into_iter().find(|t| t.id == id))
    }
}

impl EmployeeRepository for TomlWorkforceStore {
    fn list_active_employees(&self) -> Result<Vec<Employee>, DistributionError> {
        Ok(self.load()?.employees.into_iter().filter(|e| e.active).collect())
    }
}

impl AssignmentCommitter for TomlWorkforceStore {
    fn commit_assignments(&self, assignments: &[Assignment]) -> Result<(), DistributionError> {
        let guard = self
            .write_lock
            .lock()
            .map_err(|_| DistributionError::PartialCommitFailure("store lock poisoned".into()))?;

        let mut file = self
            .load()
            .map_err(|e| DistributionError::PartialCommitFailure(e.to_string()))?;
        apply_assignments(&mut file, assignments)
            .map_err(DistributionError::PartialCommitFailure)?;
        write_atomic(&self.path, &file)
            .map_err(|e| DistributionError::PartialCommitFailure(format!("{e:#}")))?;
        drop(guard);

        log::info!("Committed {} assignment(s) to {}", assignments.len(), self.path.display());
        Ok(())
    }
}

/// Apply a batch to an in-memory file, or reject the whole batch
///
/// Acts as an optimistic check against what was read: every task must still
/// be unassigned and every employee must stay within capacity.
fn apply_assignments(file: &mut WorkforceFile, assignments: &[Assignment]) -> Result<(), String> {
    let mut added: BTreeMap<&str, u32> = BTreeMap::new();
    for a in assignments {
        *added.entry(a.employee_id.as_str()).or_insert(0) += 1;
    }

    for (employee_id, extra) in &added {
        let employee = file
            .employees
            .iter()
            .find(|e| e.id == *employee_id)
            .ok_or_else(|| format!("employee {employee_id} no longer exists"))?;
        if employee.current_active_tasks + extra > employee.max_concurrent_tasks {
            return Err(format!(
                "employee {employee_id} would exceed {} concurrent task(s)",
                employee.max_concurrent_tasks
            ));
        }
    }
    for a in assignments {
        let task = file
            .tasks
            .iter()
            .find(|t| t.id == a.task_id)
            .ok_or_else(|| format!("task {} no longer exists", a.task_id))?;
        if let Some(owner) = &task.assignee {
            return Err(format!("task {} was assigned to {owner} concurrently", a.task_id));
        }
    }

    for a in assignments {
        if let Some(task) = file.tasks.iter_mut().find(|t| t.id == a.task_id) {
            task.assignee = Some(a.employee_id.clone());
            task.status = TaskStatus::InProgress;
        }
    }
    for employee in &mut file.employees {
        if let Some(extra) = added.get(employee.id.as_str()) {
            employee.current_active_tasks += extra;
        }
    }
    Ok(())
}
