//! TOML parser for workforce files
//!
//! ```toml
//! [[task]]
//! id = "T1"
//! title = "Build login form"
//! specialization = "frontend"
//! priority = "high"
//! created_at = "2025-01-06T09:00:00Z"
//! required_skills = [{ name = "react", min_proficiency = "advanced" }]
//!
//! [[employee]]
//! id = "E1"
//! name = "Ada"
//! specialization = "frontend"
//! max_concurrent_tasks = 3
//! skills = [{ name = "react", proficiency = "expert" }]
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::{Employee, Task};

/// A workforce file: every task and employee the store knows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkforceFile {
    /// Tasks
    #[serde(default, rename = "task")]
    pub tasks: Vec<Task>,

    /// Employees
    #[serde(default, rename = "employee")]
    pub employees: Vec<Employee>,
}

/// Load a workforce file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if two tasks
/// or two employees share an ID.
pub fn load_file(path: &Path) -> anyhow::Result<WorkforceFile> {
    let content = fs::read_to_string(path)?;
    let file: WorkforceFile = toml::from_str(&content)?;
    file.check_unique_ids()?;
    Ok(file)
}

impl WorkforceFile {
    /// Reject duplicate task or employee IDs
    ///
    /// # Errors
    ///
    /// Names the first duplicated ID.
    pub fn check_unique_ids(&self) -> anyhow::Result<()> {
        if let Some(id) = first_duplicate(self.tasks.iter().map(|t| t.id.as_str())) {
            anyhow::bail!("duplicate task id {id:?}");
        }
        if let Some(id) = first_duplicate(self.employees.iter().map(|e| e.id.as_str())) {
            anyhow::bail!("duplicate employee id {id:?}");
        }
        Ok(())
    }
}

fn first_duplicate<'a>(mut ids: impl Iterator<Item = &'a str>) -> Option<&'a str> {
    let mut seen = BTreeSet::new();
    ids.find(|id| !seen.insert(*id))
}
