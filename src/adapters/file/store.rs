//! JSON CV profile directory
//!
//! Layout: `{dir}/{employee-id}.json`, each file a CV profile as produced by
//! the CV parser:
//!
//! ```json
//! { "extractedSkills": [{ "name": "python", "proficiency": "advanced" }],
//!   "recommendedTasks": [] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::DistributionError;
use crate::core::models::CvProfile;
use crate::core::ports::CvService;

/// CV profiles stored as JSON files
#[derive(Debug, Clone)]
pub struct JsonCvDirectory {
    dir: PathBuf,
}

impl JsonCvDirectory {
    /// Create a source reading from `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the profiles
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding an employee's profile
    #[must_use]
    pub fn profile_path(&self, employee_id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id_to_filename(employee_id)))
    }
}

impl CvService for JsonCvDirectory {
    fn profile(&self, employee_id: &str) -> Result<Option<CvProfile>, DistributionError> {
        if !self.dir.is_dir() {
            return Err(DistributionError::CvServiceUnavailable(format!(
                "CV directory not found: {}",
                self.dir.display()
            )));
        }

        let path = self.profile_path(employee_id);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            DistributionError::CvServiceUnavailable(format!("{}: {e}", path.display()))
        })?;
        match serde_json::from_str(&content) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                // One unreadable profile only costs that employee their CV data
                log::warn!("Ignoring malformed CV profile {}: {e}", path.display());
                Ok(None)
            },
        }
    }
}

/// Convert an employee ID to a safe filename
/// e.g., "emp/42" -> "emp-42"
fn id_to_filename(id: &str) -> String {
    id.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '-' { c } else { '-' })
        .collect()
}
