//! CV profile model
//!
//! Data supplied by the CV-parsing collaborator. It is advisory: only the
//! extracted skills ever influence scoring.

use serde::{Deserialize, Serialize};

use super::Proficiency;

/// Skills and task suggestions extracted from an employee's CV
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvProfile {
    /// Skills found in the CV, in extraction order
    #[serde(default)]
    pub extracted_skills: Vec<CvSkill>,
    /// Task suggestions produced by the parser
    #[serde(default)]
    pub recommended_tasks: Vec<RecommendedTask>,
}

/// A skill extracted from a CV
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvSkill {
    /// Skill name
    pub name: String,
    /// Proficiency inferred from the CV
    #[serde(default)]
    pub proficiency: Proficiency,
}

impl CvSkill {
    /// Create a new CV skill
    #[must_use]
    pub fn new(name: impl Into<String>, proficiency: Proficiency) -> Self {
        Self {
            name: name.into(),
            proficiency,
        }
    }
}

/// A task suggested by the CV parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTask {
    /// Task the suggestion refers to
    pub task_id: String,
    /// Difficulty label ("easy", "medium", "hard", "expert")
    #[serde(default)]
    pub difficulty: String,
    /// Why the task was suggested
    #[serde(default)]
    pub reason: String,
}

impl CvProfile {
    /// Profile with only extracted skills
    #[must_use]
    pub const fn with_skills(extracted_skills: Vec<CvSkill>) -> Self {
        Self {
            extracted_skills,
            recommended_tasks: Vec::new(),
        }
    }

    /// Whether the profile carries nothing usable
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extracted_skills.is_empty() && self.recommended_tasks.is_empty()
    }
}
