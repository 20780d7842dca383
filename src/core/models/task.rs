//! Task model
//!
//! A task is a unit of work waiting to be handed to an employee. The engine
//! only reads tasks; the persistence collaborator owns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Proficiency;

/// A task on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,

    /// Short title shown on the board
    pub title: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Coarse category tag (e.g. "frontend")
    #[serde(default)]
    pub specialization: String,

    /// Skills the task needs, in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_skills: Vec<RequiredSkill>,

    /// Priority level
    #[serde(default)]
    pub priority: Priority,

    /// Current status
    #[serde(default)]
    pub status: TaskStatus,

    /// Employee currently holding the task, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,

    /// When this task was created
    pub created_at: DateTime<Utc>,
}

/// A skill a task requires, with the minimum proficiency it expects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredSkill {
    /// Skill name (compared case-insensitively)
    pub name: String,
    /// Minimum proficiency the task expects
    #[serde(default)]
    pub min_proficiency: Proficiency,
}

impl RequiredSkill {
    /// Create a new required skill
    #[must_use]
    pub fn new(name: impl Into<String>, min_proficiency: Proficiency) -> Self {
        Self {
            name: name.into(),
            min_proficiency,
        }
    }
}

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Waiting to be picked up
    #[default]
    Pending,
    /// Being worked on
    #[serde(alias = "in_progress")]
    InProgress,
    /// Finished
    Completed,
    /// Explicitly released with no owner
    Unassigned,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Completed => write!(f, "completed"),
            Self::Unassigned => write!(f, "unassigned"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "inprogress" | "started" => Ok(Self::InProgress),
            "completed" | "done" | "complete" => Ok(Self::Completed),
            "unassigned" => Ok(Self::Unassigned),
            _ => Err(format!(
                "Invalid status: {s}. Use: pending, in-progress, completed, unassigned"
            )),
        }
    }
}

/// Task priority; ordering is `Low < Medium < High`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,
    /// Normal (default)
    #[default]
    Medium,
    /// Handle first
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "3" => Ok(Self::Low),
            "medium" | "med" | "2" => Ok(Self::Medium),
            "high" | "1" => Ok(Self::High),
            _ => Err(format!("Invalid priority: {s}. Use: low, medium, high")),
        }
    }
}

impl Task {
    /// Create a pending, unassigned task
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            specialization: specialization.into(),
            required_skills: Vec::new(),
            priority: Priority::default(),
            status: TaskStatus::default(),
            assignee: None,
            created_at: Utc::now(),
        }
    }

    /// Whether the task has no employee set
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        self.assignee.is_none()
    }

    /// Highest minimum proficiency among the required skills
    #[must_use]
    pub fn hardest_requirement(&self) -> Option<Proficiency> {
        self.required_skills.iter().map(|s| s.min_proficiency).max()
    }
}
