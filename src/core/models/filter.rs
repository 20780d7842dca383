//! Status filter for selecting candidate tasks

use super::{Task, TaskStatus};
use crate::core::error::DistributionError;

/// Which tasks a run considers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    /// Unassigned tasks with status `pending`
    Pending,
    /// Unassigned tasks with status `in-progress`
    InProgress,
    /// Every unassigned task that is not completed
    #[default]
    AllUnassigned,
}

impl StatusFilter {
    /// Parse the wire value (`"pending"`, `"in-progress"`, or `""`)
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidFilter`] for any other value.
    pub fn parse(value: &str) -> Result<Self, DistributionError> {
        match value.trim() {
            "" => Ok(Self::AllUnassigned),
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" => Ok(Self::InProgress),
            other => Err(DistributionError::InvalidFilter(other.to_string())),
        }
    }

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::AllUnassigned => "",
        }
    }

    /// Whether a task passes this filter
    ///
    /// Tasks that already have an assignee never pass.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        if !task.is_unassigned() {
            return false;
        }
        match self {
            Self::Pending => task.status == TaskStatus::Pending,
            Self::InProgress => task.status == TaskStatus::InProgress,
            Self::AllUnassigned => task.status != TaskStatus::Completed,
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AllUnassigned => write!(f, "all unassigned"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = DistributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
