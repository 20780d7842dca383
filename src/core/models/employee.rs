//! Employee model
//!
//! An employee is a candidate for receiving tasks. The workload count here
//! is the persisted value; during a run the engine works on a
//! [`WorkloadSnapshot`](crate::core::services::WorkloadSnapshot) instead.

use serde::{Deserialize, Serialize};

use super::Proficiency;

/// An employee that may receive tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Coarse category tag (e.g. "backend")
    #[serde(default)]
    pub specialization: String,

    /// Declared skills, in profile order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<Skill>,

    /// Active (non-completed) tasks currently held
    #[serde(default)]
    pub current_active_tasks: u32,

    /// Hard cap on concurrently held tasks (at least 1)
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_tasks: u32,

    /// Role, used for eligibility
    #[serde(default)]
    pub role: Role,

    /// Whether the account is active
    #[serde(default = "default_active")]
    pub active: bool,
}

const fn default_max_concurrent() -> u32 {
    3
}

const fn default_active() -> bool {
    true
}

/// A named skill with a proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Skill name (compared case-insensitively)
    pub name: String,
    /// How strong the skill is
    #[serde(default)]
    pub proficiency: Proficiency,
}

impl Skill {
    /// Create a new skill
    #[must_use]
    pub fn new(name: impl Into<String>, proficiency: Proficiency) -> Self {
        Self {
            name: name.into(),
            proficiency,
        }
    }
}

/// Employee role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular staff member
    #[default]
    Employee,
    /// Trainee under evaluation
    Trainee,
    /// HR staff (runs distributions, does not receive tasks by default)
    Hr,
    /// Administrator
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Employee => write!(f, "employee"),
            Self::Trainee => write!(f, "trainee"),
            Self::Hr => write!(f, "hr"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "employee" | "staff" => Ok(Self::Employee),
            "trainee" | "intern" => Ok(Self::Trainee),
            "hr" => Ok(Self::Hr),
            "admin" | "administrator" => Ok(Self::Admin),
            _ => Err(format!("Invalid role: {s}. Use: employee, trainee, hr, admin")),
        }
    }
}

impl Employee {
    /// Create an active employee with no skills and no workload
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialization: specialization.into(),
            skills: Vec::new(),
            current_active_tasks: 0,
            max_concurrent_tasks: default_max_concurrent(),
            role: Role::default(),
            active: true,
        }
    }

    /// Look up a declared skill by name (case-insensitive, first match wins)
    #[must_use]
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        let wanted = normalize_skill(name);
        self.skills.iter().find(|s| normalize_skill(&s.name) == wanted)
    }
}

/// Canonical form of a skill name for comparisons
#[must_use]
pub fn normalize_skill(name: &str) -> String {
    name.trim().to_lowercase()
}
