//! Skill proficiency levels
//!
//! Ordinal skill strength shared by declared skills, required skills and
//! CV-extracted skills.

use serde::{Deserialize, Serialize};

/// Ordinal skill strength (beginner < intermediate < advanced < expert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    /// Just starting out
    #[default]
    Beginner,
    /// Working knowledge
    Intermediate,
    /// Deep working knowledge
    Advanced,
    /// Recognised authority
    Expert,
}

impl Proficiency {
    /// Numeric rank used by the skill-match ratio (beginner = 1 .. expert = 4)
    #[must_use]
    pub const fn rank(self) -> u32 {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Expert => 4,
        }
    }
}

impl std::fmt::Display for Proficiency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

impl std::str::FromStr for Proficiency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "junior" => Ok(Self::Beginner),
            "intermediate" | "mid" => Ok(Self::Intermediate),
            "advanced" | "senior" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            _ => Err(format!(
                "Invalid proficiency: {s}. Use: beginner, intermediate, advanced, expert"
            )),
        }
    }
}
