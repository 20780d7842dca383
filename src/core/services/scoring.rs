//! Scoring service - weighted (task, employee) match score
//!
//! Pure function, no I/O. The score is additive:
//!
//! - specialization match: `+specialization`
//! - each required skill the employee declares:
//!   `+min(skill_max, skill_max * rank(have) / rank(need))`
//! - each required skill only evidenced by the CV (CV matching on): `+cv_bonus`
//! - workload: `-workload_penalty * current_load`
//!
//! Individual components never go below zero; only the workload term
//! subtracts, so the final score may be negative.

use serde::{Deserialize, Serialize};

use crate::core::models::{
    CvProfile, Employee, Proficiency, RequiredSkill, Task, normalize_skill,
};

/// Point weights for each scoring component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Points for a specialization match
    pub specialization: i64,
    /// Maximum points per matched skill
    pub skill_max: i64,
    /// Points subtracted per active task
    pub workload_penalty: i64,
    /// Points for a required skill found only in the CV
    pub cv_bonus: i64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            specialization: 50,
            skill_max: 10,
            workload_penalty: 12,
            cv_bonus: 5,
        }
    }
}

impl ScoringWeights {
    /// Name of the first negative weight, if any
    ///
    /// Every weight is an amount of points; a negative `workload_penalty`
    /// would let a score rise with workload.
    #[must_use]
    pub const fn first_negative(&self) -> Option<&'static str> {
        if self.specialization < 0 {
            Some("specialization")
        } else if self.skill_max < 0 {
            Some("skill_max")
        } else if self.workload_penalty < 0 {
            Some("workload_penalty")
        } else if self.cv_bonus < 0 {
            Some("cv_bonus")
        } else {
            None
        }
    }
}

/// One scoring component that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreComponent {
    /// Task and employee share a specialization
    Specialization(i64),
    /// Declared skill matched a requirement
    Skill {
        /// Skill name as written on the task
        name: String,
        /// Points awarded
        points: i64,
    },
    /// CV-only skill matched a requirement
    CvBonus {
        /// Skill name as written on the task
        name: String,
        /// Points awarded
        points: i64,
    },
    /// Penalty for tasks already held (stored as a positive amount)
    Workload(i64),
}

impl ScoreComponent {
    /// Signed contribution to the total
    #[must_use]
    pub const fn points(&self) -> i64 {
        match self {
            Self::Specialization(p)
            | Self::Skill { points: p, .. }
            | Self::CvBonus { points: p, .. } => *p,
            Self::Workload(p) => -*p,
        }
    }
}

impl std::fmt::Display for ScoreComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Specialization(p) => write!(f, "specialization+{p}"),
            Self::Skill { name, points } => write!(f, "skill:{name}+{points}"),
            Self::CvBonus { name, points } => write!(f, "cv:{name}+{points}"),
            Self::Workload(p) => write!(f, "workload-{p}"),
        }
    }
}

/// Score for one (task, employee) pair with its explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchScore {
    /// Total points
    pub points: i64,
    /// Components that fired, in reporting order
    pub components: Vec<ScoreComponent>,
}

impl MatchScore {
    /// Human-readable summary, e.g. `specialization+50, skill:react+8, workload-24`
    #[must_use]
    pub fn reason(&self) -> String {
        if self.components.is_empty() {
            return "no matching criteria".to_string();
        }
        self.components.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    }
}

/// Points for one matched skill
///
/// `min(max, max * rank(have) / rank(need))`, integer division.
#[must_use]
pub fn skill_points(have: Proficiency, need: Proficiency, max: i64) -> i64 {
    let max = max.max(0);
    let scaled = max * i64::from(have.rank()) / i64::from(need.rank());
    scaled.clamp(0, max)
}

/// Match a list of requirements against a skill lookup
///
/// Returns `(requirement, points)` for every requirement the lookup knows.
/// Missing skills are skipped; they never subtract.
pub fn match_skills<'a, F>(
    required: &'a [RequiredSkill],
    max: i64,
    mut lookup: F,
) -> Vec<(&'a RequiredSkill, i64)>
where
    F: FnMut(&str) -> Option<Proficiency>,
{
    required
        .iter()
        .filter_map(|req| {
            lookup(&req.name).map(|have| (req, skill_points(have, req.min_proficiency, max)))
        })
        .collect()
}

/// Whether an employee can take another task given the run's workload view
#[must_use]
pub const fn has_capacity(employee: &Employee, current_load: u32) -> bool {
    current_load < employee.max_concurrent_tasks
}

/// Weighted match scoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    /// Create an engine with the given weights
    #[must_use]
    pub const fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Weights in use
    #[must_use]
    pub const fn weights(&self) -> ScoringWeights {
        self.weights
    }

    /// Score one pair
    ///
    /// `current_load` is the run's snapshot value, not the persisted one.
    /// `cv` is only consulted when CV matching is on for the run; pass
    /// `None` otherwise. Capacity is not checked here; see [`has_capacity`].
    #[must_use]
    pub fn score(
        &self,
        task: &Task,
        employee: &Employee,
        current_load: u32,
        cv: Option<&CvProfile>,
    ) -> MatchScore {
        let w = self.weights;
        let mut components = Vec::new();

        if !task.specialization.trim().is_empty()
            && normalize_skill(&task.specialization) == normalize_skill(&employee.specialization)
        {
            components.push(ScoreComponent::Specialization(w.specialization));
        }

        let declared = match_skills(&task.required_skills, w.skill_max, |name| {
            employee.skill(name).map(|s| s.proficiency)
        });
        for (req, points) in declared {
            components.push(ScoreComponent::Skill {
                name: req.name.clone(),
                points,
            });
        }

        if let Some(cv) = cv {
            for req in &task.required_skills {
                if employee.skill(&req.name).is_some() {
                    continue;
                }
                let wanted = normalize_skill(&req.name);
                if cv.extracted_skills.iter().any(|s| normalize_skill(&s.name) == wanted) {
                    components.push(ScoreComponent::CvBonus {
                        name: req.name.clone(),
                        points: w.cv_bonus,
                    });
                }
            }
        }

        if current_load > 0 {
            components.push(ScoreComponent::Workload(w.workload_penalty * i64::from(current_load)));
        }

        let points = components.iter().map(ScoreComponent::points).sum();
        MatchScore { points, components }
    }
}
