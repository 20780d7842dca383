//! CV match advisor
//!
//! Two uses of CV data:
//!
//! - distribute mode: [`fetch_profiles`] gathers CV skills that the scoring
//!   engine turns into CV-bonus terms for one run. Declared skills are never
//!   overwritten.
//! - analyze mode: [`CvMatchAdvisor::analyze`] merges extracted skills and
//!   proposes fitting tasks. Read-only; nothing is scored against workload
//!   and nothing is committed.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::core::error::DistributionError;
use crate::core::models::{CvSkill, Employee, Proficiency, Task, normalize_skill};
use crate::core::ports::CvService;

use super::pool::CandidatePool;
use super::scoring::match_skills;
use super::solver::{CvProfiles, canonical_order};

/// Result of an analyze call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Whether any CV data was available
    pub cv_available: bool,
    /// Merged CV skills, ordered by name
    pub extracted_skills: Vec<CvSkill>,
    /// Tasks that fit the extracted skills, best first
    pub recommended_tasks: Vec<TaskRecommendation>,
}

impl AnalysisReport {
    /// Explicit "no CV data" answer
    #[must_use]
    pub fn no_cv_data() -> Self {
        Self::default()
    }
}

/// A task suggested by the analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecommendation {
    /// Task ID
    pub task_id: String,
    /// Task title
    pub title: String,
    /// Difficulty label
    pub difficulty: String,
    /// Which skills made the task fit
    pub reason: String,
    /// Skill-match points against the merged CV skills
    pub match_points: i64,
}

/// Gather CV profiles for a set of employees
///
/// Employees without CV data, or with an empty profile, are left out.
///
/// # Errors
///
/// Returns the first [`DistributionError::CvServiceUnavailable`] (or other
/// error) the service reports. Callers decide how to degrade.
pub fn fetch_profiles(
    service: &dyn CvService,
    employees: &[Employee],
) -> Result<CvProfiles, DistributionError> {
    let mut profiles = CvProfiles::new();
    for employee in employees {
        if let Some(profile) = service.profile(&employee.id)?
            && !profile.is_empty()
        {
            profiles.insert(employee.id.clone(), profile);
        }
    }
    Ok(profiles)
}

/// Difficulty label for a task, from its hardest requirement
#[must_use]
pub fn difficulty(task: &Task) -> &'static str {
    match task.hardest_requirement() {
        Some(Proficiency::Beginner) => "easy",
        Some(Proficiency::Intermediate) | None => "medium",
        Some(Proficiency::Advanced) => "hard",
        Some(Proficiency::Expert) => "expert",
    }
}

/// Advisory matching of CV skills against candidate tasks
#[derive(Debug, Clone, Copy)]
pub struct CvMatchAdvisor {
    skill_max: i64,
}

impl Default for CvMatchAdvisor {
    fn default() -> Self {
        Self::new(super::scoring::ScoringWeights::default().skill_max)
    }
}

impl CvMatchAdvisor {
    /// Create an advisor using the given per-skill maximum
    #[must_use]
    pub const fn new(skill_max: i64) -> Self {
        Self { skill_max }
    }

    /// Merge CV skills across profiles and recommend tasks from the pool
    #[must_use]
    pub fn analyze(&self, pool: &CandidatePool, profiles: &CvProfiles) -> AnalysisReport {
        if profiles.is_empty() {
            return AnalysisReport::no_cv_data();
        }

        let merged = merge_skills(profiles);

        let mut recommended: Vec<TaskRecommendation> = canonical_order(&pool.tasks)
            .into_iter()
            .filter_map(|task| {
                let matched = match_skills(&task.required_skills, self.skill_max, |name| {
                    merged.get(&normalize_skill(name)).map(|s| s.proficiency)
                });
                let points: i64 = matched.iter().map(|(_, p)| p).sum();
                (points > 0).then(|| TaskRecommendation {
                    task_id: task.id.clone(),
                    title: task.title.clone(),
                    difficulty: difficulty(task).to_string(),
                    reason: format!(
                        "matches {}",
                        matched
                            .iter()
                            .map(|(req, p)| format!("{} (+{p})", req.name))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ),
                    match_points: points,
                })
            })
            .collect();
        // Stable: equal points keep canonical task order
        recommended.sort_by(|a, b| b.match_points.cmp(&a.match_points));

        let mut seen: BTreeSet<String> = recommended.iter().map(|r| r.task_id.clone()).collect();
        for profile in profiles.values() {
            for hint in &profile.recommended_tasks {
                let Some(task) = pool.tasks.iter().find(|t| t.id == hint.task_id) else {
                    continue;
                };
                if seen.insert(task.id.clone()) {
                    recommended.push(TaskRecommendation {
                        task_id: task.id.clone(),
                        title: task.title.clone(),
                        difficulty: if hint.difficulty.is_empty() {
                            difficulty(task).to_string()
                        } else {
                            hint.difficulty.clone()
                        },
                        reason: hint.reason.clone(),
                        match_points: 0,
                    });
                }
            }
        }

        AnalysisReport {
            cv_available: true,
            extracted_skills: merged.into_values().collect(),
            recommended_tasks: recommended,
        }
    }
}

/// Union of extracted skills keyed by normalized name, keeping the highest
/// proficiency seen
fn merge_skills(profiles: &CvProfiles) -> BTreeMap<String, CvSkill> {
    let mut merged: BTreeMap<String, CvSkill> = BTreeMap::new();
    for skill in profiles.values().flat_map(|p| &p.extracted_skills) {
        merged
            .entry(normalize_skill(&skill.name))
            .and_modify(|existing| {
                existing.proficiency = existing.proficiency.max(skill.proficiency);
            })
            .or_insert_with(|| skill.clone());
    }
    merged
}
