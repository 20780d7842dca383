//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client. Field
//! names on the wire are camelCase.

use serde::{Deserialize, Serialize};

use super::error::ApiErrorData;
use crate::core::models::CvSkill;
use crate::core::services::{AnalysisReport, DistributionReport};

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(error: ApiErrorData) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Body of `POST /tasks/auto-distribute`
///
/// `{status, useCVMatching}` distributes; `{action: "analyze", status}`
/// returns the advisory CV preview.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoDistributeRequest {
    /// `"analyze"` for the preview, absent (or `"distribute"`) otherwise
    #[serde(default)]
    pub action: Option<String>,
    /// Status filter: `"pending"`, `"in-progress"` or `""`
    #[serde(default)]
    pub status: String,
    /// Add CV-bonus terms to scoring
    #[serde(default, rename = "useCVMatching", alias = "useCvMatching")]
    pub use_cv_matching: bool,
    /// Compute without saving
    #[serde(default)]
    pub dry_run: bool,
    /// Restrict analyze to one employee's CV
    #[serde(default)]
    pub employee_id: Option<String>,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Distribute response data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeData {
    /// Counts and per-assignment lines
    #[serde(flatten)]
    pub report: DistributionReport,
    /// Whether assignments were saved
    pub committed: bool,
    /// Whether CV data contributed to scoring
    pub cv_applied: bool,
}

/// Analyze response data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeData {
    /// `false` when no CV data could be found
    pub cv_available: bool,
    /// Merged CV skills
    pub extracted_skills: Vec<CvSkill>,
    /// Tasks that fit the CV skills
    pub recommended_tasks: Vec<RecommendedTaskItem>,
}

/// One recommended task
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTaskItem {
    /// Task ID
    pub task_id: String,
    /// Task title
    pub title: String,
    /// Difficulty label
    pub difficulty: String,
    /// Why it fits
    pub reason: String,
}

impl From<AnalysisReport> for AnalyzeData {
    fn from(report: AnalysisReport) -> Self {
        Self {
            cv_available: report.cv_available,
            extracted_skills: report.extracted_skills,
            recommended_tasks: report
                .recommended_tasks
                .into_iter()
                .map(|r| RecommendedTaskItem {
                    task_id: r.task_id,
                    title: r.title,
                    difficulty: r.difficulty,
                    reason: r.reason,
                })
                .collect(),
        }
    }
}

/// Either shape returned by the auto-distribute endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AutoDistributeData {
    /// Distribution summary
    Distributed(DistributeData),
    /// CV preview
    Analyzed(AnalyzeData),
}

/// Health endpoint response data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthData {
    /// Always "ok"
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
}
