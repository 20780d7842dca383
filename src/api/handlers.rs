//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::core::models::StatusFilter;
use crate::core::services::{CancelToken, DistributeOptions, DistributeOutcome, Distributor};

use super::error::ApiError;
use super::types::{AnalyzeData, AutoDistributeData, AutoDistributeRequest, DistributeData, HealthData};

// =============================================================================
// AUTO-DISTRIBUTE
// =============================================================================

/// Handle `POST /tasks/auto-distribute`
///
/// Dispatches on `action`: `"analyze"` returns the CV preview, anything
/// absent or `"distribute"` runs a distribution.
pub fn auto_distribute(
    distributor: &Distributor<'_>,
    request: &AutoDistributeRequest,
    cancel: &CancelToken,
) -> Result<AutoDistributeData, ApiError> {
    match request.action.as_deref().map(str::trim) {
        None | Some("" | "distribute") => {
            distribute(distributor, request, cancel).map(AutoDistributeData::Distributed)
        },
        Some("analyze") => analyze(distributor, request).map(AutoDistributeData::Analyzed),
        Some(other) => Err(ApiError::bad_request(format!(
            "Unknown action '{other}' (use \"analyze\" or omit it)"
        ))),
    }
}

/// Run a distribution
pub fn distribute(
    distributor: &Distributor<'_>,
    request: &AutoDistributeRequest,
    cancel: &CancelToken,
) -> Result<DistributeData, ApiError> {
    let options = DistributeOptions {
        filter: StatusFilter::parse(&request.status)?,
        use_cv_matching: request.use_cv_matching,
        dry_run: request.dry_run,
    };

    match distributor.distribute(options, cancel)? {
        DistributeOutcome::Completed(distribution) => Ok(DistributeData {
            report: distribution.report,
            committed: distribution.committed,
            cv_applied: distribution.cv_applied,
        }),
        DistributeOutcome::Cancelled => Err(ApiError::cancelled()),
    }
}

/// Advisory CV preview; never writes
pub fn analyze(
    distributor: &Distributor<'_>,
    request: &AutoDistributeRequest,
) -> Result<AnalyzeData, ApiError> {
    let filter = StatusFilter::parse(&request.status)?;
    let report = distributor.analyze(filter, request.employee_id.as_deref())?;
    Ok(report.into())
}

// =============================================================================
// HEALTH
// =============================================================================

/// Liveness probe
#[must_use]
pub const fn health() -> HealthData {
    HealthData {
        status: "ok",
        version: crate::VERSION,
    }
}
