//! CV service port
//!
//! Narrow view of the CV-parsing collaborator: a skills list per employee.

use crate::core::error::DistributionError;
use crate::core::models::CvProfile;

/// Per-employee CV profile lookup
///
/// The service is optional and eventually consistent. `Ok(None)` means no
/// CV data exists for the employee; `Err` means the service is unreachable.
#[cfg_attr(test, mockall::automock)]
pub trait CvService: Send + Sync {
    /// Fetch the parsed CV profile for an employee
    fn profile(&self, employee_id: &str) -> Result<Option<CvProfile>, DistributionError>;
}
