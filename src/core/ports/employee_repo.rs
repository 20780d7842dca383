//! Employee repository port

use crate::core::error::DistributionError;
use crate::core::models::Employee;

/// Read access to persisted employees
pub trait EmployeeRepository: Send + Sync {
    /// List active employees with their current workload and skills
    fn list_active_employees(&self) -> Result<Vec<Employee>, DistributionError>;
}
