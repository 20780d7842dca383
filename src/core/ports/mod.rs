//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (task/employee storage, the CV parser).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. In-memory fakes stand in for them in tests.

mod assignment_committer;
mod cv_service;
mod employee_repo;
mod task_repo;

pub use assignment_committer::AssignmentCommitter;
pub use cv_service::CvService;
#[cfg(test)]
pub use cv_service::MockCvService;
pub use employee_repo::EmployeeRepository;
pub use task_repo::TaskRepository;
