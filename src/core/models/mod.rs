//! Domain models for taskdist
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - A unit of work waiting for an owner
//! - [`Employee`] - A candidate that may receive tasks
//! - [`CvProfile`] - Skills extracted from an employee's CV
//! - [`Assignment`] / [`RunResult`] - What a run produced
//! - [`StatusFilter`] - Which tasks a run considers

mod assignment;
mod cv;
mod employee;
mod filter;
mod proficiency;
mod task;

pub use assignment::{Assignment, RunOutcome, RunResult};
pub use cv::{CvProfile, CvSkill, RecommendedTask};
pub use employee::{Employee, Role, Skill, normalize_skill};
pub use filter::StatusFilter;
pub use proficiency::Proficiency;
pub use task::{Priority, RequiredSkill, Task, TaskStatus};
