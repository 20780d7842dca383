//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. Apart from
//! [`distributor`], which talks to the port traits, these services have
//! no I/O dependencies - they operate on data passed in and return results.
//!
//! - [`scoring`] - Weighted (task, employee) match score
//! - [`workload`] - Per-run active-task counts
//! - [`pool`] - Candidate tasks and employees for a run
//! - [`solver`] - Greedy one-pass allocation
//! - [`advisor`] - CV enrichment and the read-only analyze mode
//! - [`reporter`] - Presentation form of a run result
//! - [`distributor`] - End-to-end distribute and analyze

pub mod advisor;
pub mod distributor;
pub mod pool;
pub mod reporter;
pub mod scoring;
pub mod solver;
pub mod workload;

pub use advisor::{AnalysisReport, CvMatchAdvisor, TaskRecommendation, fetch_profiles};
pub use distributor::{DistributeOptions, DistributeOutcome, Distribution, Distributor};
pub use pool::{CandidatePool, PoolPolicy};
pub use reporter::{AssignmentLine, DistributionReport, UnassignedLine, render};
pub use scoring::{
    MatchScore, ScoreComponent, ScoringEngine, ScoringWeights, has_capacity, match_skills,
    skill_points,
};
pub use solver::{
    AssignmentSolver, CancelToken, CvProfiles, REASON_AT_CAPACITY, REASON_NO_MATCH,
    canonical_order,
};
pub use workload::WorkloadSnapshot;
