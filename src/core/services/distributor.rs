//! Distributor - wires the ports to the pure services
//!
//! distribute: pool → CV profiles (optional) → solver → atomic commit → report
//!
//! analyze: pool → CV profiles → advisory report, with no writes.
//!
//! Only building the pool, reading CV data and the final commit touch the
//! collaborators; the allocation loop in between does no I/O.

use crate::core::error::DistributionError;
use crate::core::models::{RunOutcome, RunResult, StatusFilter};
use crate::core::ports::{AssignmentCommitter, CvService, EmployeeRepository, TaskRepository};

use super::advisor::{AnalysisReport, CvMatchAdvisor, fetch_profiles};
use super::pool::{CandidatePool, PoolPolicy};
use super::reporter::{DistributionReport, render};
use super::scoring::{ScoringEngine, ScoringWeights};
use super::solver::{AssignmentSolver, CancelToken, CvProfiles};
use super::workload::WorkloadSnapshot;

/// Options for one distribute call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DistributeOptions {
    /// Which tasks to consider
    pub filter: StatusFilter,
    /// Add CV-bonus terms from the CV service
    pub use_cv_matching: bool,
    /// Compute and report, but do not commit
    pub dry_run: bool,
}

/// A completed distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    /// Raw run result
    pub result: RunResult,
    /// Presentation form of the result
    pub report: DistributionReport,
    /// Whether the assignments were persisted
    pub committed: bool,
    /// Whether CV data actually contributed to scoring
    pub cv_applied: bool,
}

/// What a distribute call produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributeOutcome {
    /// The run finished (and was committed unless it was a dry run)
    Completed(Distribution),
    /// The run was cancelled; nothing was persisted
    Cancelled,
}

/// Entry point for distribute and analyze
pub struct Distributor<'a> {
    tasks: &'a dyn TaskRepository,
    employees: &'a dyn EmployeeRepository,
    committer: &'a dyn AssignmentCommitter,
    cv: Option<&'a dyn CvService>,
    weights: ScoringWeights,
    policy: PoolPolicy,
}

impl std::fmt::Debug for Distributor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Distributor")
            .field("cv", &self.cv.is_some())
            .field("weights", &self.weights)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<'a> Distributor<'a> {
    /// Create a distributor over the persistence ports, without CV data
    #[must_use]
    pub fn new(
        tasks: &'a dyn TaskRepository,
        employees: &'a dyn EmployeeRepository,
        committer: &'a dyn AssignmentCommitter,
    ) -> Self {
        Self {
            tasks,
            employees,
            committer,
            cv: None,
            weights: ScoringWeights::default(),
            policy: PoolPolicy::default(),
        }
    }

    /// Attach a CV service
    #[must_use]
    pub fn with_cv(mut self, cv: &'a dyn CvService) -> Self {
        self.cv = Some(cv);
        self
    }

    /// Override scoring weights
    #[must_use]
    pub const fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Override the employee eligibility policy
    #[must_use]
    pub fn with_policy(mut self, policy: PoolPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run a distribution
    ///
    /// # Errors
    ///
    /// - [`DistributionError::PersistenceUnavailable`] if the pool cannot be
    ///   read; nothing is persisted.
    /// - [`DistributionError::PartialCommitFailure`] if the commit fails; the
    ///   computed result is discarded and the run must be retried.
    ///
    /// CV outages are not errors: the run continues on declared skills.
    pub fn distribute(
        &self,
        options: DistributeOptions,
        cancel: &CancelToken,
    ) -> Result<DistributeOutcome, DistributionError> {
        let pool = CandidatePool::build(options.filter, &self.policy, self.tasks, self.employees)?;

        if pool.has_no_tasks() {
            log::info!("No eligible tasks for filter '{}'", options.filter);
            return Ok(DistributeOutcome::Completed(Distribution {
                result: RunResult::empty(),
                report: DistributionReport::default(),
                committed: false,
                cv_applied: false,
            }));
        }

        let profiles = if options.use_cv_matching {
            self.load_profiles(&pool)
        } else {
            None
        };
        let cv_applied = profiles.as_ref().is_some_and(|p| !p.is_empty());

        // One snapshot per run, dropped on every exit path below
        let mut snapshot = WorkloadSnapshot::from_employees(&pool.employees);
        let solver = AssignmentSolver::new(ScoringEngine::new(self.weights));
        let result = match solver.run(
            &pool.tasks,
            &pool.employees,
            &mut snapshot,
            profiles.as_ref(),
            cancel,
        ) {
            RunOutcome::Completed(result) => result,
            RunOutcome::Cancelled => return Ok(DistributeOutcome::Cancelled),
        };

        let committed = if options.dry_run || result.assignments.is_empty() {
            false
        } else {
            self.committer.commit_assignments(&result.assignments).map_err(|e| {
                log::error!("Commit failed, discarding run: {e}");
                match e {
                    DistributionError::PartialCommitFailure(_) => e,
                    other => DistributionError::PartialCommitFailure(other.to_string()),
                }
            })?;
            true
        };

        log::info!(
            "Distributed {}/{} task(s){}{}",
            result.assigned_count,
            result.total_tasks,
            if cv_applied { " with CV matching" } else { "" },
            if options.dry_run { " (dry run)" } else { "" }
        );

        let report = render(&result, &pool.tasks, &pool.employees);
        Ok(DistributeOutcome::Completed(Distribution {
            result,
            report,
            committed,
            cv_applied,
        }))
    }

    /// Advisory CV preview; never writes
    ///
    /// With `employee_id`, only that employee's CV is considered.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::PersistenceUnavailable`] if the pool
    /// cannot be read. A missing or unreachable CV service yields
    /// [`AnalysisReport::no_cv_data`] instead of an error.
    pub fn analyze(
        &self,
        filter: StatusFilter,
        employee_id: Option<&str>,
    ) -> Result<AnalysisReport, DistributionError> {
        let mut pool = CandidatePool::build(filter, &self.policy, self.tasks, self.employees)?;
        if let Some(id) = employee_id {
            pool.employees.retain(|e| e.id == id);
        }

        let Some(profiles) = self.load_profiles(&pool) else {
            return Ok(AnalysisReport::no_cv_data());
        };
        Ok(CvMatchAdvisor::new(self.weights.skill_max).analyze(&pool, &profiles))
    }

    fn load_profiles(&self, pool: &CandidatePool) -> Option<CvProfiles> {
        let Some(service) = self.cv else {
            log::warn!("CV matching requested but no CV service is configured");
            return None;
        };
        match fetch_profiles(service, &pool.employees) {
            Ok(profiles) => {
                log::debug!("Loaded {} CV profile(s)", profiles.len());
                Some(profiles)
            },
            Err(e) => {
                log::warn!("Continuing without CV data: {e}");
                None
            },
        }
    }
}
