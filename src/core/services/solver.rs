//! Assignment solver - greedy one-pass allocation
//!
//! Tasks are visited in canonical order (priority descending, then creation
//! time, then ID). Each task goes to the best-scoring employee with spare
//! capacity; the workload snapshot is bumped before the next task is scored.
//! Ties break on lower current load, then lower employee ID. There is no
//! randomness and no I/O in the loop.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use crate::core::models::{Assignment, CvProfile, Employee, RunOutcome, RunResult, Task};

use super::scoring::{MatchScore, ScoringEngine, has_capacity};
use super::workload::WorkloadSnapshot;

/// Reason recorded when every candidate is at its concurrency cap
pub const REASON_AT_CAPACITY: &str = "all candidates at maximum concurrent task limit";

/// Reason recorded when there are no candidates or none scores above zero
pub const REASON_NO_MATCH: &str =
    "no eligible employee (all at capacity or no specialization/skill overlap)";

/// Cooperative cancellation flag, checked between tasks
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a token that is not cancelled
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::SeqCst);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::SeqCst)
    }
}

/// CV profiles keyed by employee ID
pub type CvProfiles = BTreeMap<String, CvProfile>;

/// Greedy allocator over a candidate pool
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentSolver {
    engine: ScoringEngine,
}

struct Candidate<'a> {
    employee: &'a Employee,
    load: u32,
    score: MatchScore,
}

impl AssignmentSolver {
    /// Create a solver around a scoring engine
    #[must_use]
    pub const fn new(engine: ScoringEngine) -> Self {
        Self { engine }
    }

    /// Run the allocation
    ///
    /// `cv_profiles` is `Some` only when CV matching is on for this run.
    /// On cancellation the snapshot may already hold increments for tasks
    /// visited so far and must be discarded by the caller.
    pub fn run(
        &self,
        tasks: &[Task],
        employees: &[Employee],
        snapshot: &mut WorkloadSnapshot,
        cv_profiles: Option<&CvProfiles>,
        cancel: &CancelToken,
    ) -> RunOutcome {
        let mut assignments = Vec::new();
        let mut unassigned = BTreeMap::new();

        for task in canonical_order(tasks) {
            if cancel.is_cancelled() {
                log::info!("Distribution cancelled after {} assignment(s)", assignments.len());
                return RunOutcome::Cancelled;
            }

            match self.pick(task, employees, snapshot, cv_profiles) {
                Ok(best) => {
                    log::debug!(
                        "{} -> {} (score {}: {})",
                        task.id,
                        best.employee.id,
                        best.score.points,
                        best.score.reason()
                    );
                    snapshot.increment(&best.employee.id);
                    assignments.push(Assignment {
                        task_id: task.id.clone(),
                        employee_id: best.employee.id.clone(),
                        score: best.score.points,
                        reason: best.score.reason(),
                    });
                },
                Err(reason) => {
                    log::debug!("{} unassigned: {reason}", task.id);
                    unassigned.insert(task.id.clone(), reason.to_string());
                },
            }
        }

        RunOutcome::Completed(RunResult::new(assignments, unassigned))
    }

    fn pick<'a>(
        &self,
        task: &Task,
        employees: &'a [Employee],
        snapshot: &WorkloadSnapshot,
        cv_profiles: Option<&CvProfiles>,
    ) -> Result<Candidate<'a>, &'static str> {
        if employees.is_empty() {
            return Err(REASON_NO_MATCH);
        }

        let best = employees
            .iter()
            .filter_map(|employee| {
                let load = snapshot.get(&employee.id);
                has_capacity(employee, load).then(|| {
                    let cv = cv_profiles.and_then(|p| p.get(&employee.id));
                    Candidate {
                        employee,
                        load,
                        score: self.engine.score(task, employee, load, cv),
                    }
                })
            })
            .min_by(rank_candidates)
            .ok_or(REASON_AT_CAPACITY)?;

        if best.score.points <= 0 {
            return Err(REASON_NO_MATCH);
        }
        Ok(best)
    }
}

/// Best first: higher score, then lower load, then lower employee ID
fn rank_candidates(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.score
        .points
        .cmp(&a.score.points)
        .then_with(|| a.load.cmp(&b.load))
        .then_with(|| a.employee.id.cmp(&b.employee.id))
}

/// Visit order: priority descending, then creation time, then ID
#[must_use]
pub fn canonical_order(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.created_at.cmp(&b.created_at))
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
}
