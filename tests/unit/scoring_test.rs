//! Parameterized scoring tests using test-case

use taskdist::core::models::{Priority, Proficiency, StatusFilter, TaskStatus};
use taskdist::core::services::{ScoringEngine, ScoringWeights, skill_points};
use test_case::test_case;

use crate::common::fixtures::{EmployeeBuilder, TaskBuilder, cv};

// =============================================================================
// Skill points
// =============================================================================

#[test_case(Proficiency::Expert, Proficiency::Advanced, 10 ; "above requirement is capped")]
#[test_case(Proficiency::Advanced, Proficiency::Advanced, 10 ; "exact match earns max")]
#[test_case(Proficiency::Intermediate, Proficiency::Advanced, 6 ; "two of three")]
#[test_case(Proficiency::Beginner, Proficiency::Expert, 2 ; "one of four")]
#[test_case(Proficiency::Beginner, Proficiency::Intermediate, 5 ; "half")]
fn test_skill_points(have: Proficiency, need: Proficiency, expected: i64) {
    assert_eq!(skill_points(have, need, 10), expected);
}

// =============================================================================
// Full score
// =============================================================================

#[test_case("frontend", "frontend", 50 ; "same specialization")]
#[test_case("Frontend", "frontend ", 50 ; "case and whitespace insensitive")]
#[test_case("frontend", "backend", 0 ; "different specialization")]
#[test_case("", "", 0 ; "empty specialization never matches")]
fn test_specialization_term(task_spec: &str, employee_spec: &str, expected: i64) {
    let task = TaskBuilder::new("T1").specialization(task_spec).build();
    let employee = EmployeeBuilder::new("E1").specialization(employee_spec).build();
    let score = ScoringEngine::default().score(&task, &employee, 0, None);
    assert_eq!(score.points, expected);
}

#[test_case(0, 50 ; "idle")]
#[test_case(1, 38 ; "one active task")]
#[test_case(2, 26 ; "two active tasks")]
#[test_case(5, -10 ; "penalty can push below zero")]
fn test_workload_penalty(load: u32, expected: i64) {
    let task = TaskBuilder::new("T1").specialization("ops").build();
    let employee = EmployeeBuilder::new("E1").specialization("ops").workload(0, 10).build();
    let score = ScoringEngine::default().score(&task, &employee, load, None);
    assert_eq!(score.points, expected);
}

#[test]
fn test_reason_lists_components_in_order() {
    let task = TaskBuilder::new("T1")
        .specialization("frontend")
        .requires("react", Proficiency::Advanced)
        .requires("python", Proficiency::Beginner)
        .build();
    let employee = EmployeeBuilder::new("E1")
        .specialization("frontend")
        .skill("React", Proficiency::Intermediate)
        .build();
    let profile = cv(&[("python", Proficiency::Advanced)]);

    let score = ScoringEngine::default().score(&task, &employee, 2, Some(&profile));

    assert_eq!(score.points, 50 + 6 + 5 - 24);
    assert_eq!(score.reason(), "specialization+50, skill:react+6, cv:python+5, workload-24");
}

#[test]
fn test_no_components_reason() {
    let task = TaskBuilder::new("T1").specialization("data").build();
    let employee = EmployeeBuilder::new("E1").specialization("design").build();
    let score = ScoringEngine::default().score(&task, &employee, 0, None);
    assert_eq!(score.points, 0);
    assert_eq!(score.reason(), "no matching criteria");
}

#[test]
fn test_cv_bonus_only_with_profile() {
    // Employee declares nothing; the CV shows python
    let task = TaskBuilder::new("T1").requires("python", Proficiency::Intermediate).build();
    let employee = EmployeeBuilder::new("E1").build();
    let profile = cv(&[("python", Proficiency::Advanced)]);
    let engine = ScoringEngine::default();

    assert_eq!(engine.score(&task, &employee, 0, Some(&profile)).points, 5);
    assert_eq!(engine.score(&task, &employee, 0, None).points, 0);
}

#[test]
fn test_declared_skill_shadows_cv_bonus() {
    let task = TaskBuilder::new("T1").requires("python", Proficiency::Intermediate).build();
    let employee = EmployeeBuilder::new("E1").skill("python", Proficiency::Intermediate).build();
    let profile = cv(&[("python", Proficiency::Expert)]);

    let score = ScoringEngine::default().score(&task, &employee, 0, Some(&profile));
    assert_eq!(score.points, 10);
}

#[test]
fn test_custom_weights() {
    let weights = ScoringWeights {
        specialization: 100,
        skill_max: 20,
        workload_penalty: 1,
        cv_bonus: 0,
    };
    let task = TaskBuilder::new("T1")
        .specialization("ops")
        .requires("k8s", Proficiency::Advanced)
        .build();
    let employee = EmployeeBuilder::new("E1")
        .specialization("ops")
        .skill("k8s", Proficiency::Advanced)
        .build();

    let score = ScoringEngine::new(weights).score(&task, &employee, 3, None);
    assert_eq!(score.points, 100 + 20 - 3);
}

// =============================================================================
// Status filter
// =============================================================================

#[test_case("", TaskStatus::Pending, true ; "all unassigned takes pending")]
#[test_case("", TaskStatus::InProgress, true ; "all unassigned takes in progress")]
#[test_case("", TaskStatus::Completed, false ; "all unassigned skips completed")]
#[test_case("pending", TaskStatus::InProgress, false ; "pending skips in progress")]
#[test_case("in-progress", TaskStatus::InProgress, true ; "in progress dash")]
#[test_case("in_progress", TaskStatus::InProgress, true ; "in progress underscore")]
fn test_filter_matches(filter: &str, status: TaskStatus, expected: bool) {
    let filter = StatusFilter::parse(filter).unwrap();
    let task = TaskBuilder::new("T1").status(status).priority(Priority::Low).build();
    assert_eq!(filter.matches(&task), expected);
}

#[test]
fn test_filter_never_matches_assigned() {
    let task = TaskBuilder::new("T1").assignee("E9").build();
    assert!(!StatusFilter::AllUnassigned.matches(&task));
    assert!(!StatusFilter::Pending.matches(&task));
}

#[test_case("completed" ; "completed is rejected")]
#[test_case("done" ; "unknown value is rejected")]
fn test_filter_rejects(value: &str) {
    assert!(StatusFilter::parse(value).is_err());
}
