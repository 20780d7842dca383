//! Tests for the file-backed stores

use std::fs;

use taskdist::adapters::toml::{WorkforceFile, load_file, write_atomic};
use taskdist::adapters::{JsonCvDirectory, TomlWorkforceStore};
use taskdist::core::DistributionError;
use taskdist::core::models::{Assignment, Proficiency, StatusFilter, TaskStatus};
use taskdist::core::ports::{AssignmentCommitter, CvService, EmployeeRepository, TaskRepository};
use taskdist::core::services::{CancelToken, DistributeOptions, DistributeOutcome, Distributor};
use tempfile::TempDir;

use crate::common::fixtures::{EmployeeBuilder, TaskBuilder, frontend_backend};

const WORKFORCE: &str = r#"
[[task]]
id = "T1"
title = "Build login form"
specialization = "frontend"
priority = "high"
created_at = "2026-01-06T09:00:00Z"
required_skills = [{ name = "react", min_proficiency = "advanced" }]

[[task]]
id = "T2"
title = "Old report"
specialization = "data"
status = "completed"
created_at = "2026-01-02T09:00:00Z"

[[employee]]
id = "E1"
name = "Ada"
specialization = "frontend"
skills = [{ name = "react", proficiency = "expert" }]

[[employee]]
id = "E2"
name = "Bo"
specialization = "frontend"
active = false
"#;

fn store_with(content: &str) -> (TempDir, TomlWorkforceStore) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("workforce.toml");
    fs::write(&path, content).unwrap();
    (temp, TomlWorkforceStore::new(path))
}

fn assignment(task: &str, employee: &str) -> Assignment {
    Assignment {
        task_id: task.into(),
        employee_id: employee.into(),
        score: 50,
        reason: "specialization+50".into(),
    }
}

// =============================================================================
// TOML WORKFORCE STORE
// =============================================================================

#[test]
fn test_reads_filtered_tasks_and_active_employees() {
    let (_temp, store) = store_with(WORKFORCE);

    let tasks = store.list_tasks(StatusFilter::AllUnassigned).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].required_skills[0].min_proficiency, Proficiency::Advanced);

    let employees = store.list_active_employees().unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].max_concurrent_tasks, 3);

    assert_eq!(store.get_task("T2").unwrap().unwrap().status, TaskStatus::Completed);
    assert!(store.get_task("T9").unwrap().is_none());
}

#[test]
fn test_missing_file_is_persistence_unavailable() {
    let temp = TempDir::new().unwrap();
    let store = TomlWorkforceStore::new(temp.path().join("absent.toml"));
    let err = store.list_tasks(StatusFilter::Pending).unwrap_err();
    assert!(matches!(err, DistributionError::PersistenceUnavailable(_)));
}

#[test]
fn test_malformed_file_is_persistence_unavailable() {
    let (_temp, store) = store_with("[[task]]\nid = ");
    assert!(matches!(
        store.list_active_employees().unwrap_err(),
        DistributionError::PersistenceUnavailable(_)
    ));
}

const EXTRA_T1: &str = r#"
[[task]]
id = "T1"
title = "Copy of login form"
specialization = "frontend"
created_at = "2026-01-07T09:00:00Z"
"#;

const EXTRA_E2: &str = r#"
[[employee]]
id = "E2"
name = "Cy"
specialization = "data"
"#;

#[test]
fn test_duplicate_task_id_is_persistence_unavailable() {
    let (_temp, store) = store_with(&format!("{WORKFORCE}{EXTRA_T1}"));
    let err = store.list_tasks(StatusFilter::Pending).unwrap_err();
    assert!(matches!(&err, DistributionError::PersistenceUnavailable(msg) if msg.contains("duplicate task id \"T1\"")));
}

#[test]
fn test_duplicate_employee_id_is_persistence_unavailable() {
    let (_temp, store) = store_with(&format!("{WORKFORCE}{EXTRA_E2}"));
    let err = store.list_active_employees().unwrap_err();
    assert!(matches!(&err, DistributionError::PersistenceUnavailable(msg) if msg.contains("duplicate employee id \"E2\"")));
}

#[test]
fn test_commit_persists_assignee_status_and_workload() {
    let (_temp, store) = store_with(WORKFORCE);

    store.commit_assignments(&[assignment("T1", "E1")]).unwrap();

    let file = load_file(store.path()).unwrap();
    let t1 = file.tasks.iter().find(|t| t.id == "T1").unwrap();
    assert_eq!(t1.assignee.as_deref(), Some("E1"));
    assert_eq!(t1.status, TaskStatus::InProgress);
    assert_eq!(file.employees[0].current_active_tasks, 1);
    // Untouched records survive the rewrite
    assert_eq!(file.tasks.len(), 2);
    assert!(!file.employees[1].active);
}

#[test]
fn test_rejected_commit_leaves_file_untouched() {
    let (_temp, store) = store_with(WORKFORCE);
    let before = fs::read_to_string(store.path()).unwrap();

    let err = store
        .commit_assignments(&[assignment("T1", "E1"), assignment("T9", "E1")])
        .unwrap_err();

    assert!(matches!(err, DistributionError::PartialCommitFailure(_)));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_distribute_against_toml_store() {
    let (_temp, store) = store_with(WORKFORCE);
    let distributor = Distributor::new(&store, &store, &store);

    let outcome = distributor.distribute(DistributeOptions::default(), &CancelToken::new()).unwrap();
    let DistributeOutcome::Completed(d) = outcome else {
        panic!("run was not cancelled");
    };
    assert_eq!(d.result.assignment_for("T1").unwrap().score, 60);

    // Committed work is no longer a candidate
    assert!(store.list_tasks(StatusFilter::AllUnassigned).unwrap().is_empty());
}

#[test]
fn test_write_atomic_round_trips_and_leaves_no_temp_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("workforce.toml");
    let (tasks, employees) = frontend_backend();
    let file = WorkforceFile { tasks, employees };

    write_atomic(&path, &file).unwrap();

    assert_eq!(load_file(&path).unwrap(), file);
    let leftovers: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn test_written_file_uses_array_tables() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("workforce.toml");
    let file = WorkforceFile {
        tasks: vec![TaskBuilder::new("T1").build()],
        employees: vec![EmployeeBuilder::new("E1").build()],
    };
    write_atomic(&path, &file).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[[task]]"));
    assert!(content.contains("[[employee]]"));
}

// =============================================================================
// JSON CV DIRECTORY
// =============================================================================

#[test]
fn test_cv_profile_lookup() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("E1.json"),
        r#"{"extractedSkills":[{"name":"python","proficiency":"advanced"}],
           "recommendedTasks":[{"taskId":"T1","difficulty":"hard","reason":"ML background"}]}"#,
    )
    .unwrap();
    fs::write(temp.path().join("E2.json"), "not json").unwrap();
    let cv = JsonCvDirectory::new(temp.path());

    let profile = cv.profile("E1").unwrap().unwrap();
    assert_eq!(profile.extracted_skills[0].proficiency, Proficiency::Advanced);
    assert_eq!(profile.recommended_tasks[0].task_id, "T1");

    assert!(cv.profile("E2").unwrap().is_none());
    assert!(cv.profile("E3").unwrap().is_none());
}

#[test]
fn test_missing_cv_directory_is_unavailable() {
    let temp = TempDir::new().unwrap();
    let cv = JsonCvDirectory::new(temp.path().join("cv"));
    assert!(matches!(
        cv.profile("E1").unwrap_err(),
        DistributionError::CvServiceUnavailable(_)
    ));
}
