//! Tests for CLI output structures

use taskdist::core::models::{CvSkill, Proficiency, RunResult};
use taskdist::core::services::{
    AnalysisReport, AssignmentLine, Distribution, DistributionReport, TaskRecommendation,
    UnassignedLine,
};
use taskdist::output::{AnalyzeResult, DistributeResult, OperationResult};

fn distribution() -> Distribution {
    Distribution {
        result: RunResult::empty(),
        report: DistributionReport {
            assigned_count: 1,
            unassigned_count: 1,
            total_tasks: 2,
            assignments: vec![AssignmentLine {
                task_title: "Build dashboard".into(),
                employee_name: "Ada".into(),
                reason: "specialization+50".into(),
                score: 50,
            }],
            unassigned: vec![UnassignedLine {
                task_title: "Migrate DB".into(),
                reason: "all candidates at maximum concurrent task limit".into(),
            }],
        },
        committed: false,
        cv_applied: false,
    }
}

#[test]
fn test_distribute_result_json_fields() {
    let result = DistributeResult::new(distribution(), true);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["assignedCount"], 1);
    assert_eq!(json["unassignedCount"], 1);
    assert_eq!(json["dryRun"], true);
    assert_eq!(json["committed"], false);
    assert_eq!(json["assignments"][0]["reason"], "specialization+50");
    assert_eq!(json["unassigned"][0]["taskTitle"], "Migrate DB");
}

#[test]
fn test_unassigned_omitted_when_empty() {
    let mut d = distribution();
    d.report.unassigned.clear();
    let json = serde_json::to_value(DistributeResult::new(d, false)).unwrap();
    assert!(json.get("unassigned").is_none());
}

#[test]
fn test_analyze_result_is_transparent() {
    let result = AnalyzeResult {
        report: AnalysisReport {
            cv_available: true,
            extracted_skills: vec![CvSkill::new("go", Proficiency::Expert)],
            recommended_tasks: vec![TaskRecommendation {
                task_id: "T1".into(),
                title: "CLI rewrite".into(),
                difficulty: "medium".into(),
                reason: "matches go (+10)".into(),
                match_points: 10,
            }],
        },
    };
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["cvAvailable"], true);
    assert_eq!(json["extractedSkills"][0]["proficiency"], "expert");
    assert_eq!(json["recommendedTasks"][0]["difficulty"], "medium");
}

#[test]
fn test_no_cv_data_json() {
    let json = serde_json::to_value(AnalyzeResult {
        report: AnalysisReport::no_cv_data(),
    })
    .unwrap();
    assert_eq!(json["cvAvailable"], false);
    assert_eq!(json["recommendedTasks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_operation_result_json() {
    let op = OperationResult {
        success: true,
        message: "done".into(),
    };
    let json = serde_json::to_value(&op).unwrap();
    assert_eq!(json["success"], true);
}
