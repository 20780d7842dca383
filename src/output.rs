//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::services::{AnalysisReport, Distribution, DistributionReport};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a distribute command
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributeResult {
    /// Counts and per-task lines
    #[serde(flatten)]
    pub report: DistributionReport,
    /// Whether assignments were saved
    pub committed: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Whether CV data contributed to scoring
    pub cv_applied: bool,
}

impl DistributeResult {
    /// Build from a finished distribution
    #[must_use]
    pub fn new(distribution: Distribution, dry_run: bool) -> Self {
        Self {
            report: distribution.report,
            committed: distribution.committed,
            dry_run,
            cv_applied: distribution.cv_applied,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let report = &self.report;
        if report.total_tasks == 0 {
            println!("No tasks to distribute.");
            return;
        }

        println!(
            "Distributed {} of {} task(s){}\n",
            report.assigned_count.to_string().bold(),
            report.total_tasks,
            if self.cv_applied { " using CV data" } else { "" }
        );

        if !report.assignments.is_empty() {
            println!("Assigned:");
            for line in &report.assignments {
                println!(
                    "  {} {} {}",
                    line.task_title.bold(),
                    "->".dimmed(),
                    line.employee_name.green()
                );
                println!("          {} ({})", line.reason, line.score);
            }
        }

        if !report.unassigned.is_empty() {
            println!("\nUnassigned:");
            for line in &report.unassigned {
                println!("  {}", line.task_title.yellow());
                println!("          {}", line.reason);
            }
        }

        if self.dry_run {
            println!("\n{}", "Dry run: nothing was saved.".cyan());
        } else if self.committed {
            println!("\n{} assignment(s) saved.", report.assigned_count);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of an analyze command
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct AnalyzeResult {
    /// The advisory report
    pub report: AnalysisReport,
}

impl AnalyzeResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        let report = &self.report;
        if !report.cv_available {
            println!("No CV data available.");
            return;
        }

        println!("Skills from CVs:");
        for skill in &report.extracted_skills {
            println!("  {} ({})", skill.name.bold(), skill.proficiency);
        }

        if report.recommended_tasks.is_empty() {
            println!("\nNo open tasks match these skills.");
            return;
        }

        println!("\nRecommended tasks:");
        for rec in &report.recommended_tasks {
            println!("  [{}] {}", rec.difficulty.to_uppercase().cyan(), rec.title.bold());
            println!("          {}", rec.reason);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
