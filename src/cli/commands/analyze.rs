//! Preview CV-based task recommendations

use taskdist::core::models::StatusFilter;
use taskdist::output::{AnalyzeResult, OutputMode};

use crate::cli::Workspace;

/// Show which open tasks fit the skills found in parsed CVs
pub fn analyze(
    workspace: &Workspace,
    status: &str,
    employee: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let filter = StatusFilter::parse(status)?;
    let report = workspace.distributor().analyze(filter, employee)?;
    AnalyzeResult { report }.render(mode);
    Ok(())
}
