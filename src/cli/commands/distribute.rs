//! Distribute open tasks

use taskdist::core::models::StatusFilter;
use taskdist::core::services::{CancelToken, DistributeOptions, DistributeOutcome};
use taskdist::output::{DistributeResult, OutputMode};

use crate::cli::Workspace;

/// Run one distribution over the workspace stores
pub fn distribute(
    workspace: &Workspace,
    status: &str,
    use_cv_matching: bool,
    dry_run: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let options = DistributeOptions {
        filter: StatusFilter::parse(status)?,
        use_cv_matching,
        dry_run,
    };

    match workspace.distributor().distribute(options, &CancelToken::new())? {
        DistributeOutcome::Completed(distribution) => {
            DistributeResult::new(distribution, dry_run).render(mode);
            Ok(())
        },
        DistributeOutcome::Cancelled => anyhow::bail!("Distribution cancelled; nothing was saved"),
    }
}
