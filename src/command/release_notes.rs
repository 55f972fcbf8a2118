//! Release notes command implementation.
use chrono::{DateTime, Utc};
use log::*;
use std::io::Write;

use crate::{
    cli::ReleaseNotesArgs, error::Result, forge::manager::ForgeManager, notes,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseNotesOutcome {
    /// Nothing was merged inside the lookback window.
    NoPullRequests,
    /// Notes were written to the output instead of being published.
    DryRun { notes: String },
    Published { tag: String },
}

/// Execute release notes generation for merges within `args.days` of `now`.
/// Dry runs write the notes to `out` and never create a release.
pub async fn execute(
    args: &ReleaseNotesArgs,
    forge_manager: &ForgeManager,
    now: DateTime<Utc>,
    out: &mut dyn Write,
) -> Result<ReleaseNotesOutcome> {
    debug!("branch argument is not used: {}", args.branch);

    let since = notes::cutoff(&now, args.days)?;
    let prs = forge_manager.get_merged_pull_requests(&since).await?;

    if prs.is_empty() {
        info!("no PRs merged in the given timeframe");
        return Ok(ReleaseNotesOutcome::NoPullRequests);
    }

    let body = notes::render_notes(&prs);

    if args.dry_run {
        writeln!(out, "🧪 Dry run output:\n")?;
        writeln!(out, "{body}")?;
        return Ok(ReleaseNotesOutcome::DryRun { notes: body });
    }

    let tag = notes::release_tag(&now);
    forge_manager.publish_release(&tag, &body).await?;

    Ok(ReleaseNotesOutcome::Published { tag })
}
