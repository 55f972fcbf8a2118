//! CLI argument parsing for the release notes generator.
use clap::Parser;

/// Draft release notes from recently merged pull requests and publish them
/// as a GitHub release.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct ReleaseNotesArgs {
    #[arg(long)]
    /// Repository in owner/name form.
    pub repo: String,

    #[arg(long, default_value = "main")]
    /// Target branch. Accepted for compatibility, not used.
    pub branch: String,

    #[arg(long, default_value_t = 1)]
    /// Include pull requests merged within this many days.
    pub days: u32,

    #[arg(long, default_value_t = false)]
    /// Print the notes instead of publishing a release.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}
