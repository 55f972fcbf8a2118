use chrono::Utc;
use clap::Parser;
use color_eyre::eyre::Result;
use std::io;

use ci_scribe::{
    cli::ReleaseNotesArgs,
    command::release_notes,
    config,
    forge::{github::Github, manager::ForgeManager},
    logging::initialize_logger,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = ReleaseNotesArgs::parse();

    initialize_logger(args.debug)?;

    let remote = config::github_remote(&args.repo)?;
    let forge = ForgeManager::new(Box::new(Github::new(remote)?));

    release_notes::execute(&args, &forge, Utc::now(), &mut io::stdout())
        .await?;

    Ok(())
}
