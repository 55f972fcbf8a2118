//! Manager that wraps forge implementations
use chrono::{DateTime, Utc};
use log::*;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        request::{CreateReleaseRequest, PrCommentRequest, PullRequest},
        traits::Forge,
    },
};

pub struct ForgeManager {
    forge: Box<dyn Forge>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(forge: Box<dyn Forge>) -> Self {
        let remote_config = forge.remote_config();
        Self {
            forge,
            remote_config,
        }
    }

    /// Walks closed pull requests page by page until an empty page and keeps
    /// those merged strictly after `since`, in the order the forge returns
    /// them.
    pub async fn get_merged_pull_requests(
        &self,
        since: &DateTime<Utc>,
    ) -> Result<Vec<PullRequest>> {
        info!(
            "fetching merged PRs for {} since {}",
            self.remote_config.path(),
            since.to_rfc3339()
        );

        let mut merged = vec![];
        let mut page = 1;

        loop {
            let pulls = self.forge.list_closed_pulls(page).await?;

            if pulls.is_empty() {
                break;
            }

            merged.extend(
                pulls.into_iter().filter(|pr| pr.merged_after(since)),
            );

            page += 1;
        }

        info!("found {} merged PRs", merged.len());

        Ok(merged)
    }

    /// Creates a published release for `tag` with `notes` as its body.
    pub async fn publish_release(&self, tag: &str, notes: &str) -> Result<()> {
        info!("creating release {tag} on {}", self.remote_config.path());

        self.forge
            .create_release(CreateReleaseRequest::published(tag, notes))
            .await?;

        info!("release created");

        Ok(())
    }

    pub async fn comment_on_pr(&self, pr_number: u64, body: &str) -> Result<()> {
        debug!("commenting on PR #{pr_number}");
        self.forge
            .create_pr_comment(PrCommentRequest {
                pr_number,
                body: body.to_string(),
            })
            .await
    }
}
