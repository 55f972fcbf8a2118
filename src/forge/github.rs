//! Implements the Forge trait for Github
use async_trait::async_trait;
use log::*;
use octocrab::{Octocrab, params};

use crate::{
    error::Result,
    forge::{
        config::{DEFAULT_PAGE_SIZE, RemoteConfig},
        request::{CreateReleaseRequest, PrCommentRequest, PullRequest},
        traits::Forge,
    },
};

/// GitHub forge implementation using Octocrab for API interactions with
/// pull requests, releases, and issue comments.
pub struct Github {
    config: RemoteConfig,
    instance: Octocrab,
}

impl Github {
    /// Create GitHub client with personal access token authentication and API
    /// base URL configuration.
    pub fn new(config: RemoteConfig) -> Result<Self> {
        let builder = Octocrab::builder()
            .personal_token(config.token.clone())
            .base_uri(config.api_url.clone())?;
        let instance = builder.build()?;

        Ok(Self { config, instance })
    }
}

#[async_trait]
impl Forge for Github {
    fn remote_config(&self) -> RemoteConfig {
        self.config.clone()
    }

    async fn list_closed_pulls(&self, page: u32) -> Result<Vec<PullRequest>> {
        debug!("requesting closed pulls page {page}");

        let result = self
            .instance
            .pulls(&self.config.owner, &self.config.repo)
            .list()
            .state(params::State::Closed)
            .sort(params::pulls::Sort::Updated)
            .direction(params::Direction::Descending)
            .per_page(DEFAULT_PAGE_SIZE)
            .page(page)
            .send()
            .await?;

        let pulls = result
            .items
            .into_iter()
            .map(|pr| PullRequest {
                number: pr.number,
                title: pr.title.unwrap_or_default(),
                html_url: pr
                    .html_url
                    .map(|url| url.to_string())
                    .unwrap_or_default(),
                merged_at: pr.merged_at,
            })
            .collect();

        Ok(pulls)
    }

    async fn create_release(&self, req: CreateReleaseRequest) -> Result<()> {
        self.instance
            .repos(&self.config.owner, &self.config.repo)
            .releases()
            .create(&req.tag_name)
            .name(&req.name)
            .body(&req.body)
            .draft(req.draft)
            .prerelease(req.prerelease)
            .send()
            .await?;

        Ok(())
    }

    async fn create_pr_comment(&self, req: PrCommentRequest) -> Result<()> {
        let comment = self
            .instance
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(req.pr_number, &req.body)
            .await?;

        debug!("created comment: {}", comment.html_url);

        Ok(())
    }
}
