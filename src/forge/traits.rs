//! Traits related to remote git forges
use async_trait::async_trait;

use crate::{
    error::Result,
    forge::{
        config::RemoteConfig,
        request::{CreateReleaseRequest, PrCommentRequest, PullRequest},
    },
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Forge {
    fn remote_config(&self) -> RemoteConfig;
    /// One page of closed pull requests, most recently updated first.
    /// An empty page means there are no more results.
    async fn list_closed_pulls(&self, page: u32) -> Result<Vec<PullRequest>>;
    async fn create_release(&self, req: CreateReleaseRequest) -> Result<()>;
    async fn create_pr_comment(&self, req: PrCommentRequest) -> Result<()>;
}
