use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
/// Pull request as returned by the forge listing.
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// True when the pull request was merged strictly after `cutoff`.
    pub fn merged_after(&self, cutoff: &DateTime<Utc>) -> bool {
        self.merged_at.is_some_and(|merged_at| merged_at > *cutoff)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Request to create a new release.
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

impl CreateReleaseRequest {
    /// Published, non-prerelease release named after its tag.
    pub fn published(tag_name: &str, body: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            name: format!("Release {tag_name}"),
            body: body.to_string(),
            draft: false,
            prerelease: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Request to comment on a pull request.
pub struct PrCommentRequest {
    pub pr_number: u64,
    pub body: String,
}
