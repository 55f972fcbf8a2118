//! Configuration for forge connections.
use secrecy::SecretString;

use crate::error::{CiError, Result};

/// Default API base URL for GitHub.com.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Page size for paginated pull request queries.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with the forge.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// REST API base URL (e.g., "https://api.github.com").
    pub api_url: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: "".to_string(),
            repo: "".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}

impl RemoteConfig {
    /// Build config from an `owner/name` repository identifier.
    pub fn new(
        repository: &str,
        token: SecretString,
        api_url: Option<String>,
    ) -> Result<Self> {
        let (owner, repo) = repository.split_once('/').ok_or_else(|| {
            CiError::invalid_config(format!(
                "repository must be in owner/name form: {repository}"
            ))
        })?;

        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(CiError::invalid_config(format!(
                "repository must be in owner/name form: {repository}"
            )));
        }

        let api_url = api_url
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
        })
    }

    /// Full `owner/name` path of the repository.
    pub fn path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}
