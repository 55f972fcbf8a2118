//! Environment driven configuration for both pipelines.
//!
//! Everything is read once at startup into plain structs that are handed to
//! the clients, so a missing secret fails the run before any request is made.
use regex::Regex;
use secrecy::SecretString;
use std::{env, sync::LazyLock};

use crate::{
    error::{CiError, Result},
    forge::config::RemoteConfig,
};

pub const GITHUB_TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL_ENV_VAR: &str = "GITHUB_API_URL";
pub const GITHUB_REPOSITORY_ENV_VAR: &str = "GITHUB_REPOSITORY";
pub const GITHUB_REF_ENV_VAR: &str = "GITHUB_REF";
pub const GITHUB_BASE_REF_ENV_VAR: &str = "GITHUB_BASE_REF";
pub const GITHUB_HEAD_REF_ENV_VAR: &str = "GITHUB_HEAD_REF";
pub const OPENAI_API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL_ENV_VAR: &str = "OPENAI_BASE_URL";
pub const OPENAI_MODEL_ENV_VAR: &str = "OPENAI_MODEL";

/// Default chat completion API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat completion model.
pub const DEFAULT_MODEL: &str = "gpt-4";

static PULL_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^refs/pull/(?<number>\d+)/").unwrap()
});

/// Value of a required variable. Unset and empty are both treated as missing.
fn require_env(name: &str) -> Result<String> {
    optional_env(name).ok_or_else(|| CiError::missing_env(name))
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Forge connection for `repository` using `GITHUB_TOKEN` and the optional
/// `GITHUB_API_URL` override.
pub fn github_remote(repository: &str) -> Result<RemoteConfig> {
    let token = require_env(GITHUB_TOKEN_ENV_VAR)?;
    remote_with_token(repository, token)
}

fn remote_with_token(repository: &str, token: String) -> Result<RemoteConfig> {
    RemoteConfig::new(
        repository,
        SecretString::from(token),
        optional_env(GITHUB_API_URL_ENV_VAR),
    )
}

/// Chat completion endpoint settings.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Bearer token.
    pub api_key: SecretString,
}

impl LlmConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = require_env(OPENAI_API_KEY_ENV_VAR)?;

        let base_url = optional_env(OPENAI_BASE_URL_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string());

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: optional_env(OPENAI_MODEL_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: SecretString::from(api_key),
        })
    }
}

/// Inputs of the UI test suggester, as provided by the CI environment.
#[derive(Debug, Clone)]
pub struct UiTestConfig {
    pub remote: RemoteConfig,
    pub llm: LlmConfig,
    pub pr_number: u64,
    pub base_ref: String,
    pub head_ref: String,
}

impl UiTestConfig {
    pub fn from_env() -> Result<Self> {
        // secrets first so a misconfigured job fails on the token
        let token = require_env(GITHUB_TOKEN_ENV_VAR)?;
        let llm = LlmConfig::from_env()?;

        let repository = require_env(GITHUB_REPOSITORY_ENV_VAR)?;
        let remote = remote_with_token(&repository, token)?;
        let pr_number = parse_pr_number(&require_env(GITHUB_REF_ENV_VAR)?)?;

        Ok(Self {
            remote,
            llm,
            pr_number,
            base_ref: require_env(GITHUB_BASE_REF_ENV_VAR)?,
            head_ref: require_env(GITHUB_HEAD_REF_ENV_VAR)?,
        })
    }
}

/// Pull request number from a git ref. `refs/pull/<n>/merge` yields `<n>`,
/// any other ref is parsed from its trailing path segment.
pub fn parse_pr_number(git_ref: &str) -> Result<u64> {
    let segment = match PULL_REF_REGEX.captures(git_ref) {
        Some(captures) => captures["number"].to_string(),
        None => git_ref.rsplit('/').next().unwrap_or_default().to_string(),
    };

    segment.parse::<u64>().map_err(|_| {
        CiError::invalid_config(format!(
            "unable to parse pull request number from ref: {git_ref}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;
    use crate::forge::config::DEFAULT_API_URL;

    const UI_TEST_VARS: [(&str, Option<&str>); 9] = [
        (GITHUB_TOKEN_ENV_VAR, Some("gh-token")),
        (GITHUB_API_URL_ENV_VAR, None),
        (GITHUB_REPOSITORY_ENV_VAR, Some("octo/widgets")),
        (GITHUB_REF_ENV_VAR, Some("refs/pull/42/merge")),
        (GITHUB_BASE_REF_ENV_VAR, Some("main")),
        (GITHUB_HEAD_REF_ENV_VAR, Some("feature/button")),
        (OPENAI_API_KEY_ENV_VAR, Some("sk-test")),
        (OPENAI_BASE_URL_ENV_VAR, None),
        (OPENAI_MODEL_ENV_VAR, None),
    ];

    fn with_override(
        name: &'static str,
        value: Option<&'static str>,
    ) -> Vec<(&'static str, Option<&'static str>)> {
        UI_TEST_VARS
            .iter()
            .map(|(k, v)| if *k == name { (*k, value) } else { (*k, *v) })
            .collect()
    }

    #[test]
    fn parses_pr_number_from_pull_merge_ref() {
        assert_eq!(parse_pr_number("refs/pull/42/merge").unwrap(), 42);
    }

    #[test]
    fn parses_pr_number_from_trailing_segment() {
        assert_eq!(parse_pr_number("refs/heads/17").unwrap(), 17);
        assert_eq!(parse_pr_number("5").unwrap(), 5);
    }

    #[test]
    fn rejects_non_numeric_ref() {
        let result = parse_pr_number("refs/heads/main");
        assert!(matches!(result, Err(CiError::InvalidConfig(_))));
    }

    #[test]
    fn github_remote_requires_token() {
        temp_env::with_vars(
            [
                (GITHUB_TOKEN_ENV_VAR, None::<&str>),
                (GITHUB_API_URL_ENV_VAR, None),
            ],
            || {
                let result = github_remote("octo/widgets");
                assert!(
                    matches!(result, Err(CiError::MissingEnv(ref name)) if name == GITHUB_TOKEN_ENV_VAR)
                );
            },
        );
    }

    #[test]
    fn github_remote_treats_empty_token_as_missing() {
        temp_env::with_var(GITHUB_TOKEN_ENV_VAR, Some(""), || {
            let result = github_remote("octo/widgets");
            assert!(matches!(result, Err(CiError::MissingEnv(_))));
        });
    }

    #[test]
    fn github_remote_reads_token_and_api_url() {
        temp_env::with_vars(
            [
                (GITHUB_TOKEN_ENV_VAR, Some("gh-token")),
                (GITHUB_API_URL_ENV_VAR, Some("https://ghe.example.com/api/v3")),
            ],
            || {
                let remote = github_remote("octo/widgets").unwrap();
                assert_eq!(remote.token.expose_secret(), "gh-token");
                assert_eq!(remote.api_url, "https://ghe.example.com/api/v3");
            },
        );
    }

    #[test]
    fn llm_config_defaults() {
        temp_env::with_vars(
            [
                (OPENAI_API_KEY_ENV_VAR, Some("sk-test")),
                (OPENAI_BASE_URL_ENV_VAR, None),
                (OPENAI_MODEL_ENV_VAR, None),
            ],
            || {
                let config = LlmConfig::from_env().unwrap();
                assert_eq!(config.base_url, DEFAULT_OPENAI_BASE_URL);
                assert_eq!(config.model, DEFAULT_MODEL);
                assert_eq!(config.api_key.expose_secret(), "sk-test");
            },
        );
    }

    #[test]
    fn ui_test_config_reads_ci_environment() {
        temp_env::with_vars(UI_TEST_VARS, || {
            let config = UiTestConfig::from_env().unwrap();
            assert_eq!(config.remote.path(), "octo/widgets");
            assert_eq!(config.remote.token.expose_secret(), "gh-token");
            assert_eq!(config.remote.api_url, DEFAULT_API_URL);
            assert_eq!(config.pr_number, 42);
            assert_eq!(config.base_ref, "main");
            assert_eq!(config.head_ref, "feature/button");
            assert_eq!(config.llm.model, DEFAULT_MODEL);
        });
    }

    #[test]
    fn ui_test_config_fails_on_missing_github_token_first() {
        temp_env::with_vars(
            with_override(GITHUB_TOKEN_ENV_VAR, None),
            || {
                let result = UiTestConfig::from_env();
                assert!(
                    matches!(result, Err(CiError::MissingEnv(ref name)) if name == GITHUB_TOKEN_ENV_VAR)
                );
            },
        );
    }

    #[test]
    fn ui_test_config_fails_on_missing_openai_key() {
        temp_env::with_vars(
            with_override(OPENAI_API_KEY_ENV_VAR, None),
            || {
                let result = UiTestConfig::from_env();
                assert!(
                    matches!(result, Err(CiError::MissingEnv(ref name)) if name == OPENAI_API_KEY_ENV_VAR)
                );
            },
        );
    }
}
