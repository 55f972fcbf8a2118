//! Error types shared by the release notes and UI test pipelines.

use thiserror::Error;

/// Main error type for ci-scribe operations.
#[derive(Error, Debug)]
pub enum CiError {
    // Configuration errors
    #[error("Missing {0} in environment")]
    MissingEnv(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Forge errors
    #[error("Forge operation failed: {0}")]
    ForgeError(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("API authentication failed: {0}")]
    AuthenticationError(String),

    #[error("API rate limit exceeded")]
    RateLimitExceeded,

    #[error("Language model request failed: {0}")]
    LanguageModel(String),

    #[error("Git command failed: {0}")]
    GitError(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using CiError
pub type Result<T> = std::result::Result<T, CiError>;

impl CiError {
    /// Create a forge error with context
    pub fn forge(msg: impl Into<String>) -> Self {
        Self::ForgeError(msg.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a missing environment variable error
    pub fn missing_env(name: impl Into<String>) -> Self {
        Self::MissingEnv(name.into())
    }

    /// Create a language model error
    pub fn language_model(msg: impl Into<String>) -> Self {
        Self::LanguageModel(msg.into())
    }

    /// Create a git error
    pub fn git(msg: impl Into<String>) -> Self {
        Self::GitError(msg.into())
    }
}

// Wraps in Other variant for generic I/O errors
impl From<std::io::Error> for CiError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}

impl From<reqwest::Error> for CiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status().map(|s| s.as_u16()) {
            Some(401) | Some(403) => Self::AuthenticationError(err.to_string()),
            Some(429) => Self::RateLimitExceeded,
            _ => Self::NetworkError(err.to_string()),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for CiError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::AuthenticationError(format!("Invalid header value: {}", err))
    }
}

impl From<octocrab::Error> for CiError {
    fn from(err: octocrab::Error) -> Self {
        match &err {
            octocrab::Error::GitHub { source, .. }
                if source.status_code.as_u16() == 401 =>
            {
                Self::AuthenticationError(format!("GitHub API error: {}", err))
            }
            octocrab::Error::GitHub { source, .. }
                if source.message.contains("rate limit") =>
            {
                Self::RateLimitExceeded
            }
            _ => Self::ForgeError(format!("GitHub API error: {}", err)),
        }
    }
}
