//! Interface to the GitHub REST API used by both pipelines.
//!
//! Provides token-based authentication, pull request listing, release
//! creation, and pull request comments through a common trait so that the
//! pipelines can be exercised against a mock.

/// Connection configuration for the forge.
pub mod config;

/// GitHub API client implementation for GitHub.com and Enterprise.
pub mod github;

/// Wrapper adding pagination and filtering on top of a forge.
pub mod manager;

/// Request and response types exchanged with the forge.
pub mod request;

/// Common trait for forge platform abstraction.
pub mod traits;
