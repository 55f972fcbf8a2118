//! Collects the UI-related part of a pull request diff.
//!
//! Version control is reached through the [`DiffSource`] trait so the
//! collector can run against the git CLI or a mock.
use async_trait::async_trait;
use log::*;

use crate::error::Result;

/// Git command line implementation of [`DiffSource`].
pub mod git;

/// File suffixes considered UI-related. Matching is case-sensitive.
pub const UI_EXTENSIONS: [&str; 4] = [".tsx", ".jsx", ".html", ".css"];

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiffSource {
    /// Paths changed between `base` and `head`, one entry per line of output.
    async fn changed_files(
        &self,
        base: String,
        head: String,
    ) -> Result<Vec<String>>;
    /// Unified diff between `base` and `head` restricted to `files`.
    async fn diff_for_files(
        &self,
        base: String,
        head: String,
        files: Vec<String>,
    ) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffBundle {
    pub changed_files: Vec<String>,
    pub diff: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CollectedDiff {
    /// None of the changed files has a UI extension.
    NoRelevantFiles,
    /// UI files changed but the scoped diff came back empty.
    EmptyDiff,
    Bundle(DiffBundle),
}

/// Keeps paths ending in one of [`UI_EXTENSIONS`]. Matching is
/// case-sensitive, and blank entries never match.
pub fn filter_ui_files(files: Vec<String>) -> Vec<String> {
    files
        .into_iter()
        .filter(|file| UI_EXTENSIONS.iter().any(|ext| file.ends_with(ext)))
        .collect()
}

/// Lists changed files, filters them to UI files, and only then asks for the
/// diff scoped to exactly those files.
pub async fn collect(
    source: &dyn DiffSource,
    base: &str,
    head: &str,
) -> Result<CollectedDiff> {
    let changed = source.changed_files(base.into(), head.into()).await?;
    debug!("changed files: {:?}", changed);

    let files = filter_ui_files(changed);

    if files.is_empty() {
        return Ok(CollectedDiff::NoRelevantFiles);
    }

    info!("found UI-related files: {:?}", files);

    let diff = source
        .diff_for_files(base.into(), head.into(), files.clone())
        .await?;

    if diff.trim().is_empty() {
        return Ok(CollectedDiff::EmptyDiff);
    }

    Ok(CollectedDiff::Bundle(DiffBundle {
        changed_files: files,
        diff,
    }))
}
