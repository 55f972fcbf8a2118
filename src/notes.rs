//! Markdown rendering and naming for release notes.
use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    error::{CiError, Result},
    forge::request::PullRequest,
};

/// First line of every rendered release body.
pub const NOTES_HEADER: &str = "## 📝 Release Notes";

/// Format used for generated release tags (UTC).
pub const TAG_FORMAT: &str = "%Y%m%d-%H%M";

/// Renders one bullet per pull request under a fixed header, in input order.
/// Titles are inserted as-is, so markdown in a title is not escaped.
pub fn render_notes(prs: &[PullRequest]) -> String {
    let mut lines = vec![NOTES_HEADER.to_string(), "".to_string()];

    for pr in prs {
        lines.push(format!("- {} ([#{}]({}))", pr.title, pr.number, pr.html_url));
    }

    lines.join("\n")
}

/// Release tag such as `20240102-0930`.
pub fn release_tag(now: &DateTime<Utc>) -> String {
    now.format(TAG_FORMAT).to_string()
}

/// Start of the lookback window of `days` days ending at `now`.
pub fn cutoff(now: &DateTime<Utc>, days: u32) -> Result<DateTime<Utc>> {
    TimeDelta::try_days(days.into())
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            CiError::invalid_config(format!(
                "lookback of {days} days is out of range"
            ))
        })
}
