use async_trait::async_trait;
use log::*;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::{
    diff::DiffSource,
    error::{CiError, Result},
};

/// Runs `git diff` in a working tree. Ranges use three-dot notation so the
/// diff is taken against the merge base of `base` and `head`.
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    pub fn new(repo_path: impl AsRef<Path>) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    async fn run(&self, args: &[String]) -> Result<String> {
        debug!("running: git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CiError::git(format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

fn range(base: &str, head: &str) -> String {
    format!("{base}...{head}")
}

#[async_trait]
impl DiffSource for GitCli {
    async fn changed_files(
        &self,
        base: String,
        head: String,
    ) -> Result<Vec<String>> {
        let stdout = self
            .run(&["diff".into(), "--name-only".into(), range(&base, &head)])
            .await?;

        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.to_string())
            .collect())
    }

    async fn diff_for_files(
        &self,
        base: String,
        head: String,
        files: Vec<String>,
    ) -> Result<String> {
        let mut args = vec!["diff".into(), range(&base, &head), "--".into()];
        args.extend(files);
        self.run(&args).await
    }
}
