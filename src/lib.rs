//! CI helpers for GitHub repositories: release notes drafted from merged
//! pull requests, and Cypress test suggestions generated from UI diffs.
pub mod cli;
pub mod command;
pub mod config;
pub mod diff;
pub mod error;
pub mod forge;
pub mod llm;
pub mod logging;
pub mod notes;

pub use error::{CiError, Result};

#[cfg(test)]
mod test_server;
