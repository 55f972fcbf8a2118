//! End-to-end pipelines behind each binary.
//!
//! Each pipeline receives its collaborators (forge, diff source, language
//! model) already constructed, runs strictly in sequence, and reports which
//! path it took so callers and tests can tell a clean short-circuit from a
//! completed run.

/// Fetch, render, and publish (or print) release notes.
pub mod release_notes;
