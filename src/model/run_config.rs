//! Validated run configuration

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use super::StepBounds;

/// Everything a run needs, already validated
///
/// Built by [`crate::config::RunInput::validate`]; the generator trusts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Working tree of the target repository
    pub repo_path: PathBuf,
    /// Remote pushed to after every commit
    pub remote: String,
    /// Optional profile URL for the reachability check
    pub profile_url: Option<String>,
    /// Time base for the cumulative offset
    pub start: NaiveDateTime,
    /// Exclusive stop boundary (calendar date)
    pub end_date: NaiveDate,
    /// Maximum number of attempts (always > 0)
    pub max_commits: usize,
    pub steps: StepBounds,
    /// Directory holding run logs
    pub log_dir: PathBuf,
}
