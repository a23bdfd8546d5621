//! git command execution layer
//!
//! The version-control collaborator a run drives: stage everything, commit
//! with explicit dates, push.

pub mod constants;
mod executor;

pub use executor::GitExecutor;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing git commands
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("git command failed (exit code {exit_code}): {stderr}")]
    CommandFailed { stderr: String, exit_code: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("git is not installed or not in PATH")]
    GitNotFound,
}

/// Operations a run needs from a version-control client
///
/// Dates are passed per call and apply to that commit only.
pub trait VersionControl {
    /// Short description of the target (repository and branch) for the run banner
    fn describe(&self) -> Result<String, GitError>;

    /// Stage all working-tree changes
    fn stage_all(&self) -> Result<(), GitError>;

    /// Create a commit with explicit author and committer dates (ISO-8601)
    fn commit(&self, message: &str, author_date: &str, committer_date: &str)
    -> Result<(), GitError>;

    /// Push the current branch to `remote`
    fn push(&self, remote: &str) -> Result<(), GitError>;
}
