//! git command executor
//!
//! Handles running git commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::constants::{self, commands, env, errors, flags, special};
use super::{GitError, VersionControl};

/// Executor for git commands against one repository
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository working tree
    repo_path: PathBuf,
}

impl GitExecutor {
    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self { repo_path: path }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Run a git command with the given arguments
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        self.run_with_env(args, &[])
    }

    /// Run a git command with extra environment variables for the child only
    ///
    /// Credential prompts are always disabled so a run never blocks on input.
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> Result<String, GitError> {
        let mut cmd = Command::new(constants::GIT_COMMAND);
        cmd.arg(flags::REPO_PATH).arg(&self.repo_path);
        cmd.args(args);
        cmd.env(env::TERMINAL_PROMPT, "0");
        cmd.envs(vars.iter().copied());

        tracing::debug!(?args, repo = %self.repo_path.display(), "running git");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);

            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Check that the path is inside a git work tree
    pub fn is_repository(&self) -> bool {
        self.run(&[commands::REV_PARSE, flags::IS_INSIDE_WORK_TREE])
            .is_ok_and(|out| out.trim() == "true")
    }

    /// Name of the checked-out branch (`HEAD` when detached)
    pub fn current_branch(&self) -> Result<String, GitError> {
        let out = self.run(&[commands::REV_PARSE, flags::ABBREV_REF, special::HEAD])?;
        Ok(out.trim().to_string())
    }
}

impl VersionControl for GitExecutor {
    fn describe(&self) -> Result<String, GitError> {
        if !self.is_repository() {
            return Err(GitError::NotARepository);
        }
        let branch = self.current_branch()?;
        Ok(format!("{} (branch {branch})", self.repo_path.display()))
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.run(&[commands::ADD, flags::ALL]).map(|_| ())
    }

    /// Commits even when nothing is staged
    fn commit(
        &self,
        message: &str,
        author_date: &str,
        committer_date: &str,
    ) -> Result<(), GitError> {
        self.run_with_env(
            &[commands::COMMIT, flags::ALLOW_EMPTY, flags::MESSAGE, message],
            &[
                (env::AUTHOR_DATE, author_date),
                (env::COMMITTER_DATE, committer_date),
            ],
        )
        .map(|_| ())
    }

    fn push(&self, remote: &str) -> Result<(), GitError> {
        self.run(&[commands::PUSH, remote, special::HEAD]).map(|_| ())
    }
}
