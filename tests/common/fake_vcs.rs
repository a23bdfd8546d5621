//! FakeVcs: an in-memory version-control collaborator.
//!
//! Records every commit and push; any stage can be made to fail.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use backfill::generator::CancelToken;
use backfill::git::{GitError, VersionControl};

/// A commit the fake was asked to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCommit {
    pub message: String,
    pub author_date: String,
    pub committer_date: String,
}

/// Cloneable fake; clones share their recordings.
#[derive(Debug, Clone, Default)]
pub struct FakeVcs {
    pub fail_stage: bool,
    pub fail_commit: bool,
    pub fail_push: bool,
    /// Panic inside `commit` (simulates an unexpected fault)
    pub panic_on_commit: bool,
    /// Sleep before each commit, to keep a background run busy
    pub commit_delay: Option<Duration>,
    /// Cancel the token once this many commits were recorded
    pub cancel_after: Option<(usize, CancelToken)>,
    pub(crate) commits: Arc<Mutex<Vec<FakeCommit>>>,
    pub(crate) stages: Arc<AtomicUsize>,
    pub(crate) pushes: Arc<AtomicUsize>,
}

impl FakeVcs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_push() -> Self {
        Self {
            fail_push: true,
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            commit_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn commits(&self) -> Vec<FakeCommit> {
        self.commits.lock().unwrap().clone()
    }

    pub fn stage_count(&self) -> usize {
        self.stages.load(Ordering::SeqCst)
    }

    /// Pushes that were attempted (including failing ones).
    pub fn push_count(&self) -> usize {
        self.pushes.load(Ordering::SeqCst)
    }
}

fn failure(what: &str) -> GitError {
    GitError::CommandFailed {
        stderr: format!("fatal: simulated {what} failure"),
        exit_code: 128,
    }
}

impl VersionControl for FakeVcs {
    fn describe(&self) -> Result<String, GitError> {
        Ok("fake repository (branch main)".to_string())
    }

    fn stage_all(&self) -> Result<(), GitError> {
        self.stages.fetch_add(1, Ordering::SeqCst);
        if self.fail_stage {
            return Err(failure("add"));
        }
        Ok(())
    }

    fn commit(
        &self,
        message: &str,
        author_date: &str,
        committer_date: &str,
    ) -> Result<(), GitError> {
        if let Some(delay) = self.commit_delay {
            thread::sleep(delay);
        }
        if self.panic_on_commit {
            panic!("simulated fault in commit");
        }
        if self.fail_commit {
            return Err(failure("commit"));
        }

        let count = {
            let mut commits = self.commits.lock().unwrap();
            commits.push(FakeCommit {
                message: message.to_string(),
                author_date: author_date.to_string(),
                committer_date: committer_date.to_string(),
            });
            commits.len()
        };

        if let Some((limit, token)) = &self.cancel_after
            && count >= *limit
        {
            token.cancel();
        }
        Ok(())
    }

    fn push(&self, _remote: &str) -> Result<(), GitError> {
        self.pushes.fetch_add(1, Ordering::SeqCst);
        if self.fail_push {
            return Err(failure("push"));
        }
        Ok(())
    }
}
