//! Commit sequence generator
//!
//! A bounded loop that advances a cumulative minute offset by a random step,
//! and for each resulting timestamp logs the attempt, then stages, commits
//! and pushes through a [`VersionControl`] collaborator.
//!
//! Stop conditions, first reached wins:
//! - `max_commits` attempts made
//! - the next commit date reaches or passes the end date
//! - the cancel token is set
//! - the log directory cannot be created (fatal)

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{Duration, NaiveDateTime};
use rand::Rng;
use thiserror::Error;

use crate::git::{GitError, VersionControl};
use crate::model::{
    CommitAttempt, LogLevel, RunConfig, RunId, RunReport, StopReason, random_hex,
};
use crate::reporter::Reporter;
use crate::run_log::RunLog;

/// Shared flag asking a run to stop before its next attempt
///
/// Set from the thread driving the UI, read by the run's thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The stage of an attempt that failed
#[derive(Error, Debug)]
#[error("{stage} failed: {source}")]
pub struct AttemptError {
    pub stage: &'static str,
    #[source]
    pub source: GitError,
}

impl AttemptError {
    fn at(stage: &'static str) -> impl FnOnce(GitError) -> Self {
        move |source| Self { stage, source }
    }
}

/// State of one run
#[derive(Debug)]
pub struct Run {
    id: RunId,
    config: RunConfig,
    cumulative_minutes: u64,
    next_index: usize,
}

impl Run {
    /// Start a run with a fresh identifier and a zero offset
    pub fn initialize<R: Rng + ?Sized>(config: RunConfig, rng: &mut R) -> Self {
        Self {
            id: RunId::generate(rng),
            config,
            cumulative_minutes: 0,
            next_index: 1,
        }
    }

    pub fn id(&self) -> &RunId {
        &self.id
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn cumulative_minutes(&self) -> u64 {
        self.cumulative_minutes
    }

    /// The run's log file, named from the run id and start date
    pub fn log(&self) -> RunLog {
        RunLog::new(&self.config.log_dir, &self.id, self.config.start.date())
    }

    /// Draw the next step and build the attempt it leads to
    ///
    /// The offset always advances. Returns None when the computed commit
    /// date is on or after the end date; that attempt must not be executed.
    pub fn next_attempt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CommitAttempt> {
        let step_minutes = self.config.steps.sample(rng);
        self.cumulative_minutes = self
            .cumulative_minutes
            .saturating_add(u64::from(step_minutes));

        let commit_time = self.commit_time()?;
        if commit_time.date() >= self.config.end_date {
            return None;
        }

        let attempt = CommitAttempt {
            index: self.next_index,
            step_minutes,
            cumulative_minutes: self.cumulative_minutes,
            commit_time,
            message: CommitAttempt::message_for(&random_hex(rng)),
        };
        self.next_index += 1;
        Some(attempt)
    }

    /// Start plus the cumulative offset; None on overflow
    fn commit_time(&self) -> Option<NaiveDateTime> {
        let minutes = i64::try_from(self.cumulative_minutes).ok()?;
        let offset = Duration::try_minutes(minutes)?;
        self.config.start.checked_add_signed(offset)
    }

    /// Run the loop to completion
    ///
    /// Never fails: every outcome, including a fatal one, ends up in the
    /// returned report and in a final summary line.
    pub fn execute<R, V, P>(
        mut self,
        rng: &mut R,
        vcs: &V,
        reporter: &mut P,
        cancel: &CancelToken,
    ) -> RunReport
    where
        R: Rng + ?Sized,
        V: VersionControl + ?Sized,
        P: Reporter + ?Sized,
    {
        let total = self.config.max_commits;
        let log = self.log();

        reporter.log(
            LogLevel::Info,
            &format!(
                "Starting commit sequence at {} | Run ID: {}",
                self.config.start.format("%Y-%m-%d %H:%M:%S"),
                self.id
            ),
        );

        if let Err(e) = log.ensure_dir() {
            let message = format!(
                "cannot create log directory {}: {e}",
                self.config.log_dir.display()
            );
            tracing::error!(run_id = %self.id, "{message}");
            let report = RunReport::fatal(self.id.clone(), message);
            reporter.log(report.level(), &report.summary());
            return report;
        }

        match vcs.describe() {
            Ok(target) => reporter.log(LogLevel::Info, &format!("Repository: {target}")),
            Err(e) => reporter.log(LogLevel::Warning, &format!("Repository check failed: {e}")),
        }

        let mut attempts = 0;
        let mut successes = 0;

        let stop = loop {
            if attempts == total {
                break StopReason::Completed;
            }
            if cancel.is_cancelled() {
                reporter.log(
                    LogLevel::Warning,
                    &format!("Interrupted before run {}. Stopping.", attempts + 1),
                );
                break StopReason::Cancelled;
            }
            let Some(attempt) = self.next_attempt(rng) else {
                reporter.log(
                    LogLevel::Info,
                    &format!(
                        "Next commit date reaches end date {}. Stopping.",
                        self.config.end_date
                    ),
                );
                break StopReason::EndDateReached {
                    date: self.config.end_date,
                };
            };

            attempts += 1;
            reporter.log(LogLevel::Info, &attempt.progress_line(total));

            if let Err(e) = log.append(&attempt.log_line(&self.id)) {
                tracing::warn!(path = %log.path().display(), error = %e, "run log write failed");
                reporter.log(
                    LogLevel::Warning,
                    &format!("Failed to write run log {}: {e}", log.path().display()),
                );
            }

            match self.commit_and_push(&attempt, vcs, reporter) {
                Ok(()) => successes += 1,
                Err(e) => {
                    tracing::warn!(run_id = %self.id, index = attempt.index, error = %e, "attempt failed");
                    reporter.log(
                        LogLevel::Warning,
                        &format!("Error in run {}: {e}", attempt.index),
                    );
                }
            }

            reporter.progress(attempts, total);
        };

        let report = RunReport {
            run_id: self.id,
            attempts,
            successes,
            stop,
        };
        tracing::info!(summary = %report.summary(), "run finished");
        reporter.log(report.level(), &report.summary());
        report
    }

    fn commit_and_push<V, P>(
        &self,
        attempt: &CommitAttempt,
        vcs: &V,
        reporter: &mut P,
    ) -> Result<(), AttemptError>
    where
        V: VersionControl + ?Sized,
        P: Reporter + ?Sized,
    {
        let date = attempt.iso_timestamp();

        vcs.stage_all().map_err(AttemptError::at("git add"))?;
        reporter.log(LogLevel::Info, "git add --all");

        vcs.commit(&attempt.message, &date, &date)
            .map_err(AttemptError::at("git commit"))?;
        reporter.log(LogLevel::Info, &format!("git commit -m {}", attempt.message));

        vcs.push(&self.config.remote)
            .map_err(AttemptError::at("git push"))?;
        reporter.log(
            LogLevel::Success,
            &format!("git push {} HEAD", self.config.remote),
        );

        Ok(())
    }
}
