//! Run outcome

use std::fmt;

use chrono::NaiveDate;

use super::{LogLevel, RunId};

/// Why a run stopped
///
/// Exactly one applies per run; the first condition reached wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of attempts was made
    Completed,
    /// The next commit date reached or passed the end date
    EndDateReached { date: NaiveDate },
    /// The user asked to stop
    Cancelled,
    /// The run could not proceed at all
    Fatal(String),
}

impl StopReason {
    /// Only fatal failures count as errors; cancellation is informational
    pub fn is_error(&self) -> bool {
        matches!(self, StopReason::Fatal(_))
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Completed => f.write_str("completed"),
            StopReason::EndDateReached { date } => write!(f, "end date {date} reached"),
            StopReason::Cancelled => f.write_str("cancelled by user"),
            StopReason::Fatal(message) => write!(f, "fatal: {message}"),
        }
    }
}

/// Final result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub run_id: RunId,
    /// Attempts that reached the commit stage
    pub attempts: usize,
    /// Attempts whose stage, commit and push all succeeded
    pub successes: usize,
    pub stop: StopReason,
}

impl RunReport {
    /// A report for a run that failed before making any attempt
    pub fn fatal(run_id: RunId, message: impl Into<String>) -> Self {
        Self {
            run_id,
            attempts: 0,
            successes: 0,
            stop: StopReason::Fatal(message.into()),
        }
    }

    /// Level the summary line is reported at
    ///
    /// Fatal runs are errors and runs with failed attempts are warnings.
    /// Stopping early on cancellation or the end date is informational.
    pub fn level(&self) -> LogLevel {
        match self.stop {
            StopReason::Fatal(_) => LogLevel::Error,
            _ if self.successes < self.attempts => LogLevel::Warning,
            StopReason::Cancelled | StopReason::EndDateReached { .. } => LogLevel::Info,
            StopReason::Completed => LogLevel::Success,
        }
    }

    /// One-line summary shown at the end of a run
    pub fn summary(&self) -> String {
        format!(
            "{}/{} commits pushed ({}) | Run ID: {}",
            self.successes, self.attempts, self.stop, self.run_id
        )
    }
}
