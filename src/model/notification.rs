//! Notification model
//!
//! Used for displaying temporary feedback in the form title (last run result,
//! settings problems).

use std::time::Instant;

use super::{RunReport, StopReason};

/// How long a notification stays visible
const NOTIFICATION_TTL_SECS: u64 = 8;

/// Kind of notification (determines color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Success - every attempt pushed (green)
    Success,
    /// Info - informational message (cyan)
    Info,
    /// Warning - partial or failed run (yellow)
    Warning,
}

/// A notification to display to the user
#[derive(Debug, Clone)]
pub struct Notification {
    /// The message to display
    pub message: String,
    /// Kind of notification
    pub kind: NotificationKind,
    /// When the notification was created
    pub created_at: Instant,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Warning)
    }

    /// Summarize a finished run
    ///
    /// Cancellation and boundary stops are informational; fatal runs and runs
    /// with failed attempts are warnings.
    pub fn from_report(report: &RunReport) -> Self {
        let message = report.summary();
        match report.stop {
            StopReason::Fatal(_) => Self::warning(message),
            _ if report.successes < report.attempts => Self::warning(message),
            StopReason::Cancelled | StopReason::EndDateReached { .. } => Self::info(message),
            StopReason::Completed => Self::success(message),
        }
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= NOTIFICATION_TTL_SECS
    }
}
