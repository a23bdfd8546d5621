//! Events flowing from a run to its control surface

use super::RunReport;

/// Severity of a run log line (determines prefix and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational progress
    Info,
    /// A step completed (commit pushed, profile reachable)
    Success,
    /// Non-fatal problem (attempt failed, log write failed)
    Warning,
    /// Fatal run failure
    Error,
}

impl LogLevel {
    /// Console prefix for this level
    pub fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "[*]",
            LogLevel::Success => "[+]",
            LogLevel::Warning => "[!]",
            LogLevel::Error => "[!!]",
        }
    }
}

/// Message sent from a running generator to whoever drives it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// A log line to display
    Log { level: LogLevel, message: String },
    /// Attempt `done` of `total` finished
    Progress { done: usize, total: usize },
    /// The run ended; sent exactly once
    Finished(RunReport),
}

impl RunEvent {
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
        }
    }
}
