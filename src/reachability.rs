//! Optional profile reachability check
//!
//! A single best-effort GET, logged once per run. The result never gates a run.

use std::time::Duration;

use crate::model::LogLevel;
use crate::reporter::Reporter;

/// Timeout used when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Outcome of the GET request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reachability {
    /// 2xx status
    Reachable(u16),
    /// Any other status
    Unexpected(u16),
    /// Transport failure (DNS, refused, timeout, bad URL)
    Failed(String),
}

impl Reachability {
    /// Level and message to report for this outcome
    pub fn describe(&self) -> (LogLevel, String) {
        match self {
            Reachability::Reachable(status) => (
                LogLevel::Success,
                format!("Successfully connected to profile ({status})"),
            ),
            Reachability::Unexpected(status) => (
                LogLevel::Warning,
                format!("Could not verify profile ({status})"),
            ),
            Reachability::Failed(err) => {
                (LogLevel::Warning, format!("Failed to reach profile: {err}"))
            }
        }
    }
}

/// Issue a blocking GET to `url` with `timeout`
///
/// Must not be called from inside an async runtime.
pub fn check(url: &str, timeout: Duration) -> Reachability {
    let client = match reqwest::blocking::Client::builder().timeout(timeout).build() {
        Ok(client) => client,
        Err(e) => return Reachability::Failed(e.to_string()),
    };

    match client.get(url).send() {
        Ok(response) => {
            let status = response.status();
            if status.is_success() {
                Reachability::Reachable(status.as_u16())
            } else {
                Reachability::Unexpected(status.as_u16())
            }
        }
        Err(e) => Reachability::Failed(e.to_string()),
    }
}

/// Check `url` and report the outcome
pub fn check_and_report<P: Reporter + ?Sized>(url: &str, timeout: Duration, reporter: &mut P) {
    let result = check(url, timeout);
    tracing::debug!(url, ?result, "reachability check");
    let (level, message) = result.describe();
    reporter.log(level, &message);
}
