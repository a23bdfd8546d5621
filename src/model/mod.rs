//! Data models for backfill
//!
//! This module contains UI-independent data structures describing a run:
//! its configuration, the attempts it makes, and how it ends.

mod attempt;
mod event;
mod notification;
mod report;
mod run_config;
mod run_id;
mod steps;

pub use attempt::{COMMIT_MESSAGE_PREFIX, CommitAttempt};
pub use event::{LogLevel, RunEvent};
pub use notification::{Notification, NotificationKind};
pub use report::{RunReport, StopReason};
pub use run_config::RunConfig;
pub use run_id::{RunId, random_hex};
pub use steps::{DEFAULT_MAX_STEP_MINUTES, DEFAULT_MIN_STEP_MINUTES, StepBounds};
