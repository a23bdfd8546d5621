//! Common test utilities for integration and scenario tests.
//!
//! Provides temporary git repositories, a bare remote, an in-memory
//! version-control fake, and run configuration builders.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(unused_macros)]

/// Skip the current test when `git` is not installed.
macro_rules! skip_if_no_git {
    () => {
        if !common::git_available() {
            eprintln!("skipping: git not found in PATH");
            return;
        }
    };
}

pub mod fake_vcs;
pub mod remote_repo;
pub mod test_repo;

pub use fake_vcs::{FakeCommit, FakeVcs};
pub use remote_repo::RemoteRepo;
pub use test_repo::TestRepo;

use std::path::Path;
use std::process::Command;

use backfill::model::{RunConfig, RunReport, StepBounds};
use backfill::worker::RunHandle;
use chrono::{NaiveDate, NaiveDateTime};

/// Whether a `git` binary can be executed.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

/// Midnight on the given date.
pub fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(0, 0, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A run configuration starting 2024-01-01 with fixed or ranged steps.
pub fn run_config(
    log_dir: &Path,
    max_commits: usize,
    steps: (u32, u32),
    end_date: NaiveDate,
) -> RunConfig {
    RunConfig {
        repo_path: log_dir.to_path_buf(),
        remote: "origin".to_string(),
        profile_url: None,
        start: midnight(2024, 1, 1),
        end_date,
        max_commits,
        steps: StepBounds::new(steps.0, steps.1).expect("min <= max"),
        log_dir: log_dir.join("log_files"),
    }
}

/// Drain a run's events without cancelling it, then join its thread.
pub fn wait_for_report(mut handle: RunHandle) -> RunReport {
    while !handle.is_finished() {
        if handle.recv().is_none() {
            break;
        }
    }
    handle.join();
    handle.report().cloned().expect("run sent Finished")
}
