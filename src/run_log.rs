//! Append-only run log
//!
//! One text file per run, one line per attempt. Never read back.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::model::RunId;

/// Default directory for run logs (relative to the working directory)
pub const DEFAULT_LOG_DIR: &str = "log_files";

/// File name prefix shared by every run log
const FILE_PREFIX: &str = "GITHUB_BOT";

/// Handle to a run's log file
#[derive(Debug, Clone)]
pub struct RunLog {
    dir: PathBuf,
    path: PathBuf,
}

impl RunLog {
    /// Log for `run_id` started on `start_date`
    ///
    /// Path: `<dir>/GITHUB_BOT_<runId>_<MM.DD.YYYY>.txt`
    pub fn new(dir: impl Into<PathBuf>, run_id: &RunId, start_date: NaiveDate) -> Self {
        let dir = dir.into();
        let name = format!(
            "{FILE_PREFIX}_{run_id}_{}.txt",
            start_date.format("%m.%d.%Y")
        );
        let path = dir.join(name);
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the log directory if needed
    pub fn ensure_dir(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)
    }

    /// Append one line (a trailing newline is added)
    ///
    /// The file is opened, written and closed on every call.
    pub fn append(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}
