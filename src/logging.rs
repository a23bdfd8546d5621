//! Diagnostics logging
//!
//! Run output goes through [`crate::reporter`]; this is for `tracing`
//! diagnostics only. Filter with `BACKFILL_LOG` (e.g. `BACKFILL_LOG=debug`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "BACKFILL_LOG";

/// Diagnostics file written by the terminal form
pub const TRACE_FILE: &str = "backfill.trace.log";

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log warnings and above to stderr (console mode)
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("warn"))
        .with_writer(io::stderr)
        .try_init();
}

/// Log to `<dir>/backfill.trace.log` (terminal form, which owns the screen)
pub fn init_file(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(TRACE_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(path)
}
