//! Log-line and progress sinks for a run
//!
//! A run never talks to its control surface directly; it reports through a
//! [`Reporter`]. The form uses a channel, the console prints, tests record.

use std::io::{self, Write};
use std::sync::mpsc::Sender;

use crate::model::{LogLevel, RunEvent};

/// Receives a run's log lines and progress updates
pub trait Reporter {
    fn log(&mut self, level: LogLevel, message: &str);

    /// Attempt `done` of `total` finished
    fn progress(&mut self, done: usize, total: usize);
}

/// Forwards everything over a channel to the thread that owns the UI
///
/// Send errors are ignored: the receiver may already be gone.
impl Reporter for Sender<RunEvent> {
    fn log(&mut self, level: LogLevel, message: &str) {
        let _ = self.send(RunEvent::log(level, message));
    }

    fn progress(&mut self, done: usize, total: usize) {
        let _ = self.send(RunEvent::Progress { done, total });
    }
}

/// Prints prefixed lines (`[*] ...`) to a writer, stdout by default
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = io::Stdout> {
    out: W,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn log(&mut self, level: LogLevel, message: &str) {
        let _ = writeln!(self.out, "{} {}", level.prefix(), message);
        let _ = self.out.flush();
    }

    // The per-attempt "Run n/max" line already carries progress.
    fn progress(&mut self, _done: usize, _total: usize) {}
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub events: Vec<RunEvent>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages logged at `level`, in order
    pub fn messages(&self, level: LogLevel) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RunEvent::Log { level: l, message } if *l == level => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Progress updates as `(done, total)` pairs
    pub fn progress_updates(&self) -> Vec<(usize, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RunEvent::Progress { done, total } => Some((*done, *total)),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn log(&mut self, level: LogLevel, message: &str) {
        self.events.push(RunEvent::log(level, message));
    }

    fn progress(&mut self, done: usize, total: usize) {
        self.events.push(RunEvent::Progress { done, total });
    }
}
