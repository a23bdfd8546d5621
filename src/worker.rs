//! Background run
//!
//! A run executes on its own thread and reports through a channel. The
//! thread driving the UI drains the channel on its own schedule; the
//! `Finished` event is the completion notification and is sent exactly once,
//! even if the run panics.

use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::config::Settings;
use crate::generator::{CancelToken, Run};
use crate::git::{GitExecutor, VersionControl};
use crate::model::{RunConfig, RunEvent, RunReport};
use crate::reachability;

/// Handle to a run executing on a background thread
#[derive(Debug)]
pub struct RunHandle {
    events: Receiver<RunEvent>,
    cancel: CancelToken,
    thread: Option<JoinHandle<()>>,
    report: Option<RunReport>,
}

impl RunHandle {
    /// Start a run against the repository in `config` using the `git` binary
    pub fn spawn(config: RunConfig, settings: &Settings) -> io::Result<Self> {
        let git = GitExecutor::with_repo_path(config.repo_path.clone());
        Self::spawn_with(config, git, settings.reachability_timeout())
    }

    /// Start a run against any version-control collaborator
    pub fn spawn_with<V>(config: RunConfig, vcs: V, timeout: Duration) -> io::Result<Self>
    where
        V: VersionControl + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let cancel = CancelToken::new();
        let token = cancel.clone();

        let thread = thread::Builder::new()
            .name("backfill-run".to_string())
            .spawn(move || {
                let mut rng = rand::thread_rng();
                let run = Run::initialize(config, &mut rng);
                let run_id = run.id().clone();

                let panic_guard = scopeguard::guard_on_unwind(tx.clone(), move |tx| {
                    tracing::error!(%run_id, "run thread panicked");
                    let report = RunReport::fatal(run_id, "run thread panicked");
                    let _ = tx.send(RunEvent::Finished(report));
                });

                let mut reporter = tx.clone();
                if let Some(url) = run.config().profile_url.clone() {
                    reachability::check_and_report(&url, timeout, &mut reporter);
                }
                let report = run.execute(&mut rng, &vcs, &mut reporter, &token);

                drop(panic_guard);
                let _ = tx.send(RunEvent::Finished(report));
            })?;

        Ok(Self {
            events: rx,
            cancel,
            thread: Some(thread),
            report: None,
        })
    }

    /// Ask the run to stop before its next attempt
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Drain pending events without blocking
    pub fn try_events(&mut self) -> Vec<RunEvent> {
        let mut drained = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.observe(&event);
                    drained.push(event);
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        drained
    }

    /// Wait for the next event; None once the run has finished and the
    /// channel is empty
    pub fn recv(&mut self) -> Option<RunEvent> {
        let event = self.events.recv().ok()?;
        self.observe(&event);
        Some(event)
    }

    /// The final report, once `Finished` has been received
    pub fn report(&self) -> Option<&RunReport> {
        self.report.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// Wait for the thread to exit
    pub fn join(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }

    /// Cancel, drain until `Finished`, and join
    pub fn shutdown(mut self) -> Option<RunReport> {
        self.cancel();
        while !self.is_finished() {
            if self.recv().is_none() {
                break;
            }
        }
        self.join();
        self.report
    }

    fn observe(&mut self, event: &RunEvent) {
        if let RunEvent::Finished(report) = event {
            self.report = Some(report.clone());
        }
    }
}
