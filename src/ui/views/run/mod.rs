//! Run View - shows a run in progress
//!
//! Fed with [`RunEvent`]s drained by the app on every tick.

mod render;

use crossterm::event::KeyEvent;

use crate::keys;
use crate::model::{LogLevel, RunEvent, RunReport};

/// Actions that RunView can request from App
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunAction {
    None,
    /// Stop the run before its next attempt
    Cancel,
    /// Return to the form (finished runs only)
    Back,
    Quit,
}

/// Run View state
#[derive(Debug, Default)]
pub struct RunView {
    /// Repository shown in the title
    pub repo: String,
    /// Every log line received so far
    pub lines: Vec<(LogLevel, String)>,
    /// Attempts finished
    pub done: usize,
    /// Attempt limit
    pub total: usize,
    /// Set once `Finished` arrives
    pub report: Option<RunReport>,
    /// Cancel was requested and the run has not ended yet
    pub cancel_requested: bool,
}

impl RunView {
    pub fn new(repo: impl Into<String>, total: usize) -> Self {
        Self {
            repo: repo.into(),
            total,
            ..Self::default()
        }
    }

    /// Fold one event into the view
    pub fn apply(&mut self, event: RunEvent) {
        match event {
            RunEvent::Log { level, message } => self.lines.push((level, message)),
            RunEvent::Progress { done, total } => {
                self.done = done;
                self.total = total;
            }
            RunEvent::Finished(report) => {
                self.cancel_requested = false;
                self.report = Some(report);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.report.is_some()
    }

    /// Fraction of attempts done, clamped to `[0, 1]`
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.done as f64 / self.total as f64).clamp(0.0, 1.0)
    }

    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> RunAction {
        if self.is_finished() {
            return match key.code {
                keys::BACK | keys::ESC => RunAction::Back,
                keys::QUIT => RunAction::Quit,
                _ => RunAction::None,
            };
        }

        match key.code {
            keys::CANCEL_RUN | keys::ESC if !self.cancel_requested => {
                self.cancel_requested = true;
                RunAction::Cancel
            }
            keys::QUIT => RunAction::Quit,
            _ => RunAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RunId, StopReason};
    use crossterm::event::{KeyCode, KeyModifiers};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn finished_report() -> RunReport {
        RunReport {
            run_id: RunId::generate(&mut StdRng::seed_from_u64(2)),
            attempts: 2,
            successes: 2,
            stop: StopReason::Completed,
        }
    }

    #[test]
    fn test_apply_events() {
        let mut view = RunView::new("/repo", 4);
        view.apply(RunEvent::log(LogLevel::Info, "git add --all"));
        view.apply(RunEvent::Progress { done: 1, total: 4 });
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.ratio(), 0.25);
        assert!(!view.is_finished());

        view.apply(RunEvent::Finished(finished_report()));
        assert!(view.is_finished());
    }

    #[test]
    fn test_ratio_with_zero_total() {
        assert_eq!(RunView::new("/repo", 0).ratio(), 0.0);
    }

    #[test]
    fn test_cancel_requested_once() {
        let mut view = RunView::new("/repo", 4);
        assert_eq!(view.handle_key(key(KeyCode::Char('c'))), RunAction::Cancel);
        assert!(view.cancel_requested);
        assert_eq!(view.handle_key(key(KeyCode::Char('c'))), RunAction::None);
    }

    #[test]
    fn test_enter_ignored_while_active() {
        let mut view = RunView::new("/repo", 4);
        assert_eq!(view.handle_key(key(KeyCode::Enter)), RunAction::None);
    }

    #[test]
    fn test_finished_keys() {
        let mut view = RunView::new("/repo", 4);
        view.apply(RunEvent::Finished(finished_report()));
        assert_eq!(view.handle_key(key(KeyCode::Enter)), RunAction::Back);
        assert_eq!(view.handle_key(key(KeyCode::Char('q'))), RunAction::Quit);
        assert_eq!(view.handle_key(key(KeyCode::Char('c'))), RunAction::None);
    }
}
