//! Application state and run lifecycle

use chrono::Local;

use crate::config::{RunInput, Settings};
use crate::model::{Notification, RunConfig};
use crate::ui::components::Dialog;
use crate::ui::views::{FormView, RunView};
use crate::worker::RunHandle;

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Form,
    Run,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current screen
    pub screen: Screen,
    /// Form state (kept while a run is shown, so values survive)
    pub form: FormView,
    /// Run screen state for the current or last run
    pub run_view: RunView,
    /// Settings supplying remote, log directory and timeouts
    pub settings: Settings,
    /// Notification to display (last run result)
    pub notification: Option<Notification>,
    /// Active dialog (blocks other input when Some)
    pub active_dialog: Option<Dialog>,
    /// Quit requested while a run was active; exit once it finishes
    pub quit_pending: bool,
    /// Handle of the active run
    pub(crate) handle: Option<RunHandle>,
}

impl App {
    /// Construct a new instance of [`App`] with the form prefilled from settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            running: true,
            screen: Screen::Form,
            form: FormView::new(&RunInput::from_settings(&settings)),
            run_view: RunView::default(),
            settings,
            notification: None,
            active_dialog: None,
            quit_pending: false,
            handle: None,
        }
    }

    /// Is a run executing right now?
    pub fn is_run_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Validate the form and start a run, or show every problem at once
    pub(crate) fn submit(&mut self, input: RunInput) {
        match input.validate(&self.settings, Local::now().naive_local()) {
            Ok(config) => {
                self.form.clear_invalid();
                self.start_run(config);
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "form rejected");
                self.form.mark_invalid(&errors);
                self.active_dialog = Some(Dialog::alert(
                    "Invalid input",
                    errors.iter().map(ToString::to_string).collect(),
                ));
            }
        }
    }

    /// Start a run on a background thread
    pub fn start_run(&mut self, config: RunConfig) {
        let repo = config.repo_path.display().to_string();
        let total = config.max_commits;
        match RunHandle::spawn(config, &self.settings) {
            Ok(handle) => self.attach_run(handle, repo, total),
            Err(e) => {
                self.active_dialog = Some(Dialog::alert(
                    "Could not start run",
                    vec![e.to_string()],
                ));
            }
        }
    }

    /// Show `handle` on the run screen
    pub fn attach_run(&mut self, handle: RunHandle, repo: String, total: usize) {
        self.handle = Some(handle);
        self.run_view = RunView::new(repo, total);
        self.screen = Screen::Run;
    }

    /// Drain run events; called on every loop iteration
    ///
    /// The `Finished` event ends the run: the thread is joined and a
    /// notification summarizes the result.
    pub fn tick(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            self.clear_expired_notification();
            return;
        };

        for event in handle.try_events() {
            self.run_view.apply(event);
        }

        if let Some(mut handle) = self.handle.take_if(|h| h.is_finished()) {
            handle.join();
            if let Some(report) = handle.report() {
                self.notification = Some(Notification::from_report(report));
            }
            if self.quit_pending {
                self.running = false;
            }
        }
    }

    /// Ask the active run to stop before its next attempt
    pub(crate) fn cancel_run(&mut self) {
        if let Some(handle) = &self.handle {
            handle.cancel();
        }
    }

    /// Return from the run screen to the form
    pub(crate) fn back_to_form(&mut self) {
        if !self.is_run_active() {
            self.screen = Screen::Form;
        }
    }

    /// Quit, or with an active run, cancel it and quit once it has finished
    ///
    /// The loop keeps drawing and ticking meanwhile, so the cancelling
    /// state stays visible until the attempt in flight completes.
    pub(crate) fn quit(&mut self) {
        match &self.handle {
            Some(handle) => {
                handle.cancel();
                self.run_view.cancel_requested = true;
                self.screen = Screen::Run;
                self.quit_pending = true;
            }
            None => self.running = false,
        }
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
