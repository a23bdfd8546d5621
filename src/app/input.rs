//! Input handling for the application

use crossterm::event::KeyEvent;

use super::state::{App, Screen};
use crate::keys;
use crate::ui::components::{Dialog, DialogCallback, DialogResult};
use crate::ui::views::{FormAction, RunAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Waiting for the run to stop before exiting
        if self.quit_pending {
            return;
        }

        // Ctrl+C quits from anywhere, stopping any active run first
        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // Dialogs capture all other input
        if let Some(dialog) = &self.active_dialog {
            if let Some(result) = dialog.handle_key(key) {
                let callback = dialog.callback_id;
                self.active_dialog = None;
                self.handle_dialog_result(callback, result);
            }
            return;
        }

        match self.screen {
            Screen::Form => {
                let action = self.form.handle_key(key);
                self.handle_form_action(action);
            }
            Screen::Run => {
                let action = self.run_view.handle_key(key);
                self.handle_run_action(action);
            }
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::None => {}
            FormAction::Submit(input) => self.submit(input),
            FormAction::Quit => self.quit(),
        }
    }

    fn handle_run_action(&mut self, action: RunAction) {
        match action {
            RunAction::None => {}
            RunAction::Cancel => self.cancel_run(),
            RunAction::Back => self.back_to_form(),
            RunAction::Quit if self.is_run_active() => {
                self.active_dialog = Some(Dialog::confirm(
                    "Quit",
                    "A run is in progress. Cancel it and quit?",
                    DialogCallback::QuitDuringRun,
                ));
            }
            RunAction::Quit => self.quit(),
        }
    }

    fn handle_dialog_result(&mut self, callback: DialogCallback, result: DialogResult) {
        match (callback, result) {
            (DialogCallback::QuitDuringRun, DialogResult::Confirmed) => self.quit(),
            (DialogCallback::QuitDuringRun, DialogResult::Cancelled)
            | (DialogCallback::Dismiss, _) => {}
        }
    }
}
