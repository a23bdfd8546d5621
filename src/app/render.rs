//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::state::{App, Screen};
use crate::keys;
use crate::ui::components::DialogKind;
use crate::ui::widgets::render_status_bar;

impl App {
    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let [main, _status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());

        let notification = self.notification.as_ref().filter(|n| !n.is_expired());

        match self.screen {
            Screen::Form => self.form.render(frame, main, notification),
            Screen::Run => self.run_view.render(frame, main),
        }

        render_status_bar(frame, self.current_hints());

        // Render dialog on top of everything
        if let Some(ref dialog) = self.active_dialog {
            dialog.render(frame, frame.area());
        }
    }

    /// Key hints for the current screen and dialog
    fn current_hints(&self) -> &'static [keys::KeyHint] {
        match (&self.active_dialog, self.screen) {
            (Some(dialog), _) => match dialog.kind {
                DialogKind::Confirm { .. } => keys::CONFIRM_HINTS,
                DialogKind::Alert { .. } => keys::ALERT_HINTS,
            },
            (None, Screen::Form) => keys::FORM_HINTS,
            (None, Screen::Run) if self.run_view.is_finished() => keys::RUN_FINISHED_HINTS,
            (None, Screen::Run) => keys::RUN_ACTIVE_HINTS,
        }
    }
}
