//! Input handling for FormView

use crossterm::event::KeyEvent;

use super::{FormAction, FormView, editor};
use crate::keys;

impl FormView {
    /// Handle key event and return action
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            keys::SUBMIT => FormAction::Submit(self.input()),
            keys::ESC => FormAction::Quit,
            k if keys::is_next_field(k) => {
                self.focus_next();
                FormAction::None
            }
            k if keys::is_prev_field(k) => {
                self.focus_prev();
                FormAction::None
            }
            _ => {
                self.edit_focused(key);
                FormAction::None
            }
        }
    }

    /// Delegate the key to the focused editor
    fn edit_focused(&mut self, key: KeyEvent) {
        let field = self.focused_field();
        let textarea = &mut self.fields[self.focused];
        if !textarea.input(key) {
            return;
        }

        // Fields are single-line: fold any inserted line break back
        if textarea.lines().len() > 1 {
            *textarea = editor(field, &textarea.lines().concat());
        }

        if self.invalid.contains(&field) {
            self.invalid.retain(|f| *f != field);
        }
        self.refresh_styles();
    }
}
