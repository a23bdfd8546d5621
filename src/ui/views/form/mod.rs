//! Form View - collects the parameters of a run
//!
//! One single-line editor per [`Field`]. Validation happens in the app; the
//! view only remembers which fields were rejected so it can highlight them.

mod input;
mod render;

use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

use crate::config::{ConfigErrors, Field, RunInput};
use crate::ui::components::colored_block;
use crate::ui::theme;

/// Actions that FormView can request from App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// No action needed
    None,
    /// Validate and start a run with these values
    Submit(RunInput),
    /// Leave the application
    Quit,
}

/// Form View state
#[derive(Debug)]
pub struct FormView {
    /// Editors in `Field::ALL` order
    fields: Vec<TextArea<'static>>,
    /// Index of the focused editor
    focused: usize,
    /// Fields rejected by the last validation
    invalid: Vec<Field>,
}

impl FormView {
    /// Create a form prefilled with `input`
    pub fn new(input: &RunInput) -> Self {
        let fields = Field::ALL
            .iter()
            .map(|&field| editor(field, input.get(field)))
            .collect();

        let mut view = Self {
            fields,
            focused: 0,
            invalid: Vec::new(),
        };
        view.refresh_styles();
        view
    }

    /// Current values of every field
    pub fn input(&self) -> RunInput {
        let mut input = RunInput::default();
        for (field, textarea) in Field::ALL.iter().zip(&self.fields) {
            input.set(*field, textarea.lines().concat());
        }
        input
    }

    pub fn focused_field(&self) -> Field {
        Field::ALL[self.focused]
    }

    pub fn invalid_fields(&self) -> &[Field] {
        &self.invalid
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
        self.refresh_styles();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        self.refresh_styles();
    }

    /// Highlight rejected fields and focus the first one
    pub fn mark_invalid(&mut self, errors: &ConfigErrors) {
        self.invalid = errors.iter().filter_map(|e| e.field()).collect();
        if let Some(first) = self.invalid.first()
            && let Some(index) = Field::ALL.iter().position(|f| f == first)
        {
            self.focused = index;
        }
        self.refresh_styles();
    }

    /// Forget previous validation failures
    pub fn clear_invalid(&mut self) {
        self.invalid.clear();
        self.refresh_styles();
    }

    /// Apply border color, title and cursor visibility to every editor
    fn refresh_styles(&mut self) {
        for (i, (field, textarea)) in Field::ALL.iter().zip(self.fields.iter_mut()).enumerate() {
            let focused = i == self.focused;
            let color = if self.invalid.contains(field) {
                theme::form::INVALID_BORDER
            } else if focused {
                theme::form::FOCUSED_BORDER
            } else {
                theme::form::NORMAL_BORDER
            };
            textarea.set_block(colored_block(format!(" {} ", field.label()).into(), color));
            textarea.set_cursor_style(if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
        }
    }
}

/// Single-line editor for `field` holding `text`, cursor at the end
fn editor(field: Field, text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    textarea.set_placeholder_text(field.placeholder());
    textarea.set_placeholder_style(Style::default().fg(theme::form::PLACEHOLDER));
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}
