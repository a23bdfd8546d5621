//! Dialog components
//!
//! - Confirm dialog: Yes/No confirmation
//! - Alert dialog: a titled list of lines (validation errors), dismissed with
//!   Enter or Esc

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Callback identifier for dialog results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCallback {
    /// Quit while a run is active (cancels the run first)
    QuitDuringRun,
    /// Informational only; nothing happens on close
    Dismiss,
}

/// Dialog kind and content
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// Simple Yes/No confirmation
    Confirm { title: String, message: String },
    /// Read-only list of lines
    Alert { title: String, lines: Vec<String> },
}

/// Dialog result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    Confirmed,
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct Dialog {
    pub kind: DialogKind,
    pub callback_id: DialogCallback,
}

impl Dialog {
    /// Create a new Confirm dialog
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        callback_id: DialogCallback,
    ) -> Self {
        Self {
            kind: DialogKind::Confirm {
                title: title.into(),
                message: message.into(),
            },
            callback_id,
        }
    }

    /// Create a new Alert dialog
    pub fn alert(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            kind: DialogKind::Alert {
                title: title.into(),
                lines,
            },
            callback_id: DialogCallback::Dismiss,
        }
    }

    /// Handle key input, returns Some(result) when dialog should close
    pub fn handle_key(&self, key: KeyEvent) -> Option<DialogResult> {
        match &self.kind {
            DialogKind::Confirm { .. } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(DialogResult::Confirmed)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(DialogResult::Cancelled)
                }
                _ => None,
            },
            DialogKind::Alert { .. } => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => {
                    Some(DialogResult::Cancelled)
                }
                _ => None,
            },
        }
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match &self.kind {
            DialogKind::Confirm { title, message } => render_confirm(frame, area, title, message),
            DialogKind::Alert { title, lines } => render_alert(frame, area, title, lines),
        }
    }
}

fn render_confirm(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let width = 50.min(area.width.saturating_sub(4));
    let dialog_area = centered_rect(width, 7, area);

    frame.render_widget(Clear, dialog_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw("es         "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw("o"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(dialog_block(title, Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, dialog_area);
}

fn render_alert(frame: &mut Frame, area: Rect, title: &str, lines: &[String]) {
    let width = 64.min(area.width.saturating_sub(4));
    let height = (lines.len() as u16 + 4).min(area.height.saturating_sub(2));
    let dialog_area = centered_rect(width, height, area);

    frame.render_widget(Clear, dialog_area);

    let mut content: Vec<Line> = vec![Line::from("")];
    content.extend(lines.iter().map(|line| {
        Line::from(vec![
            Span::styled(" • ", Style::default().fg(Color::Red)),
            Span::raw(line.clone()),
        ])
    }));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Cyan)),
        Span::raw(" Close"),
    ]));

    let paragraph = Paragraph::new(content)
        .block(dialog_block(title, Color::Red))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, dialog_area);
}

fn dialog_block(title: &str, color: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Calculate a centered rectangle within the given area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let vertical_layout = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .split(area);

    let horizontal_layout = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .split(vertical_layout[1]);

    horizontal_layout[1]
}
