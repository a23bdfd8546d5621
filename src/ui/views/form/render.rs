//! Rendering for FormView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::FormView;
use crate::model::Notification;
use crate::ui::{components, theme};

/// Height of one field editor (border + line + border)
const FIELD_HEIGHT: u16 = 3;

impl FormView {
    /// Render the title line and every field editor into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, notification: Option<&Notification>) {
        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
        constraints.push(Constraint::Min(0));
        let chunks = Layout::vertical(constraints).split(area);

        let title = Line::from(vec![Span::styled(
            " backfill: backdated commit sequence ",
            Style::default()
                .fg(theme::form::TITLE)
                .add_modifier(Modifier::BOLD),
        )]);
        let title_width = title.width();
        let mut spans = title.spans;
        if let Some(notification) = notification {
            let available = (area.width as usize).saturating_sub(title_width);
            spans.extend(components::build_notification_title(notification, Some(available)).spans);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

        for (textarea, chunk) in self.fields.iter().zip(chunks.iter().skip(1)) {
            frame.render_widget(textarea, *chunk);
        }
    }
}
