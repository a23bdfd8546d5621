//! Rendering for RunView

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use super::RunView;
use crate::model::LogLevel;
use crate::ui::components::{bordered_block, build_error_line};
use crate::ui::theme;

impl RunView {
    /// Render title, progress gauge, log pane and status line into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // title
            Constraint::Length(3), // gauge
            Constraint::Min(3),    // log
            Constraint::Length(1), // status
        ])
        .split(area);

        let title = Line::from(vec![
            Span::styled(" Run ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(self.repo.clone(), Style::default().fg(theme::run::RUN_ID)),
        ]);
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let gauge = Gauge::default()
            .block(bordered_block(Line::from(" Progress ")))
            .gauge_style(Style::default().fg(theme::run::GAUGE))
            .ratio(self.ratio())
            .label(format!("{}/{}", self.done, self.total));
        frame.render_widget(gauge, chunks[1]);

        self.render_log(frame, chunks[2]);

        frame.render_widget(Paragraph::new(self.status_line()), chunks[3]);
    }

    /// Log pane, following the tail
    fn render_log(&self, frame: &mut Frame, area: Rect) {
        let visible = area.height.saturating_sub(2) as usize;
        let skip = self.lines.len().saturating_sub(visible);
        let lines: Vec<Line> = self
            .lines
            .iter()
            .skip(skip)
            .map(|(level, message)| {
                Line::from(vec![
                    Span::raw(format!("{} ", level.prefix())),
                    Span::styled(message.clone(), Style::default().fg(theme::log_level(*level))),
                ])
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).block(bordered_block(Line::from(" Log "))),
            area,
        );
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(report) = &self.report {
            if report.stop.is_error() {
                return build_error_line(&report.summary());
            }
            Line::from(Span::styled(
                format!(" {}", report.summary()),
                Style::default().fg(theme::log_level(LogLevel::Success)),
            ))
        } else if self.cancel_requested {
            Line::from(Span::styled(
                " Cancelling after the current attempt…",
                Style::default().fg(theme::run::CANCELLING),
            ))
        } else {
            Line::from(" Running…")
        }
    }
}
