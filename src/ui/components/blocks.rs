//! Block components for UI rendering

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(title)
}

/// Create a bordered block whose border uses `color`
pub fn colored_block<'a>(title: Line<'a>, color: Color) -> Block<'a> {
    bordered_block(title).border_style(Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    #[test]
    fn test_bordered_block_draws_title() {
        let area = Rect::new(0, 0, 12, 3);
        let mut buf = Buffer::empty(area);
        bordered_block(Line::from("Repo")).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "┌");
        assert_eq!(buf[(1, 0)].symbol(), "R");
    }

    #[test]
    fn test_colored_block_uses_color() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        colored_block(Line::from(""), Color::Red).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].fg, Color::Red);
    }
}
