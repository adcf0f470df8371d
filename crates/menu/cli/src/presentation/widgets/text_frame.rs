//! Text frame rendering (the description bar).

use menu_core::TextFrame;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::MenuTheme;

pub fn render(frame: &mut Frame, area: Rect, text: &TextFrame, theme: &MenuTheme) {
    let lines: Vec<Line> = text
        .lines()
        .iter()
        .map(|line| Line::from(Span::styled(line.clone(), theme.description_text())))
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(true)),
    );

    frame.render_widget(widget, area);
}
