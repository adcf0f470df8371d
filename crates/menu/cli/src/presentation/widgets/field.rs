//! Demo field backdrop drawn behind the menu windows.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::MenuTheme;
use crate::screen::WorldView;

/// Deterministic patch of grass with the player standing in the middle.
///
/// Stands in for the engine's map renderer so the demo binary shows the
/// menu sliding in over something that looks like a field.
#[derive(Debug, Default)]
pub struct FieldBackdrop;

impl WorldView for FieldBackdrop {
    fn render(&self, frame: &mut Frame, area: Rect) {
        let theme = MenuTheme;
        let mut lines = Vec::with_capacity(area.height as usize);

        for y in 0..area.height {
            let mut spans = Vec::with_capacity(area.width as usize);
            for x in 0..area.width {
                if x == area.width / 2 && y == area.height / 2 {
                    spans.push(Span::styled("@", theme.field_player()));
                } else {
                    spans.push(Span::styled(tile_glyph(x, y), theme.field_tile()));
                }
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn tile_glyph(x: u16, y: u16) -> &'static str {
    match (u32::from(x) * 31 + u32::from(y) * 17) % 11 {
        0 => ",",
        1 => "'",
        2 => "\"",
        3 => ".",
        _ => " ",
    }
}
