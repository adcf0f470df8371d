//! Inventory list widget rendering.

use menu_core::MenuList;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::theme::MenuTheme;

/// Render the list's scroll window with a cursor marker.
///
/// The area may be a clipped slice of the widget's laid-out bounds while a
/// slide animation is in flight.
pub fn render(frame: &mut Frame, area: Rect, list: &MenuList, theme: &MenuTheme) {
    let end = (list.scroll() + list.page_rows()).min(list.rows().len());
    let start = list.scroll().min(end);

    let items: Vec<ListItem> = list.rows()[start..end]
        .iter()
        .enumerate()
        .map(|(offset, row)| {
            let index = start + offset;
            let selected = list.active && index == list.cursor();
            let marker = if selected { "\u{25ba} " } else { "  " };

            ListItem::new(Line::from(vec![
                Span::styled(marker, theme.cursor_marker()),
                Span::styled(row.clone(), theme.row(selected, list.active)),
            ]))
        })
        .collect();

    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(list.active))
            .title(" Items ")
            .title_style(theme.title()),
    );

    frame.render_widget(widget, area);
}
