//! Party status bar rendering.

use menu_core::Party;
use ratatui::{
    Frame,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::{core_rect, theme::MenuTheme, to_ratatui};
use crate::screen::StatusBar;

pub fn render(frame: &mut Frame, bar: &StatusBar, party: &Party, theme: &MenuTheme) {
    let area = bar.frame.bounds.intersection(core_rect(frame.area()));
    if area.is_empty() {
        return;
    }

    let mut lines = Vec::new();
    for member in party.members() {
        lines.push(Line::from(Span::styled(
            member.name.clone(),
            theme.member_name(),
        )));
        lines.push(Line::from(vec![
            Span::raw("HP "),
            Span::styled(
                format!("{}/{}", member.health.current, member.health.maximum),
                theme.health(member.health.current, member.health.maximum),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("MP "),
            Span::styled(
                format!("{}/{}", member.magic.current, member.magic.maximum),
                theme.magic(member.magic.current, member.magic.maximum),
            ),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border(true))
            .title(" Party ")
            .title_style(theme.title()),
    );

    frame.render_widget(widget, to_ratatui(area));
}
