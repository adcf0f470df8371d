//! Terminal rendering: setup/teardown, theming, and widget drawing.

pub mod terminal;
pub mod theme;
pub mod widgets;

/// Convert a core layout rect into a ratatui rect.
pub fn to_ratatui(rect: menu_core::Rect) -> ratatui::layout::Rect {
    ratatui::layout::Rect::new(rect.x, rect.y, rect.width, rect.height)
}

/// Convert a ratatui area into a core layout rect.
pub fn core_rect(area: ratatui::layout::Rect) -> menu_core::Rect {
    menu_core::Rect::new(area.x, area.y, area.width, area.height)
}
