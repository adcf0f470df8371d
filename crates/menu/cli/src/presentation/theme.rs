//! Color and style rules for the menu UI.

use ratatui::style::{Color, Modifier, Style};

/// Concrete styling for the terminal menu widgets.
pub struct MenuTheme;

impl MenuTheme {
    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn row(&self, selected: bool, active: bool) -> Style {
        if !active {
            Style::default().fg(Color::Gray)
        } else if selected {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        }
    }

    pub fn cursor_marker(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn description_text(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn member_name(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Health readout coloring: green above half, yellow above a quarter,
    /// red below.
    pub fn health(&self, current: u32, maximum: u32) -> Style {
        let color = if current * 2 >= maximum {
            Color::Green
        } else if current * 4 >= maximum {
            Color::Yellow
        } else {
            Color::Red
        };
        Style::default().fg(color)
    }

    pub fn magic(&self, _current: u32, _maximum: u32) -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn field_tile(&self) -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
    }

    pub fn field_player(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }
}
