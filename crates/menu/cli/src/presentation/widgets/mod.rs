//! Render functions mapping core widget state onto ratatui primitives.

pub mod field;
pub mod menu_list;
pub mod status_bar;
pub mod text_frame;
