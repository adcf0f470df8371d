//! Menu screens and the collaborators they are driven with.

mod item_menu;
mod status_bar;

pub use item_menu::ItemMenuScreen;
pub use status_bar::StatusBar;

use menu_core::{Party, Rect};

/// Outcome of one screen update step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenSignal {
    /// Keep polling.
    Running,
    /// The user dismissed the screen.
    Cancelled,
}

/// Borrowed collaborators a screen operates on.
///
/// The party and the status bar are owned by the caller (the parent menu);
/// screens only ever hold them for the duration of a call.
pub struct ScreenContext<'a> {
    pub party: &'a mut Party,
    pub status_bar: &'a mut StatusBar,
    /// Current screen area in cells.
    pub screen: Rect,
}

/// Renders the game world behind the menu windows.
pub trait WorldView {
    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect);
}
