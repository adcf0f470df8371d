//! Party status bar docked at the right screen edge.
//!
//! The bar is owned by the parent menu and shared with every child screen;
//! the item menu lays its own widgets out against the bar's left edge.

use menu_core::{Frame, Party, Rect};

/// Right-docked panel showing each member's vitals.
#[derive(Clone, Debug)]
pub struct StatusBar {
    pub frame: Frame,
    width: u16,
}

impl StatusBar {
    /// Rows of text shown per party member.
    pub const ROWS_PER_MEMBER: u16 = 3;

    pub fn new(width: u16) -> Self {
        let mut frame = Frame::new();
        frame.bounds.width = width;
        Self { frame, width }
    }

    /// Re-dock against the current screen area and re-size to the roster.
    pub fn refresh(&mut self, party: &Party, screen: Rect) {
        let rows = party.members().len() as u16 * Self::ROWS_PER_MEMBER;
        self.frame.bounds.width = self.width.min(screen.width);
        self.frame.bounds.x = screen.width.saturating_sub(self.frame.bounds.width);
        self.frame.bounds.y = 0;
        self.frame.bounds.height = (rows + self.frame.frame_width()).min(screen.height);
    }

    /// Column of the bar's left edge; menu widgets must stay left of it.
    pub fn left(&self) -> u16 {
        self.frame.bounds.x
    }
}
