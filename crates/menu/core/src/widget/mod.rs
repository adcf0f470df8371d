//! Widget state for the menu screens.
//!
//! Widgets here are pure state machines: a [`Frame`] carries docking
//! geometry, [`MenuList`] carries rows plus cursor bookkeeping, and
//! [`TextFrame`] carries display lines. Frontends render this state and
//! translate raw key events into [`MenuInput`]s.

mod menu;
mod text_frame;

pub use menu::{MenuEvent, MenuInput, MenuList};
pub use text_frame::TextFrame;

use crate::config::MenuConfig;
use crate::geometry::Rect;

/// Positioned, bordered base shared by every menu widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub bounds: Rect,
    /// Border thickness on each edge, in cells.
    pub border: u16,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            bounds: Rect::ZERO,
            border: MenuConfig::BORDER,
        }
    }

    /// Total horizontal space taken by the borders.
    pub fn frame_width(&self) -> u16 {
        self.border * 2
    }

    /// Anchor the top edge to the top of the screen.
    pub fn dock_top(&mut self) -> &mut Self {
        self.bounds.y = 0;
        self
    }

    /// Anchor the left edge to the left of the screen.
    pub fn dock_left(&mut self) -> &mut Self {
        self.bounds.x = 0;
        self
    }

    /// Anchor the top edge directly below another frame.
    pub fn dock_below(&mut self, other: &Frame) -> &mut Self {
        self.bounds.y = other.bounds.bottom();
        self
    }

    /// Pin the right edge to `edge`, resizing the frame in place.
    pub fn set_right(&mut self, edge: u16) -> &mut Self {
        self.bounds.width = edge.saturating_sub(self.bounds.x);
        self
    }

    /// Shrink the frame if its right edge passes `edge`; never grows it.
    pub fn constrain_right(&mut self, edge: u16) -> &mut Self {
        if self.bounds.right() > edge {
            self.set_right(edge);
        }
        self
    }

    /// Rows available for content inside the borders.
    pub fn content_rows(&self) -> u16 {
        self.bounds.height.saturating_sub(self.frame_width())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
