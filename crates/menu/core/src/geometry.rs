use std::fmt;

/// Axis-aligned rectangle in terminal cell coordinates.
///
/// Widget frames are laid out in unsigned cell space; slide animations shift
/// them by signed offsets, so [`Rect::offset_clipped`] does the signed math
/// and clips the result back into a bounding area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column to the right of the rectangle.
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row below the rectangle.
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Overlapping region of two rectangles; empty when they are disjoint.
    pub fn intersection(self, other: Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }

    /// Shift by a signed offset and clip to `bounds`.
    ///
    /// Returns `None` once the shifted rectangle no longer overlaps the
    /// bounding area (the widget has fully left the screen).
    pub fn offset_clipped(self, dx: i32, dy: i32, bounds: Rect) -> Option<Rect> {
        let x = i64::from(self.x) + i64::from(dx);
        let y = i64::from(self.y) + i64::from(dy);
        let right = x + i64::from(self.width);
        let bottom = y + i64::from(self.height);

        let x = x.clamp(i64::from(bounds.x), i64::from(bounds.right()));
        let y = y.clamp(i64::from(bounds.y), i64::from(bounds.bottom()));
        let right = right.clamp(i64::from(bounds.x), i64::from(bounds.right()));
        let bottom = bottom.clamp(i64::from(bounds.y), i64::from(bounds.bottom()));

        let clipped = Rect {
            x: x as u16,
            y: y as u16,
            width: (right - x) as u16,
            height: (bottom - y) as u16,
        };
        (!clipped.is_empty()).then_some(clipped)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}
