/// Layout and capacity constants shared by the menu widgets and screens.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuConfig {
    /// Rows kept clear between the list widget and the bottom screen edge.
    pub bottom_margin: u16,
    /// Horizontal gap between the menu widgets and the status bar.
    pub widget_gap: u16,
}

impl MenuConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of stacks the party inventory can hold.
    pub const MAX_INVENTORY_SLOTS: usize = 24;

    // ===== runtime-tunable defaults =====
    /// Default per-stack quantity cap for stackable items.
    pub const DEFAULT_MAX_STACK: u16 = 99;
    /// Border thickness drawn around every widget frame, in cells.
    pub const BORDER: u16 = 1;
    pub const DEFAULT_BOTTOM_MARGIN: u16 = 2;
    pub const DEFAULT_WIDGET_GAP: u16 = 2;

    pub fn new() -> Self {
        Self {
            bottom_margin: Self::DEFAULT_BOTTOM_MARGIN,
            widget_gap: Self::DEFAULT_WIDGET_GAP,
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self::new()
    }
}
