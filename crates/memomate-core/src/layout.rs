//! Selection between the animated city and the simplified list view.

/// Which presentation the terminal is wide enough for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Animated cityscape.
    #[default]
    City,
    /// One row per building.
    Compact,
}

impl LayoutMode {
    /// Default width, in columns, below which the compact view is used.
    pub const DEFAULT_COMPACT_WIDTH: u16 = 80;

    /// Pick the layout for a terminal `width` columns wide.
    pub fn for_width(width: u16, compact_below: u16) -> Self {
        if width < compact_below {
            LayoutMode::Compact
        } else {
            LayoutMode::City
        }
    }
}
