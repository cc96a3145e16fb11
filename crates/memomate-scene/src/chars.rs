//! Glyphs used to draw the city.

/// Characters used for the night starfield.
pub const STAR_CHARS: &[char] = &['.', '*', '+', '·', '✦', '✧'];

/// Building outline: top-left, top-right, bottom-left, bottom-right,
/// horizontal, vertical.
pub const EDGE_CHARS: [char; 6] = ['┌', '┐', '└', '┘', '─', '│'];

/// Building body fill.
pub const BODY_CHAR: char = '▒';

/// Front-facing window strip.
pub const WINDOW_CHAR: char = '▬';

/// Side-facing window.
pub const SIDE_WINDOW_CHAR: char = '▮';

pub const SPIRE_CHAR: char = '┃';
pub const SPIRE_TIP_CHAR: char = '•';

/// Base platform.
pub const PLATFORM_CHAR: char = '▀';

/// Holographic ring, left and right halves.
pub const RING_CHARS: [char; 2] = ['◖', '◗'];

/// Ground grid: open cell, grid line crossing.
pub const GRID_CHARS: [char; 2] = ['·', '┼'];

pub const BOT_BODY_CHAR: char = '◉';
pub const BOT_TRAIL_CHAR: char = '∘';

/// Propeller blade glyphs by yaw, one per eighth of a turn (two-fold symmetric).
pub const BOT_WING_CHARS: [char; 4] = ['─', '╲', '│', '╱'];
