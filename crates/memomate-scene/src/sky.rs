//! Stateless backdrop: stars above the skyline, a grid on the ground.

use memomate_core::{Rgb, TimeOfDay};

use crate::chars::{GRID_CHARS, STAR_CHARS};
use crate::color::hsl_to_rgb;

/// How long a star keeps its glyph before twinkling, in milliseconds.
const TWINKLE_PERIOD_MS: u64 = 800;
/// Ground grid spacing in columns and rows.
const GRID_COLS: usize = 8;
const GRID_ROWS: usize = 3;

/// Sky glyph at a cell, computed from position and time only.
///
/// Stars show at roughly 3% of positions at night. By day the sky carries a
/// faint haze that brightens towards the horizon.
pub fn sky_cell(
    x: u16,
    y: u16,
    horizon: u16,
    elapsed_ms: u64,
    time_of_day: TimeOfDay,
) -> Option<(char, Rgb)> {
    let x = x as usize;
    let y = y as usize;
    match time_of_day {
        TimeOfDay::Night => {
            let frame_num = elapsed_ms / TWINKLE_PERIOD_MS;
            let seed = (x.wrapping_mul(31))
                .wrapping_add(y.wrapping_mul(17))
                .wrapping_add(frame_num as usize);
            if seed % 100 >= 3 {
                return None;
            }
            let ch = STAR_CHARS[seed % STAR_CHARS.len()];
            let color = match seed % 3 {
                0 => Rgb::new(60, 60, 80),
                1 => Rgb::new(100, 100, 140),
                _ => Rgb::new(150, 150, 200),
            };
            Some((ch, color))
        }
        TimeOfDay::Day => {
            let seed = x.wrapping_mul(13).wrapping_add(y.wrapping_mul(7));
            if seed % 41 != 0 {
                return None;
            }
            let toward_horizon = y as f32 / horizon.max(1) as f32;
            let color = hsl_to_rgb(200.0, 0.4, 0.3 + toward_horizon.clamp(0.0, 1.0) * 0.2);
            Some(('·', color))
        }
    }
}

/// Ground grid glyph at a cell below the horizon.
pub fn ground_cell(x: u16, y: u16, horizon: u16, ground: Rgb) -> Option<(char, Rgb)> {
    if y < horizon {
        return None;
    }
    let x = x as usize;
    let row = (y - horizon) as usize;
    let line = ground.mix(Rgb::new(0x55, 0x55, 0x66), 0.5);
    match (x % GRID_COLS == 0, row % GRID_ROWS == 0) {
        (true, true) => Some((GRID_CHARS[1], line)),
        (false, true) | (true, false) => Some((GRID_CHARS[0], line)),
        (false, false) => None,
    }
}
