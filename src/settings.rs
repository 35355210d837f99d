//! Defaults and fixed tables.

use crate::color::Color;

/// Sampling stride used when none is given.
pub const DEFAULT_PRECISION: u32 = 10;

/// Number of colors returned when none is requested.
pub const DEFAULT_PALETTE_LENGTH: usize = 5;

/// Channel nibbles of the 6x6x6 web-safe grid (`0x3` expands to `0x33`).
pub const GRID_STEPS: [u16; 6] = [0x0, 0x3, 0x6, 0x9, 0xc, 0xf];

/// Named colors appended after the web-safe grid, in table order.
pub const SUPPLEMENTARY_COLORS: [Color; 7] = [
    Color::from_rgb(0xea, 0x4c, 0x88), // pink
    Color::from_rgb(0x77, 0xcc, 0x33), // lime
    Color::from_rgb(0xe7, 0xd8, 0xb1), // sand
    Color::from_rgb(0xfd, 0xad, 0xc7), // rose
    Color::from_rgb(0x42, 0x41, 0x53), // slate
    Color::from_rgb(0xab, 0xbc, 0xda), // powder blue
    Color::from_rgb(0xf5, 0xdd, 0x01), // yellow
];

/// Alpha value of a fully transparent RGBA sample.
pub const TRANSPARENT_ALPHA: u8 = 0;
