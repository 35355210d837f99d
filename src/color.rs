//! Packing, expansion and formatting of 24-bit colors.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::settings;

/// A 24-bit RGB color packed as `0xRRGGBB`.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct Color(u32);

impl Color {
    /// Packs three 8-bit channels as `(r << 16) | (g << 8) | b`.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Wraps a packed value, rejecting anything wider than 24 bits.
    pub const fn from_u32(value: u32) -> Option<Self> {
        if value > 0xff_ffff {
            None
        } else {
            Some(Color(value))
        }
    }

    /// Packed `0xRRGGBB` value.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Splits the color into its red, green and blue channels.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// `#rrggbb`
    pub fn to_hex_string(self) -> String {
        self.to_string()
    }

    /// `rgb(r,g,b)`
    pub fn to_rgb_string(self) -> String {
        rgb_to_string(self.to_rgb())
    }
}

/// Formats a channel triple as `rgb(r,g,b)`.
pub fn rgb_to_string((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({},{},{})", r, g, b)
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::from_rgb(r, g, b)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> u32 {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (r, g, b) = self.to_rgb();
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses `#rgb` or `#rrggbb`, the leading `#` being optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_owned());
        let digits = s.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let literal = match digits.len() {
            3 => ColorLiteral::Short(u16::from_str_radix(digits, 16).map_err(|_| invalid())?),
            6 => ColorLiteral::Full(Color(u32::from_str_radix(digits, 16).map_err(|_| invalid())?)),
            _ => return Err(invalid()),
        };

        Ok(literal.expand())
    }
}

/// A color as written in a color table: either 12-bit shorthand or a full 24-bit value.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum ColorLiteral {
    /// `0xRGB`, one nibble per channel. Bits above the low 12 are ignored.
    Short(u16),
    /// Already expanded
    Full(Color),
}

impl ColorLiteral {
    /// Replicates each nibble of a shorthand literal into a full byte (`0xc` becomes `0xcc`).
    ///
    /// Full literals pass through unchanged, so expanding an expanded color is a no-op.
    pub const fn expand(self) -> Color {
        match self {
            ColorLiteral::Short(short) => {
                let r = ((short >> 8) & 0xf) as u8;
                let g = ((short >> 4) & 0xf) as u8;
                let b = (short & 0xf) as u8;
                Color::from_rgb(r * 0x11, g * 0x11, b * 0x11)
            }
            ColorLiteral::Full(color) => color,
        }
    }
}

impl From<Color> for ColorLiteral {
    fn from(color: Color) -> Self {
        ColorLiteral::Full(color)
    }
}

/// Whether a sampled RGBA pixel is fully transparent and must not be counted.
pub fn is_transparent(rgba: &[u8; 4]) -> bool {
    rgba[3] == settings::TRANSPARENT_ALPHA
}
