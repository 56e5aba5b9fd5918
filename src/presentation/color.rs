//! Colors and the gradient palettes used by the styling helpers

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error when a hex color string is malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color: \"{input}\". Expected rrggbb or rrggbbaa, optionally prefixed with '#'")]
pub struct ColorParseError {
    pub input: String,
}

/// Straight-alpha RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Palette of the static gradient foreground
pub const ENCHANT_COLORS: [Color; 4] = [
    Color::rgb(0x42, 0x85, 0xf4),
    Color::rgb(0x9b, 0x72, 0xcb),
    Color::rgb(0xd9, 0x65, 0x70),
    Color::rgb(0xd9, 0x65, 0x70),
];

/// Palette of the animated gradient overlay
pub const MOVING_ENCHANT_COLORS: [Color; 2] =
    [Color::rgb(0x42, 0x85, 0xf4), Color::rgb(0x9b, 0x72, 0xcb)];

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const CLEAR: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `rrggbb` or `rrggbbaa`, with or without a leading `#`
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let err = || ColorParseError {
            input: hex.to_string(),
        };

        let digits = hex.trim().trim_start_matches('#');
        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(err());
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());

        let a = if digits.len() == 8 { channel(6)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}
