//! 24-bit fill color

use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in BMP on-disk order
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Rejected color string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color {input:?} (expected \"r,g,b\" with 0-255 channels or \"#rrggbb\")")]
pub struct ParseRgbError {
    input: String,
}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    /// Accepts `"40,40,40"` or `"#282828"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseRgbError {
            input: s.to_string(),
        };
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Self::new(channel(0)?, channel(2)?, channel(4)?));
        }

        let mut parts = trimmed.split(',').map(|p| p.trim().parse::<u8>());
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(r)), Some(Ok(g)), Some(Ok(b)), None) => Ok(Self::new(r, g, b)),
            _ => Err(err()),
        }
    }
}
