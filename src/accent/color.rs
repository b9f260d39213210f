//! Hex accent colors and their derived contrast color.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Luminance value (0..=255) at or above which black text stays readable
/// on the accent.
pub const CONTRAST_THRESHOLD: u16 = 160;

/// A normalized accent color.
///
/// Accepts `#rgb` and `#rrggbb` input (case-insensitive); short form
/// digits are doubled, so `#abc` and `#aabbcc` are the same color.
/// Displays (and persists) as lowercase 6-digit hex.
///
/// # Example
///
/// ```rust
/// use duotone::HexColor;
///
/// let color: HexColor = "#ABC".parse().unwrap();
/// assert_eq!(color.to_string(), "#aabbcc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// YIQ-weighted luminance in 0..=255.
    pub fn luminance(&self) -> u16 {
        let weighted =
            u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114;
        (weighted / 1000) as u16
    }

    /// Which of black/white stays readable on this color.
    pub fn contrast(&self) -> Contrast {
        if self.luminance() >= CONTRAST_THRESHOLD {
            Contrast::Black
        } else {
            Contrast::White
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidHex(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        // from_str_radix tolerates a leading '+', the color grammar does not
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        match digits.len() {
            6 => {
                let channel = |range| {
                    u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            3 => {
                let mut channels = digits.chars().map(|c| {
                    // #abc means #aabbcc: each digit doubled
                    c.to_digit(16).map(|d| (d * 17) as u8).ok_or_else(invalid)
                });
                let mut next = || channels.next().unwrap_or_else(|| Err(invalid()));
                Ok(Self::new(next()?, next()?, next()?))
            }
            _ => Err(invalid()),
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> String {
        color.to_string()
    }
}

impl TryFrom<String> for HexColor {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The readable-on-accent foreground, black or white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    Black,
    White,
}

impl Contrast {
    /// Short CSS hex form.
    pub fn hex(&self) -> &'static str {
        match self {
            Contrast::Black => "#000",
            Contrast::White => "#fff",
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}
