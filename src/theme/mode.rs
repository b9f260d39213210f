//! The effective light/dark value.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The resolved color mode actually applied to a surface.
///
/// This is always a concrete value; "follow the system" is expressed by the
/// *absence* of a stored preference, never by a third variant. String forms
/// are `light` and `dark` and round-trip through [`FromStr`] and
/// [`fmt::Display`], which is also what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// The persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

impl Not for ColorMode {
    type Output = ColorMode;

    /// The opposite mode; `!Light == Dark`.
    fn not(self) -> ColorMode {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ParseError;

    /// Parses the exact stored forms. Anything else is rejected so that a
    /// corrupted stored value falls back to the system preference instead
    /// of being half-honored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            other => Err(ParseError::InvalidMode(other.to_string())),
        }
    }
}
