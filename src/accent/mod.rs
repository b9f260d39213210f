//! Accent color state.
//!
//! This module provides:
//!
//! - [`HexColor`]: normalized accent color with a derived [`Contrast`]
//! - [`AccentController`]: validation, persistence, swatch picker state

mod color;
mod controller;

pub use color::{Contrast, HexColor, CONTRAST_THRESHOLD};
pub use controller::{AccentController, DEFAULT_ACCENT, DEFAULT_SWATCHES};
