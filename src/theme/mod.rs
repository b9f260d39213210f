//! Theme preference resolution and application.
//!
//! This module provides:
//!
//! - [`ColorMode`]: the effective light/dark value
//! - [`ThemeController`]: source precedence, persistence, surface reflection
//! - [`theme_from_url`]: boot override extraction
//! - [`set_system_detector`]: OS detection override for tests and embedders

mod controller;
mod detect;
mod mode;

pub use controller::{theme_from_url, ThemeController};
pub use detect::{set_system_detector, system_mode};
pub use mode::ColorMode;
