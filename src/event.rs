//! Change notifications.
//!
//! In a DOM host these would be `themechange` / `accentchange` custom
//! events; here the same notifications are typed callbacks registered on a
//! controller. Everything is single-threaded and synchronous, so listeners
//! are plain boxed `FnMut` values rather than `Send + Sync` handlers.
//! Listeners run while the controller's registry is borrowed and must not
//! subscribe or re-enter the notifying controller.

use crate::accent::HexColor;
use crate::theme::ColorMode;

/// Listener invoked after every theme apply with the new effective mode.
pub type ThemeListener = Box<dyn FnMut(ColorMode)>;

/// Listener invoked after every accent apply with the new color.
pub type AccentListener = Box<dyn FnMut(HexColor)>;
