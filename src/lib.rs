//! Light/dark theme and accent color state management.
//!
//! `duotone` decides which visual theme a UI should show (a boot-time
//! override, a stored preference, or the operating-system setting, in that
//! precedence order) and keeps an injected [`Surface`] in sync with the
//! result. A sibling [`AccentController`] manages a user-chosen accent
//! color and its derived black/white contrast. Storage is pluggable and
//! best-effort; when it fails, everything degrades to session-only
//! behavior.
//!
//! Both controllers are single-threaded and reactive: state lives in cells,
//! methods take `&self`, and hosts wire OS-preference and external-store
//! signals to the `system_changed` / `storage_changed` handlers. Those
//! handlers never write back to storage, so two instances sharing a store
//! cannot feed each other's writes.
//!
//! # Example
//!
//! ```rust
//! use duotone::{ColorMode, MemoryStorage, NullSurface, Storage, ThemeController};
//! use std::rc::Rc;
//!
//! let storage = Rc::new(MemoryStorage::new());
//! let controller = ThemeController::new(Rc::clone(&storage), NullSurface);
//! controller.init();
//!
//! controller.set(ColorMode::Dark);
//! assert_eq!(controller.effective(), ColorMode::Dark);
//! assert_eq!(storage.get("theme").as_deref(), Some("dark"));
//!
//! controller.toggle();
//! assert_eq!(controller.effective(), ColorMode::Light);
//! ```

mod accent;
mod error;
mod event;
mod nav;
mod storage;
mod surface;
mod theme;

pub use accent::{
    AccentController, Contrast, HexColor, CONTRAST_THRESHOLD, DEFAULT_ACCENT, DEFAULT_SWATCHES,
};
pub use error::ParseError;
pub use event::{AccentListener, ThemeListener};
pub use nav::NavToggle;
pub use storage::{FileStorage, MemoryStorage, Storage, ACCENT_KEY, THEME_KEY};
pub use surface::{NullSurface, RecordingSurface, Surface, SurfaceCall};
pub use theme::{set_system_detector, system_mode, theme_from_url, ColorMode, ThemeController};
