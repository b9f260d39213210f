//! Accent application and picker state.

use std::cell::{Cell, RefCell};

use tracing::debug;

use super::color::HexColor;
use crate::error::ParseError;
use crate::event::AccentListener;
use crate::storage::{Storage, ACCENT_KEY};
use crate::surface::Surface;

/// The accent applied when no choice is stored: `#4b72ff`.
pub const DEFAULT_ACCENT: HexColor = HexColor::new(0x4b, 0x72, 0xff);

/// Built-in swatch palette. The first entry is [`DEFAULT_ACCENT`].
pub const DEFAULT_SWATCHES: [HexColor; 6] = [
    DEFAULT_ACCENT,
    HexColor::new(0x7c, 0x5c, 0xff),
    HexColor::new(0x2b, 0xb1, 0x9c),
    HexColor::new(0x3f, 0x9d, 0x4f),
    HexColor::new(0xd9, 0x7a, 0x16),
    HexColor::new(0xd6, 0x45, 0x5d),
];

/// Manages the user-chosen accent color the way [`ThemeController`] manages
/// the theme: validate, reflect onto the surface, persist on explicit
/// action, never re-persist on external signals.
///
/// Also owns the swatch picker's disclosure state, since opening, choosing,
/// and click-away closing all funnel through accent application.
///
/// [`ThemeController`]: crate::ThemeController
pub struct AccentController<S, V> {
    storage: S,
    surface: V,
    swatches: Vec<HexColor>,
    current: Cell<Option<HexColor>>,
    picker_open: Cell<bool>,
    listeners: RefCell<Vec<AccentListener>>,
}

impl<S: Storage, V: Surface> AccentController<S, V> {
    pub fn new(storage: S, surface: V) -> Self {
        Self {
            storage,
            surface,
            swatches: DEFAULT_SWATCHES.to_vec(),
            current: Cell::new(None),
            picker_open: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Replaces the built-in swatch palette.
    pub fn with_swatches(mut self, swatches: Vec<HexColor>) -> Self {
        self.swatches = swatches;
        self
    }

    pub fn swatches(&self) -> &[HexColor] {
        &self.swatches
    }

    /// Applies a stored accent, if any, without re-persisting it.
    pub fn init(&self) {
        if let Some(color) = self
            .storage
            .get(ACCENT_KEY)
            .and_then(|v| v.parse::<HexColor>().ok())
        {
            self.apply(color, false);
        }
    }

    /// Validates `input` and applies it on success.
    ///
    /// Invalid input returns the parse error and changes nothing.
    pub fn apply_str(&self, input: &str, persist: bool) -> Result<HexColor, ParseError> {
        let color: HexColor = input.parse()?;
        self.apply(color, persist);
        Ok(color)
    }

    /// Reflects `color` and its contrast onto the surface, optionally
    /// persists it, syncs swatch selection, and notifies listeners.
    pub fn apply(&self, color: HexColor, persist: bool) {
        debug!(accent = %color, persist, "applying accent");
        self.surface.set_accent(color, color.contrast());
        if persist {
            self.storage.set(ACCENT_KEY, &color.to_string());
        }
        self.surface.set_swatch_selection(Some(color));
        self.current.set(Some(color));
        self.emit(color);
    }

    /// Explicit user choice: validates, applies, persists.
    pub fn set(&self, input: &str) -> Result<HexColor, ParseError> {
        self.apply_str(input, true)
    }

    /// The currently applied accent, if any.
    pub fn current(&self) -> Option<HexColor> {
        self.current.get()
    }

    /// Forgets the stored accent and falls back to [`DEFAULT_ACCENT`]
    /// without persisting the fallback.
    pub fn clear(&self) {
        self.storage.remove(ACCENT_KEY);
        self.apply(DEFAULT_ACCENT, false);
    }

    /// External store change handler (another instance wrote the key).
    ///
    /// Applies a valid new value without re-persisting it; foreign keys
    /// and invalid values are ignored.
    pub fn storage_changed(&self, key: &str, value: Option<&str>) {
        if key != ACCENT_KEY {
            return;
        }
        if let Some(color) = value.and_then(|v| v.parse::<HexColor>().ok()) {
            self.apply(color, false);
        }
    }

    /// Flips the picker disclosure and reflects it onto the surface.
    pub fn toggle_picker(&self) {
        let open = !self.picker_open.get();
        self.picker_open.set(open);
        self.surface.set_picker_expanded(open);
    }

    /// Closes the picker. Also the click-away path, so closing an already
    /// closed picker is fine.
    pub fn close_picker(&self) {
        self.picker_open.set(false);
        self.surface.set_picker_expanded(false);
    }

    pub fn is_picker_open(&self) -> bool {
        self.picker_open.get()
    }

    /// Swatch click: applies with persistence, then closes the picker.
    ///
    /// The picker closes even when the input was invalid, as a click was
    /// made either way.
    pub fn choose(&self, input: &str) -> Result<HexColor, ParseError> {
        let result = self.apply_str(input, true);
        self.close_picker();
        result
    }

    /// Registers a listener for accent changes.
    pub fn subscribe(&self, listener: impl FnMut(HexColor) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn emit(&self, color: HexColor) {
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(color);
        }
    }
}
