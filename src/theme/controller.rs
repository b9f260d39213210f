//! Theme resolution and application.

use std::cell::{Cell, RefCell};

use tracing::debug;
use url::Url;

use super::detect::system_mode;
use super::mode::ColorMode;
use crate::event::ThemeListener;
use crate::storage::{Storage, THEME_KEY};
use crate::surface::Surface;

/// Resolves which theme a surface should show and keeps it there.
///
/// Three sources feed the decision, in precedence order: a boot-time
/// override (say, a `?theme=` URL parameter), the stored preference,
/// and the OS setting. The controller reflects the winner onto the injected
/// [`Surface`], persists on explicit user action only, and exposes handlers
/// for the two external signals: OS preference changes, and changes made to
/// the same store by another instance. Neither handler ever writes back, so
/// instances cannot amplify each other's writes.
///
/// Methods take `&self`; state lives in cells so host-wired callbacks can
/// share the controller freely on one thread.
///
/// # Example
///
/// ```rust
/// use duotone::{ColorMode, MemoryStorage, NullSurface, ThemeController};
///
/// let controller = ThemeController::new(MemoryStorage::new(), NullSurface);
/// controller.init();
/// controller.set(ColorMode::Dark);
/// assert_eq!(controller.effective(), ColorMode::Dark);
/// controller.toggle();
/// assert_eq!(controller.effective(), ColorMode::Light);
/// ```
pub struct ThemeController<S, V> {
    storage: S,
    surface: V,
    boot_override: Option<ColorMode>,
    current: Cell<Option<ColorMode>>,
    listeners: RefCell<Vec<ThemeListener>>,
}

impl<S: Storage, V: Surface> ThemeController<S, V> {
    pub fn new(storage: S, surface: V) -> Self {
        Self {
            storage,
            surface,
            boot_override: None,
            current: Cell::new(None),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Sets the boot-time override, highest-precedence theme source.
    ///
    /// [`init`](Self::init) honors *and persists* it, giving deep links
    /// one-time set-and-remember semantics.
    pub fn with_override(mut self, mode: Option<ColorMode>) -> Self {
        self.boot_override = mode;
        self
    }

    /// The stored preference, if present and valid.
    pub fn stored(&self) -> Option<ColorMode> {
        self.storage.get(THEME_KEY).and_then(|v| v.parse().ok())
    }

    /// Resolves the effective theme from override, store, and OS, in that
    /// order. No side effects.
    pub fn detect(&self) -> ColorMode {
        self.boot_override
            .or_else(|| self.stored())
            .unwrap_or_else(system_mode)
    }

    /// Applies the boot state: an override is applied and persisted; with
    /// none, the detected theme is followed without overwriting the store.
    pub fn init(&self) {
        match self.boot_override {
            Some(mode) => self.apply(mode, true),
            None => self.apply(self.detect(), false),
        }
    }

    /// Reflects `mode` onto the surface, optionally persists it, and
    /// notifies listeners.
    pub fn apply(&self, mode: ColorMode, persist: bool) {
        debug!(mode = %mode, persist, "applying theme");
        self.surface.set_theme(mode);
        self.surface.set_color_scheme(mode);
        if persist {
            self.storage.set(THEME_KEY, mode.as_str());
        }
        self.surface.set_toggle_state(mode);
        self.current.set(Some(mode));
        self.emit(mode);
    }

    /// Explicit user choice: applies and persists.
    pub fn set(&self, mode: ColorMode) {
        self.apply(mode, true);
    }

    /// The currently applied mode, or the detected one before any apply.
    pub fn effective(&self) -> ColorMode {
        self.current.get().unwrap_or_else(|| self.detect())
    }

    /// Flips the effective theme and persists the result.
    pub fn toggle(&self) {
        self.apply(!self.effective(), true);
    }

    /// Forgets the stored preference and goes back to following the OS.
    pub fn clear_preference(&self) {
        self.storage.remove(THEME_KEY);
        self.apply(system_mode(), false);
    }

    /// OS preference change handler.
    ///
    /// Only reflected while the user is following the system; an explicit
    /// stored preference wins and the signal is dropped.
    pub fn system_changed(&self, mode: ColorMode) {
        if self.stored().is_none() {
            self.apply(mode, false);
        }
    }

    /// External store change handler (another instance wrote the key).
    ///
    /// Applies a valid new value without re-persisting it; foreign keys
    /// and invalid values are ignored.
    pub fn storage_changed(&self, key: &str, value: Option<&str>) {
        if key != THEME_KEY {
            return;
        }
        if let Some(mode) = value.and_then(|v| v.parse::<ColorMode>().ok()) {
            self.apply(mode, false);
        }
    }

    /// Registers a listener for theme changes.
    pub fn subscribe(&self, listener: impl FnMut(ColorMode) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    fn emit(&self, mode: ColorMode) {
        for listener in self.listeners.borrow_mut().iter_mut() {
            listener(mode);
        }
    }
}

/// Extracts a theme override from a URL's `theme` query parameter.
///
/// Only exact valid values count; anything else means no override.
///
/// # Example
///
/// ```rust
/// use duotone::{theme_from_url, ColorMode};
/// use url::Url;
///
/// let url = Url::parse("https://example.org/docs?theme=dark").unwrap();
/// assert_eq!(theme_from_url(&url), Some(ColorMode::Dark));
///
/// let url = Url::parse("https://example.org/docs?theme=sepia").unwrap();
/// assert_eq!(theme_from_url(&url), None);
/// ```
pub fn theme_from_url(url: &Url) -> Option<ColorMode> {
    url.query_pairs()
        .find(|(key, _)| key == "theme")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::surface::{RecordingSurface, SurfaceCall};
    use crate::theme::detect::set_system_detector;
    use serial_test::serial;
    use std::rc::Rc;

    fn controller(
        storage: &Rc<MemoryStorage>,
        surface: &Rc<RecordingSurface>,
    ) -> ThemeController<Rc<MemoryStorage>, Rc<RecordingSurface>> {
        ThemeController::new(Rc::clone(storage), Rc::clone(surface))
    }

    #[test]
    #[serial]
    fn test_stored_wins_over_system() {
        set_system_detector(|| ColorMode::Dark);
        let storage = Rc::new(MemoryStorage::new());
        storage.set(THEME_KEY, "light");
        let surface = Rc::new(RecordingSurface::new());

        assert_eq!(controller(&storage, &surface).detect(), ColorMode::Light);
    }

    #[test]
    #[serial]
    fn test_override_wins_over_stored() {
        set_system_detector(|| ColorMode::Light);
        let storage = Rc::new(MemoryStorage::new());
        storage.set(THEME_KEY, "light");
        let surface = Rc::new(RecordingSurface::new());

        let controller =
            controller(&storage, &surface).with_override(Some(ColorMode::Dark));
        assert_eq!(controller.detect(), ColorMode::Dark);
    }

    #[test]
    #[serial]
    fn test_init_persists_override() {
        set_system_detector(|| ColorMode::Light);
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        let controller =
            controller(&storage, &surface).with_override(Some(ColorMode::Dark));
        controller.init();

        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(surface.last_theme(), Some(ColorMode::Dark));
    }

    #[test]
    #[serial]
    fn test_init_without_override_does_not_write() {
        set_system_detector(|| ColorMode::Dark);
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        controller(&storage, &surface).init();

        assert_eq!(storage.get(THEME_KEY), None);
        assert_eq!(surface.last_theme(), Some(ColorMode::Dark));
    }

    #[test]
    fn test_set_persists() {
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        controller(&storage, &surface).set(ColorMode::Dark);
        assert_eq!(storage.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    #[serial]
    fn test_toggle_twice_round_trips() {
        set_system_detector(|| ColorMode::Light);
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        let controller = controller(&storage, &surface);
        controller.init();
        let before = controller.effective();
        controller.toggle();
        assert_eq!(controller.effective(), !before);
        controller.toggle();
        assert_eq!(controller.effective(), before);
    }

    #[test]
    #[serial]
    fn test_system_change_ignored_with_stored_preference() {
        set_system_detector(|| ColorMode::Light);
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        let controller = controller(&storage, &surface);
        controller.set(ColorMode::Light);
        surface.clear();

        controller.system_changed(ColorMode::Dark);
        assert!(surface.calls().is_empty());
        assert_eq!(controller.effective(), ColorMode::Light);
    }

    #[test]
    fn test_system_change_followed_without_preference() {
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        let controller = controller(&storage, &surface);
        controller.system_changed(ColorMode::Dark);

        assert_eq!(surface.last_theme(), Some(ColorMode::Dark));
        // following the system is not an explicit choice
        assert_eq!(storage.get(THEME_KEY), None);
    }

    #[test]
    fn test_storage_change_applies_without_writing_back() {
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        let controller = controller(&storage, &surface);
        controller.storage_changed(THEME_KEY, Some("dark"));

        assert_eq!(surface.last_theme(), Some(ColorMode::Dark));
        assert_eq!(storage.get(THEME_KEY), None);
    }

    #[test]
    fn test_storage_change_ignores_foreign_and_invalid() {
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        let controller = controller(&storage, &surface);
        controller.storage_changed("accent", Some("dark"));
        controller.storage_changed(THEME_KEY, Some("sepia"));
        controller.storage_changed(THEME_KEY, None);

        assert!(surface.calls().is_empty());
    }

    #[test]
    #[serial]
    fn test_clear_preference_follows_system() {
        set_system_detector(|| ColorMode::Light);
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        let controller = controller(&storage, &surface);
        controller.set(ColorMode::Dark);
        controller.clear_preference();

        assert_eq!(storage.get(THEME_KEY), None);
        assert_eq!(controller.effective(), ColorMode::Light);
    }

    #[test]
    fn test_apply_reflects_every_surface_concern() {
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());

        controller(&storage, &surface).apply(ColorMode::Dark, false);

        assert_eq!(
            surface.calls(),
            vec![
                SurfaceCall::Theme(ColorMode::Dark),
                SurfaceCall::ColorScheme(ColorMode::Dark),
                SurfaceCall::ToggleState(ColorMode::Dark),
            ]
        );
    }

    #[test]
    fn test_listeners_observe_applies() {
        let storage = Rc::new(MemoryStorage::new());
        let surface = Rc::new(RecordingSurface::new());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let controller = controller(&storage, &surface);
        let sink = Rc::clone(&seen);
        controller.subscribe(move |mode| sink.borrow_mut().push(mode));

        controller.set(ColorMode::Dark);
        controller.set(ColorMode::Light);

        assert_eq!(*seen.borrow(), vec![ColorMode::Dark, ColorMode::Light]);
    }

    #[test]
    fn test_theme_from_url() {
        let url = Url::parse("https://example.org/?x=1&theme=light").unwrap();
        assert_eq!(theme_from_url(&url), Some(ColorMode::Light));

        let url = Url::parse("https://example.org/?theme=blue").unwrap();
        assert_eq!(theme_from_url(&url), None);

        let url = Url::parse("https://example.org/").unwrap();
        assert_eq!(theme_from_url(&url), None);
    }
}
