//! The presentation surface controllers reflect state onto.

use std::cell::RefCell;
use std::rc::Rc;

use crate::accent::{Contrast, HexColor};
use crate::theme::ColorMode;

/// Where resolved theme and accent state lands.
///
/// In a web host this is the document: a `data-theme`
/// attribute on the root, a pair of theme stylesheets of which exactly one
/// is enabled, a UA `color-scheme` hint, `aria-pressed`/label state on
/// toggle buttons, `--accent`/`--accent-contrast` custom properties, and
/// `aria-expanded` on disclosures. Each concern is one method so hosts
/// implement only what their page has; every method defaults to a no-op,
/// which is how missing targets degrade gracefully.
pub trait Surface {
    /// Root theme attribute plus dual stylesheet activation.
    fn set_theme(&self, mode: ColorMode) {
        let _ = mode;
    }

    /// UA hint for form controls and scrollbars.
    fn set_color_scheme(&self, mode: ColorMode) {
        let _ = mode;
    }

    /// Pressed/label state of theme toggle buttons.
    fn set_toggle_state(&self, mode: ColorMode) {
        let _ = mode;
    }

    /// Accent custom property and its contrast counterpart.
    fn set_accent(&self, color: HexColor, contrast: Contrast) {
        let _ = (color, contrast);
    }

    /// Which swatch, if any, should show as selected.
    fn set_swatch_selection(&self, color: Option<HexColor>) {
        let _ = color;
    }

    /// Accent picker disclosure state.
    fn set_picker_expanded(&self, expanded: bool) {
        let _ = expanded;
    }

    /// Navigation disclosure state.
    fn set_nav_expanded(&self, expanded: bool) {
        let _ = expanded;
    }
}

impl<V: Surface + ?Sized> Surface for Rc<V> {
    fn set_theme(&self, mode: ColorMode) {
        (**self).set_theme(mode)
    }

    fn set_color_scheme(&self, mode: ColorMode) {
        (**self).set_color_scheme(mode)
    }

    fn set_toggle_state(&self, mode: ColorMode) {
        (**self).set_toggle_state(mode)
    }

    fn set_accent(&self, color: HexColor, contrast: Contrast) {
        (**self).set_accent(color, contrast)
    }

    fn set_swatch_selection(&self, color: Option<HexColor>) {
        (**self).set_swatch_selection(color)
    }

    fn set_picker_expanded(&self, expanded: bool) {
        (**self).set_picker_expanded(expanded)
    }

    fn set_nav_expanded(&self, expanded: bool) {
        (**self).set_nav_expanded(expanded)
    }
}

/// A surface that ignores everything. For headless use such as the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Theme(ColorMode),
    ColorScheme(ColorMode),
    ToggleState(ColorMode),
    Accent(HexColor, Contrast),
    SwatchSelection(Option<HexColor>),
    PickerExpanded(bool),
    NavExpanded(bool),
}

/// A surface that records every call, in order.
///
/// This is the testing seam promised by the design: controller behavior is
/// observable without a live document. Share it with a controller through
/// `Rc` and inspect [`calls`](RecordingSurface::calls) afterwards.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: RefCell<Vec<SurfaceCall>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, oldest first.
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    /// The most recently applied theme, if any call set one.
    pub fn last_theme(&self) -> Option<ColorMode> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            SurfaceCall::Theme(mode) => Some(*mode),
            _ => None,
        })
    }

    /// The most recently applied accent, if any call set one.
    pub fn last_accent(&self) -> Option<HexColor> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            SurfaceCall::Accent(color, _) => Some(*color),
            _ => None,
        })
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl Surface for RecordingSurface {
    fn set_theme(&self, mode: ColorMode) {
        self.calls.borrow_mut().push(SurfaceCall::Theme(mode));
    }

    fn set_color_scheme(&self, mode: ColorMode) {
        self.calls.borrow_mut().push(SurfaceCall::ColorScheme(mode));
    }

    fn set_toggle_state(&self, mode: ColorMode) {
        self.calls.borrow_mut().push(SurfaceCall::ToggleState(mode));
    }

    fn set_accent(&self, color: HexColor, contrast: Contrast) {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::Accent(color, contrast));
    }

    fn set_swatch_selection(&self, color: Option<HexColor>) {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::SwatchSelection(color));
    }

    fn set_picker_expanded(&self, expanded: bool) {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::PickerExpanded(expanded));
    }

    fn set_nav_expanded(&self, expanded: bool) {
        self.calls
            .borrow_mut()
            .push(SurfaceCall::NavExpanded(expanded));
    }
}
