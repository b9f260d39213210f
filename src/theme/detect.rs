//! Operating-system color mode detection.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::mode::ColorMode;

type Detector = fn() -> ColorMode;

static SYSTEM_DETECTOR: Lazy<Mutex<Detector>> = Lazy::new(|| Mutex::new(os_detector));

/// Overrides the detector used to determine the system color mode.
///
/// The detector is process-global. This is useful for testing or when the
/// embedder has a better signal than OS settings (e.g. a window manager
/// hint); tests that swap it must be serialized.
pub fn set_system_detector(detector: Detector) {
    let mut guard = SYSTEM_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Returns the current system color mode.
///
/// This is the lowest-precedence theme source: it only decides the
/// effective theme when no override and no stored preference exist.
pub fn system_mode() -> ColorMode {
    let detector = SYSTEM_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_detector() -> ColorMode {
    match detect_os_mode() {
        OsMode::Dark => ColorMode::Dark,
        OsMode::Light => ColorMode::Light,
    }
}
