//! Navigation disclosure toggle.

use std::cell::Cell;

use crate::surface::Surface;

/// Expanded/collapsed state for a navigation menu.
///
/// Pure UI glue: flips a flag and reflects it onto the surface. Nothing is
/// persisted and no notifications are emitted.
pub struct NavToggle<V> {
    surface: V,
    expanded: Cell<bool>,
}

impl<V: Surface> NavToggle<V> {
    /// Starts collapsed.
    pub fn new(surface: V) -> Self {
        Self {
            surface,
            expanded: Cell::new(false),
        }
    }

    /// Flips the state, reflects it, and returns the new state.
    pub fn toggle(&self) -> bool {
        let expanded = !self.expanded.get();
        self.expanded.set(expanded);
        self.surface.set_nav_expanded(expanded);
        expanded
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }
}
