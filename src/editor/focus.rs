//! Process-wide focused-window slot.
//!
//! The windowing layer delivers pointer callbacks through one dispatch
//! point; which editor window they should mutate is decided by whichever
//! window last gained input focus. That relation is held here as
//! explicit state rather than a bare global: set on focus-gained,
//! invalidated when the referenced window is destroyed, and checked on
//! every dereference.

/// Routes input to the most recently focused window.
#[derive(Debug, Clone, Default)]
pub struct FocusRouter<K> {
    focused: Option<K>,
}

impl<K: Copy + PartialEq> FocusRouter<K> {
    /// Create a router with no focused window.
    #[must_use]
    pub fn new() -> Self {
        Self { focused: None }
    }

    /// Record that `id` gained input focus.
    pub fn focus(&mut self, id: K) {
        self.focused = Some(id);
    }

    /// Drop the reference if it points at `id` (window destroyed).
    /// References to other windows are left untouched.
    pub fn invalidate(&mut self, id: K) {
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// The currently focused window, if any. Callers must treat `None`
    /// as "drop the event", never as an error.
    #[must_use]
    pub fn focused(&self) -> Option<K> {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rustc_hash::FxHashMap;

    use super::*;
    use crate::camera::ViewportState;
    use crate::options::ControlOptions;

    #[test]
    fn latest_focus_wins() {
        let mut router = FocusRouter::new();
        router.focus(1u32);
        router.focus(2u32);
        assert_eq!(router.focused(), Some(2));
    }

    #[test]
    fn invalidate_only_clears_the_matching_window() {
        let mut router = FocusRouter::new();
        router.focus(1u32);
        router.invalidate(2);
        assert_eq!(router.focused(), Some(1));
        router.invalidate(1);
        assert_eq!(router.focused(), None);
    }

    #[test]
    fn pointer_events_mutate_only_the_focused_viewport() {
        // Two windows open; focus B, pan, and A must be untouched.
        let controls = ControlOptions::default();
        let mut viewports: FxHashMap<u32, ViewportState> =
            FxHashMap::default();
        let _ = viewports.insert(1, ViewportState::new(800, 600, &controls));
        let _ = viewports.insert(2, ViewportState::new(800, 600, &controls));

        let mut router = FocusRouter::new();
        router.focus(1u32);
        router.focus(2u32);

        if let Some(id) = router.focused() {
            if let Some(vp) = viewports.get_mut(&id) {
                vp.pan(Vec2::new(100.0, 0.0));
            }
        }

        assert_eq!(viewports[&1].grid_offset().x, 0.0);
        assert!(viewports[&2].grid_offset().x < 0.0);
    }

    #[test]
    fn unset_focus_drops_events() {
        let router: FocusRouter<u32> = FocusRouter::new();
        assert_eq!(router.focused(), None);
    }
}
