//! The drag/zoom state machine between raw pointer events and the
//! viewport.
//!
//! Two states: idle and dragging. Pressing the pan button engages a drag
//! session; the first move after engagement only seeds the reference
//! position (applying it as a delta would make the view jump by the full
//! distance from wherever the cursor last was). Every later move pans by
//! the delta from the previous sample. Releasing the button flushes with
//! a zero pan and re-arms the first-sample suppression for the next
//! session.

use glam::Vec2;

use super::event::{InputEvent, PointerButton};
use crate::camera::{CameraRig, ViewportState};
use crate::options::{ControlOptions, ProjectionKind};

/// Transient drag state, live between pan-button press and release.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    active: bool,
    last_cursor: Vec2,
    first_sample: bool,
}

impl DragSession {
    const fn idle() -> Self {
        Self {
            active: false,
            last_cursor: Vec2::ZERO,
            first_sample: true,
        }
    }
}

/// Converts [`InputEvent`]s into viewport (or fallback-rig) mutations.
///
/// Owns the drag session and the per-frame UI capture flag. The
/// translator is the only writer of the viewport's zoom and grid offset.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    drag: DragSession,
    pan_button: PointerButton,
    pan_enabled: bool,
    projection: ProjectionKind,
    ui_captured: bool,
}

impl InputTranslator {
    /// Create a translator from the control options and projection kind.
    #[must_use]
    pub fn new(controls: &ControlOptions, projection: ProjectionKind) -> Self {
        Self {
            drag: DragSession::idle(),
            pan_button: controls.pan_button,
            pan_enabled: controls.pan_enabled,
            projection,
            ui_captured: false,
        }
    }

    /// Whether a drag session is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    /// Record the overlay's pointer-capture report for this frame.
    ///
    /// Called once per frame before events are applied; while captured,
    /// scroll and drag engagement are withheld from the viewport.
    pub fn begin_frame(&mut self, ui_captured: bool) {
        self.ui_captured = ui_captured;
    }

    /// Apply one event. Returns `true` if viewport or rig state changed.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
        viewport: &mut ViewportState,
        rig: &mut CameraRig,
    ) -> bool {
        match event {
            InputEvent::PointerMoved { x, y } => {
                self.handle_pointer_moved(Vec2::new(x, y), viewport, rig)
            }
            InputEvent::PointerButton { button, pressed } => {
                self.handle_pointer_button(button, pressed, viewport)
            }
            InputEvent::Scroll { delta } => {
                if self.ui_captured {
                    return false;
                }
                viewport.zoom_by(delta);
                true
            }
        }
    }

    fn handle_pointer_moved(
        &mut self,
        pos: Vec2,
        viewport: &mut ViewportState,
        rig: &mut CameraRig,
    ) -> bool {
        if !self.drag.active {
            return false;
        }
        if self.drag.first_sample {
            // Seed only; the first move never pans.
            self.drag.last_cursor = pos;
            self.drag.first_sample = false;
            return false;
        }
        let delta = pos - self.drag.last_cursor;
        self.drag.last_cursor = pos;
        match self.projection {
            ProjectionKind::Orthographic => viewport.pan(delta),
            ProjectionKind::Perspective => {
                // Screen-down is pitch-up in the fallback camera.
                rig.apply_angle_delta(delta.x, -delta.y);
            }
        }
        true
    }

    fn handle_pointer_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
        viewport: &mut ViewportState,
    ) -> bool {
        if button != self.pan_button {
            return false;
        }
        if pressed {
            if self.pan_enabled && !self.ui_captured {
                self.drag.active = true;
                self.drag.first_sample = true;
            }
            return false;
        }
        // Release always disengages, even if the overlay captured the
        // pointer mid-drag.
        if self.drag.active {
            viewport.pan(Vec2::ZERO);
            self.drag = DragSession::idle();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn fixtures() -> (InputTranslator, ViewportState, CameraRig) {
        let controls = ControlOptions::default();
        (
            InputTranslator::new(&controls, ProjectionKind::Orthographic),
            ViewportState::new(800, 600, &controls),
            CameraRig::new(Vec3::ZERO, 2.5, 0.1),
        )
    }

    fn press(button: PointerButton) -> InputEvent {
        InputEvent::PointerButton {
            button,
            pressed: true,
        }
    }

    fn release(button: PointerButton) -> InputEvent {
        InputEvent::PointerButton {
            button,
            pressed: false,
        }
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    #[test]
    fn first_move_after_engagement_never_pans() {
        let (mut tr, mut vp, mut rig) = fixtures();
        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        assert!(tr.is_dragging());
        let changed = tr.handle_event(moved(400.0, 300.0), &mut vp, &mut rig);
        assert!(!changed);
        assert_eq!(vp.grid_offset(), Vec3::ZERO);
    }

    #[test]
    fn second_move_pans_by_the_delta() {
        let (mut tr, mut vp, mut rig) = fixtures();
        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        let _ = tr.handle_event(moved(400.0, 300.0), &mut vp, &mut rig);
        let changed = tr.handle_event(moved(500.0, 300.0), &mut vp, &mut rig);
        assert!(changed);
        assert!(vp.grid_offset().x < 0.0);
    }

    #[test]
    fn release_flushes_and_rearms_first_sample() {
        let (mut tr, mut vp, mut rig) = fixtures();
        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        let _ = tr.handle_event(moved(10.0, 10.0), &mut vp, &mut rig);
        let _ = tr.handle_event(moved(20.0, 10.0), &mut vp, &mut rig);
        let offset = vp.grid_offset();

        let _ =
            tr.handle_event(release(PointerButton::Right), &mut vp, &mut rig);
        assert!(!tr.is_dragging());
        // Flush is pan(0, 0): the offset is settled, not moved
        assert_eq!(vp.grid_offset(), offset);

        // Next session suppresses its first move again
        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        let changed = tr.handle_event(moved(900.0, 700.0), &mut vp, &mut rig);
        assert!(!changed);
        assert_eq!(vp.grid_offset(), offset);
    }

    #[test]
    fn moves_without_engagement_do_nothing() {
        let (mut tr, mut vp, mut rig) = fixtures();
        let changed = tr.handle_event(moved(100.0, 100.0), &mut vp, &mut rig);
        assert!(!changed);
        assert_eq!(vp.grid_offset(), Vec3::ZERO);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let (mut tr, mut vp, mut rig) = fixtures();
        let _ = tr.handle_event(press(PointerButton::Left), &mut vp, &mut rig);
        assert!(!tr.is_dragging());
    }

    #[test]
    fn scroll_zooms_in_any_drag_state() {
        let (mut tr, mut vp, mut rig) = fixtures();
        let _ =
            tr.handle_event(InputEvent::Scroll { delta: -1.0 }, &mut vp, &mut rig);
        let zoomed_once = vp.zoom();
        assert!(zoomed_once > 1.0);

        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        let _ =
            tr.handle_event(InputEvent::Scroll { delta: -1.0 }, &mut vp, &mut rig);
        assert!(vp.zoom() > zoomed_once);
    }

    #[test]
    fn ui_capture_gates_scroll_and_engagement() {
        let (mut tr, mut vp, mut rig) = fixtures();
        tr.begin_frame(true);
        let changed =
            tr.handle_event(InputEvent::Scroll { delta: -1.0 }, &mut vp, &mut rig);
        assert!(!changed);
        assert_eq!(vp.zoom(), 1.0);

        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        assert!(!tr.is_dragging());

        // Capture released on a later frame: input flows again
        tr.begin_frame(false);
        let _ =
            tr.handle_event(InputEvent::Scroll { delta: -1.0 }, &mut vp, &mut rig);
        assert!(vp.zoom() > 1.0);
    }

    #[test]
    fn pan_disabled_blocks_drag_engagement() {
        let controls = ControlOptions {
            pan_enabled: false,
            ..ControlOptions::default()
        };
        let mut tr =
            InputTranslator::new(&controls, ProjectionKind::Orthographic);
        let mut vp = ViewportState::new(800, 600, &controls);
        let mut rig = CameraRig::new(Vec3::ZERO, 2.5, 0.1);

        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        assert!(!tr.is_dragging());
        let _ = tr.handle_event(moved(1.0, 1.0), &mut vp, &mut rig);
        let _ = tr.handle_event(moved(50.0, 1.0), &mut vp, &mut rig);
        assert_eq!(vp.grid_offset(), Vec3::ZERO);
    }

    #[test]
    fn perspective_drags_rotate_the_rig_instead() {
        let controls = ControlOptions::default();
        let mut tr =
            InputTranslator::new(&controls, ProjectionKind::Perspective);
        let mut vp = ViewportState::new(800, 600, &controls);
        let mut rig = CameraRig::new(Vec3::ZERO, 2.5, 0.1);
        let yaw_before = rig.yaw();

        let _ = tr.handle_event(press(PointerButton::Right), &mut vp, &mut rig);
        let _ = tr.handle_event(moved(0.0, 0.0), &mut vp, &mut rig);
        let _ = tr.handle_event(moved(30.0, 0.0), &mut vp, &mut rig);

        assert_eq!(vp.grid_offset(), Vec3::ZERO);
        assert!(rig.yaw() > yaw_before);
    }
}
