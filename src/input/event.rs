use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputTranslator`](super::InputTranslator),
/// which drives the viewport's pan/zoom state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an absolute window position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
    },
    /// Pointer button pressed or released.
    PointerButton {
        /// Which button changed.
        button: PointerButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel step.
    Scroll {
        /// Scroll amount in wheel lines (positive = wheel up).
        delta: f32,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Primary (left) button.
    Left,
    /// Secondary (right) button.
    Right,
    /// Middle button (wheel click).
    Middle,
}

impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}
