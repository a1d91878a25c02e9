use serde::{Deserialize, Serialize};

use crate::input::PointerButton;

/// Pointer button assignments and input sensitivities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ControlOptions {
    /// Button that engages a pan drag.
    pub pan_button: PointerButton,
    /// Whether pan dragging is enabled at all.
    pub pan_enabled: bool,
    /// Pan sensitivity multiplier applied after the NDC conversion.
    /// Tuned so a pixel of drag roughly matches a pixel of world motion
    /// at the default window width.
    pub pan_speed: f32,
    /// Zoom step applied per scroll unit.
    pub zoom_speed: f32,
    /// Movement speed of the perspective fallback camera, units/second.
    pub move_speed: f32,
    /// Pointer sensitivity of the perspective fallback camera, degrees
    /// per pixel.
    pub look_sensitivity: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            pan_button: PointerButton::Right,
            pan_enabled: true,
            pan_speed: 400.0,
            zoom_speed: 0.1,
            move_speed: 2.5,
            look_sensitivity: 0.1,
        }
    }
}
