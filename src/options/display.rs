use serde::{Deserialize, Serialize};

/// Which projection the editor window uses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Top-down isometric editing view (the default).
    #[default]
    Orthographic,
    /// Free-camera perspective fallback.
    Perspective,
}

/// Projection kind and frame pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayOptions {
    /// Projection used by newly created windows.
    pub projection: ProjectionKind,
    /// Presentation rate cap in frames per second (0 = uncapped).
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::Orthographic,
            target_fps: 60,
        }
    }
}
