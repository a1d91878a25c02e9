//! Centralized editor options with TOML preset support.
//!
//! All tweakable settings (window, grid, pointer controls, display) are
//! consolidated here. Options serialize to/from TOML; every sub-struct
//! uses `#[serde(default)]` so partial files (e.g. only overriding
//! `[controls]`) work correctly.

mod controls;
mod display;
mod grid;
mod window;

use std::path::Path;

pub use controls::ControlOptions;
pub use display::{DisplayOptions, ProjectionKind};
pub use grid::GridOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::EditorError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Window size and title.
    pub window: WindowOptions,
    /// Grid extent, tile size, and colors.
    pub grid: GridOptions,
    /// Pointer button assignments and sensitivities.
    pub controls: ControlOptions,
    /// Projection kind and frame pacing.
    pub display: DisplayOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Io`] if the file cannot be read or
    /// [`EditorError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path).map_err(EditorError::Io)?;
        toml::from_str(&content)
            .map_err(|e| EditorError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::OptionsParse`] on serialization failure or
    /// [`EditorError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), EditorError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EditorError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EditorError::Io)?;
        }
        std::fs::write(path, content).map_err(EditorError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerButton;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[grid]
tile_size = 2.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.grid.tile_size, 2.0);
        // Everything else should be default
        assert_eq!(opts.grid.num_cols, 50);
        assert_eq!(opts.window.width, 800);
        assert_eq!(opts.controls.pan_button, PointerButton::Right);
        assert_eq!(opts.display.projection, ProjectionKind::Orthographic);
    }

    #[test]
    fn projection_kind_uses_snake_case() {
        let toml_str = r#"
[display]
projection = "perspective"
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.display.projection, ProjectionKind::Perspective);
    }
}
