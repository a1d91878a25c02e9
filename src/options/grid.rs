use serde::{Deserialize, Serialize};

/// Grid extent, tile size, and colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridOptions {
    /// Edge length of a single tile in world units.
    pub tile_size: f32,
    /// Number of tile columns.
    pub num_cols: u32,
    /// Number of tile rows.
    pub num_rows: u32,
    /// Grid line color (RGB).
    pub line_color: [f32; 3],
    /// Clear color behind the grid (RGBA).
    pub background: [f32; 4],
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            tile_size: 5.0,
            num_cols: 50,
            num_rows: 50,
            line_color: [0.0, 0.0, 0.0],
            background: [0.8, 0.973, 0.6, 1.0],
        }
    }
}
