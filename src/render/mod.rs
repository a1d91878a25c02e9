//! Presentation: per-frame matrices, vertex streams, and the thin wgpu
//! line renderer.
//!
//! The core only ever hands the renderer a [`FrameUniform`] per draw
//! batch and a flat [`LineVertex`] stream drawn as disconnected
//! segments. Static grid geometry is uploaded once at window creation;
//! after that the uniforms are the only per-frame GPU traffic.

pub mod context;
pub mod line_renderer;

use glam::{Mat4, Vec3};

use crate::camera::{CameraRig, ViewportState};
use crate::options::ProjectionKind;

/// Base vertical field of view of the perspective fallback, in degrees.
const PERSPECTIVE_FOV_DEGREES: f32 = 45.0;
/// Near plane of the perspective fallback projection.
const PERSPECTIVE_NEAR: f32 = 0.1;
/// Far plane of the perspective fallback projection.
const PERSPECTIVE_FAR: f32 = 1000.0;

/// Half-extent of the screen-space crosshair, in NDC units.
const CROSSHAIR_HALF_EXTENT: f32 = 0.02;

/// Eye height of the fixed top-down view over the grid plane.
const TOP_DOWN_EYE_HEIGHT: f32 = 10.0;

/// One vertex of a line segment, as uploaded to the GPU.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space (or NDC, for overlay batches) position.
    pub position: [f32; 3],
}

/// Per-batch uniform data consumed by the line pipeline.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    /// View matrix, column-major.
    pub view: [[f32; 4]; 4],
    /// Projection matrix, column-major.
    pub projection: [[f32; 4]; 4],
    /// Model matrix, column-major.
    pub model: [[f32; 4]; 4],
    /// Line color (RGBA).
    pub line_color: [f32; 4],
}

impl FrameUniform {
    /// Build the grid batch for the current frame.
    ///
    /// Orthographic: extents from the viewport, a fixed top-down view
    /// over the grid plane, and the viewport's squash*rotate*translate
    /// model matrix. Perspective: the fallback rig's view with the zoom
    /// level scaling the field of view.
    #[must_use]
    pub fn grid_batch(
        viewport: &ViewportState,
        rig: &CameraRig,
        projection: ProjectionKind,
        line_color: [f32; 3],
    ) -> Self {
        let (view, proj, model) = match projection {
            ProjectionKind::Orthographic => (
                top_down_view(),
                viewport.projection(),
                viewport.model_matrix(),
            ),
            ProjectionKind::Perspective => {
                let (width, height) = viewport.surface_size();
                let aspect = width as f32 / height as f32;
                let fov = (PERSPECTIVE_FOV_DEGREES * viewport.zoom())
                    .clamp(10.0, 120.0);
                (
                    rig.view_matrix(),
                    Mat4::perspective_rh(
                        fov.to_radians(),
                        aspect,
                        PERSPECTIVE_NEAR,
                        PERSPECTIVE_FAR,
                    ),
                    Mat4::IDENTITY,
                )
            }
        };
        Self {
            view: view.to_cols_array_2d(),
            projection: proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            line_color: [line_color[0], line_color[1], line_color[2], 1.0],
        }
    }

    /// Build the screen-space overlay batch: identity matrices, so
    /// overlay vertices are interpreted directly as NDC.
    #[must_use]
    pub fn overlay_batch(line_color: [f32; 3]) -> Self {
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            projection: identity,
            model: identity,
            line_color: [line_color[0], line_color[1], line_color[2], 1.0],
        }
    }
}

/// Fixed top-down view over the grid plane: eye above the origin, world
/// -Z up on screen so +X is screen-right.
#[must_use]
pub fn top_down_view() -> Mat4 {
    Mat4::look_at_rh(
        Vec3::new(0.0, TOP_DOWN_EYE_HEIGHT, 0.0),
        Vec3::ZERO,
        Vec3::NEG_Z,
    )
}

/// Flatten a point list into the GPU vertex stream.
#[must_use]
pub fn line_vertices(points: &[Vec3]) -> Vec<LineVertex> {
    points
        .iter()
        .map(|p| LineVertex {
            position: p.to_array(),
        })
        .collect()
}

/// Crosshair overlay geometry: two NDC-space segments centered on the
/// viewport origin.
#[must_use]
pub fn crosshair_lines() -> [LineVertex; 4] {
    let e = CROSSHAIR_HALF_EXTENT;
    [
        LineVertex {
            position: [-e, 0.0, 0.0],
        },
        LineVertex {
            position: [e, 0.0, 0.0],
        },
        LineVertex {
            position: [0.0, -e, 0.0],
        },
        LineVertex {
            position: [0.0, e, 0.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::options::ControlOptions;

    const EPS: f32 = 1e-5;

    #[test]
    fn top_down_view_maps_grid_axes_to_screen_axes() {
        let view = top_down_view();
        let x = view.transform_vector3(Vec3::X);
        let z = view.transform_vector3(Vec3::Z);
        // World +X is screen-right, world +Z is screen-down
        assert!((x.x - 1.0).abs() < EPS);
        assert!((z.y + 1.0).abs() < EPS);
    }

    #[test]
    fn grid_batch_composes_viewport_matrices() {
        let controls = ControlOptions::default();
        let mut vp = ViewportState::new(800, 600, &controls);
        vp.pan(Vec2::new(60.0, -20.0));
        let rig = CameraRig::new(Vec3::ZERO, 2.5, 0.1);
        let uniform = FrameUniform::grid_batch(
            &vp,
            &rig,
            ProjectionKind::Orthographic,
            [0.0, 0.0, 0.0],
        );
        assert_eq!(uniform.projection, vp.projection().to_cols_array_2d());
        assert_eq!(uniform.model, vp.model_matrix().to_cols_array_2d());
        assert_eq!(uniform.line_color[3], 1.0);
    }

    #[test]
    fn overlay_batch_is_identity() {
        let uniform = FrameUniform::overlay_batch([0.1, 0.2, 0.3]);
        let identity = Mat4::IDENTITY.to_cols_array_2d();
        assert_eq!(uniform.view, identity);
        assert_eq!(uniform.projection, identity);
        assert_eq!(uniform.model, identity);
    }

    #[test]
    fn vertex_stream_preserves_order_and_length() {
        let points =
            vec![Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 3.0), Vec3::Z];
        let verts = line_vertices(&points);
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[2].position, [2.0, 0.0, 3.0]);
    }

    #[test]
    fn crosshair_is_two_segments_about_the_origin() {
        let lines = crosshair_lines();
        assert_eq!(lines.len() % 2, 0);
        let sum: f32 = lines
            .iter()
            .flat_map(|v| v.position)
            .sum();
        assert!(sum.abs() < EPS);
    }
}
