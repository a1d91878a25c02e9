//! Pan/zoom state and the fixed isometric basis.
//!
//! This is the mapping between screen-space pointer motion and
//! world/grid-space translation. The isometric look is a fixed rotation
//! of 45° about the vertical axis combined with a 0.5× horizontal
//! squash; its inverse is computed once at construction and reused for
//! every unprojection, so screen deltas can be carried back into grid
//! space without rebuilding the matrix per frame.

use glam::{Mat4, Vec2, Vec3};

use crate::options::ControlOptions;

/// Fixed isometric yaw about the vertical axis, in degrees.
const ISO_YAW_DEGREES: f32 = 45.0;
/// Horizontal squash factor producing the isometric diamond.
const ISO_X_SCALE: f32 = 0.5;

/// Positive floor for the zoom level. Scrolling can never push zoom to
/// zero or below; the orthographic extents stay non-degenerate.
pub const MIN_ZOOM: f32 = 0.01;

/// Near plane of the frame's orthographic projection. The range is fixed
/// and large so no reasonable pan distance clips the grid.
pub const ORTHO_NEAR: f32 = -1000.0;
/// Far plane of the frame's orthographic projection.
pub const ORTHO_FAR: f32 = 1000.0;

/// Zoom, grid offset, and the isometric transform pair.
///
/// `zoom` and `grid_offset` mutate every frame in response to input (and
/// only through [`pan`](Self::pan) / [`zoom_by`](Self::zoom_by)); the
/// isometric matrix and its inverse never change after construction and
/// are mutual inverses by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    zoom: f32,
    grid_offset: Vec3,
    iso_matrix: Mat4,
    inv_iso_matrix: Mat4,
    width: u32,
    height: u32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl ViewportState {
    /// Create a viewport for the given framebuffer size, reading pan and
    /// zoom sensitivities from `controls`. Zero dimensions are clamped
    /// to 1.
    #[must_use]
    pub fn new(width: u32, height: u32, controls: &ControlOptions) -> Self {
        let iso_matrix = Mat4::from_scale(Vec3::new(ISO_X_SCALE, 1.0, 1.0))
            * Mat4::from_rotation_y(ISO_YAW_DEGREES.to_radians());
        Self {
            zoom: 1.0,
            grid_offset: Vec3::ZERO,
            inv_iso_matrix: iso_matrix.inverse(),
            iso_matrix,
            width: width.max(1),
            height: height.max(1),
            pan_speed: controls.pan_speed,
            zoom_speed: controls.zoom_speed,
        }
    }

    /// Current zoom level (always `>= MIN_ZOOM`).
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Current world-space pan offset. `y` is always 0.
    #[must_use]
    pub fn grid_offset(&self) -> Vec3 {
        self.grid_offset
    }

    /// The fixed isometric basis (squash * rotate).
    #[must_use]
    pub fn iso_matrix(&self) -> Mat4 {
        self.iso_matrix
    }

    /// Precomputed inverse of the isometric basis.
    #[must_use]
    pub fn inv_iso_matrix(&self) -> Mat4 {
        self.inv_iso_matrix
    }

    /// Framebuffer size the NDC conversion currently uses.
    #[must_use]
    pub fn surface_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Track a framebuffer resize. Zero dimensions are clamped to 1 so
    /// the NDC division stays defined.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::warn!("viewport resized to {width}x{height}; clamping to 1");
        }
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Apply a pan from a screen-pixel delta (x right, y down).
    ///
    /// The vertical component is sign-flipped before the NDC conversion:
    /// screen y grows downward while the grid's z axis is the world
    /// forward direction. That flip is a fixed contract of this
    /// operation, paired with the subtraction below: panning right
    /// carries the visible world left.
    pub fn pan(&mut self, delta: Vec2) {
        let dz = -delta.y;
        let scale = self.zoom * self.pan_speed;
        let screen_delta = Vec3::new(
            2.0 * delta.x / self.width as f32 * scale,
            0.0,
            2.0 * dz / self.height as f32 * scale,
        );
        let grid_delta = self.inv_iso_matrix.transform_vector3(screen_delta);
        self.grid_offset -= grid_delta;
    }

    /// Apply a scroll step to the zoom level. Positive scroll (wheel
    /// up) narrows the orthographic extents; the result is clamped to
    /// [`MIN_ZOOM`].
    pub fn zoom_by(&mut self, scroll: f32) {
        self.zoom = (self.zoom - self.zoom_speed * scroll).max(MIN_ZOOM);
    }

    /// Orthographic projection for the current frame: extents are ± half
    /// the viewport dimension scaled by zoom, depth range fixed at
    /// [`ORTHO_NEAR`]..[`ORTHO_FAR`].
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        let half_w = self.width as f32 * 0.5 * self.zoom;
        let half_h = self.height as f32 * 0.5 * self.zoom;
        Mat4::orthographic_rh(
            -half_w, half_w, -half_h, half_h, ORTHO_NEAR, ORTHO_FAR,
        )
    }

    /// Model matrix for grid geometry: squash * rotate * translate, so
    /// the pan offset is expressed in the already-rotated/squashed space.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        self.iso_matrix * Mat4::from_translation(self.grid_offset)
    }

    /// Integer tile currently under the viewport origin.
    ///
    /// Read-only; returns (0, 0) for a non-positive tile size.
    #[must_use]
    pub fn origin_tile(&self, tile_size: f32) -> (i32, i32) {
        if tile_size <= 0.0 {
            return (0, 0);
        }
        (
            (-self.grid_offset.x / tile_size).floor() as i32,
            (-self.grid_offset.z / tile_size).floor() as i32,
        )
    }

    /// Exact (fractional) tile under the viewport origin: the same
    /// expression as [`origin_tile`](Self::origin_tile) without the
    /// floor.
    #[must_use]
    pub fn origin_tile_exact(&self, tile_size: f32) -> Vec2 {
        if tile_size <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            -self.grid_offset.x / tile_size,
            -self.grid_offset.z / tile_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn viewport() -> ViewportState {
        ViewportState::new(800, 600, &ControlOptions::default())
    }

    fn assert_vec3_near(a: Vec3, b: Vec3) {
        assert!(
            (a - b).length() < EPS,
            "expected {b:?}, got {a:?}"
        );
    }

    #[test]
    fn iso_matrices_are_mutual_inverses() {
        let vp = viewport();
        let product = vp.iso_matrix() * vp.inv_iso_matrix();
        let identity = Mat4::IDENTITY.to_cols_array();
        for (got, want) in product.to_cols_array().iter().zip(identity) {
            assert!((got - want).abs() < EPS);
        }
    }

    #[test]
    fn pan_round_trips_with_negated_delta() {
        let mut vp = viewport();
        vp.pan(Vec2::new(37.5, -12.0));
        vp.pan(Vec2::new(-37.5, 12.0));
        assert_vec3_near(vp.grid_offset(), Vec3::ZERO);
    }

    #[test]
    fn pan_right_drives_offset_x_negative() {
        // 800x600 window, zoom 1, offset 0: a rightward pan shows
        // tiles to the world-left.
        let mut vp = viewport();
        vp.pan(Vec2::new(100.0, 0.0));
        assert!(vp.grid_offset().x < 0.0);
        assert_eq!(vp.grid_offset().y, 0.0);
    }

    #[test]
    fn pan_keeps_offset_on_ground_plane() {
        let mut vp = viewport();
        vp.pan(Vec2::new(14.0, 88.0));
        vp.pan(Vec2::new(-3.0, -271.0));
        assert_eq!(vp.grid_offset().y, 0.0);
    }

    #[test]
    fn zero_pan_is_a_noop() {
        let mut vp = viewport();
        vp.pan(Vec2::new(25.0, 10.0));
        let before = vp.grid_offset();
        vp.pan(Vec2::ZERO);
        assert_vec3_near(vp.grid_offset(), before);
    }

    #[test]
    fn zoom_zero_is_a_noop_and_steps_are_additive() {
        let mut vp = viewport();
        vp.zoom_by(0.0);
        assert_eq!(vp.zoom(), 1.0);

        let mut once = viewport();
        once.zoom_by(-3.0);
        let mut twice = viewport();
        twice.zoom_by(-1.0);
        twice.zoom_by(-2.0);
        assert!((once.zoom() - twice.zoom()).abs() < EPS);
    }

    #[test]
    fn zoom_is_clamped_to_a_positive_floor() {
        let mut vp = viewport();
        vp.zoom_by(1e6);
        assert!(vp.zoom() >= MIN_ZOOM);
        // Still usable afterwards
        vp.zoom_by(-1.0);
        assert!(vp.zoom() > MIN_ZOOM);
    }

    #[test]
    fn ortho_extents_are_symmetric() {
        let mut vp = viewport();
        vp.zoom_by(-0.5);
        let proj = vp.projection();
        let half_w = 800.0 * 0.5 * vp.zoom();
        let half_h = 600.0 * 0.5 * vp.zoom();
        let right = proj.project_point3(Vec3::new(half_w, 0.0, 0.0));
        let left = proj.project_point3(Vec3::new(-half_w, 0.0, 0.0));
        let top = proj.project_point3(Vec3::new(0.0, half_h, 0.0));
        let bottom = proj.project_point3(Vec3::new(0.0, -half_h, 0.0));
        assert!((right.x - 1.0).abs() < EPS);
        assert!((left.x + 1.0).abs() < EPS);
        assert!((top.y - 1.0).abs() < EPS);
        assert!((bottom.y + 1.0).abs() < EPS);
    }

    #[test]
    fn resize_guards_zero_dimensions() {
        let mut vp = viewport();
        vp.resize(0, 0);
        assert_eq!(vp.surface_size(), (1, 1));
        // Pan must stay finite after the degenerate resize
        vp.pan(Vec2::new(10.0, 10.0));
        assert!(vp.grid_offset().is_finite());
    }

    #[test]
    fn origin_tile_floor_and_exact() {
        let mut vp = viewport();
        assert_eq!(vp.origin_tile(5.0), (0, 0));
        assert_eq!(vp.origin_tile_exact(5.0), Vec2::ZERO);

        // Drive the offset to a known value via pan, then check the
        // floor/exact pair agree with the derivation contract.
        vp.pan(Vec2::new(240.0, 0.0));
        let offset = vp.grid_offset();
        let exact = vp.origin_tile_exact(5.0);
        assert!((exact.x - (-offset.x / 5.0)).abs() < EPS);
        assert!((exact.y - (-offset.z / 5.0)).abs() < EPS);
        let tile = vp.origin_tile(5.0);
        assert_eq!(tile.0, exact.x.floor() as i32);
        assert_eq!(tile.1, exact.y.floor() as i32);
    }

    #[test]
    fn origin_tile_handles_degenerate_tile_size() {
        let vp = viewport();
        assert_eq!(vp.origin_tile(0.0), (0, 0));
        assert_eq!(vp.origin_tile_exact(-1.0), Vec2::ZERO);
    }

    #[test]
    fn model_matrix_applies_offset_before_iso_basis() {
        let mut vp = viewport();
        vp.pan(Vec2::new(50.0, 0.0));
        let offset = vp.grid_offset();
        let expected = vp.iso_matrix().transform_point3(offset);
        let got = vp.model_matrix().transform_point3(Vec3::ZERO);
        assert_vec3_near(got, expected);
    }
}
