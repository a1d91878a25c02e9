//! Yaw/pitch free camera for the perspective fallback projection.

use glam::{Mat4, Vec3};

/// Default yaw pointing down the world -Z axis.
const DEFAULT_YAW_DEGREES: f32 = -90.0;
/// Pitch bound keeping the derived vectors well-defined.
const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Movement command for the perspective fallback camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Along the camera's front vector.
    Forward,
    /// Against the camera's front vector.
    Backward,
    /// Against the camera's right vector.
    Left,
    /// Along the camera's right vector.
    Right,
}

/// Position plus yaw/pitch orientation with derived basis vectors.
///
/// The front/right/up vectors are recomputed whenever the angles change
/// and are never written directly from outside; all orientation changes
/// go through [`apply_angle_delta`](Self::apply_angle_delta).
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    move_speed: f32,
    look_sensitivity: f32,
}

impl CameraRig {
    /// Create a rig at `position` facing down -Z with zero pitch.
    #[must_use]
    pub fn new(position: Vec3, move_speed: f32, look_sensitivity: f32) -> Self {
        let mut rig = Self {
            position,
            yaw: DEFAULT_YAW_DEGREES,
            pitch: 0.0,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            move_speed,
            look_sensitivity,
        };
        rig.update_vectors();
        rig
    }

    /// Current world-space position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch angle in degrees, always within ±89°.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Derived view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Derived right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Derived up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Apply a pointer delta to yaw/pitch (sensitivity-scaled, pitch
    /// clamped so the view never flips) and refresh the derived vectors.
    pub fn apply_angle_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.look_sensitivity;
        self.pitch = (self.pitch + dy * self.look_sensitivity)
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.update_vectors();
    }

    /// Advance the position along the basis for `dt` seconds.
    pub fn advance(&mut self, direction: MoveDirection, dt: f32) {
        let velocity = self.move_speed * dt;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// View matrix looking along the derived front vector.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}
