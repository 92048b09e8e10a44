//! Viewing state shared with the native viewer.
//!
//! These types avoid platform-specific APIs; the viewer turns them into the
//! matrices it uploads each frame.

use glam::{Mat4, Vec2, Vec3};

pub const DEFAULT_CAMERA_Z: f32 = 8.0;
pub const DEFAULT_FOVY_DEGREES: f32 = 75.0;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, DEFAULT_CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: DEFAULT_FOVY_DEGREES.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World units covered by one pixel at unit view depth, for a viewport
    /// `height_px` tall. Multiply a point size in pixels-at-unit-depth by this
    /// to get its world-space extent.
    pub fn world_per_pixel(&self, height_px: u32) -> f32 {
        2.0 * (self.fovy_radians * 0.5).tan() / height_px.max(1) as f32
    }
}

/// Rotation of the particle cloud about its own X and Y axes, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneRotation(pub Vec2);

impl SceneRotation {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.0.x) * Mat4::from_rotation_y(self.0.y)
    }
}
