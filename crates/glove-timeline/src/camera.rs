//! Reference camera used by the native preview and by host-side tests.
//!
//! It avoids any platform API; the web frontend instead forwards poses to the
//! page's own camera object.

use crate::constants::{DEFAULT_FOV_DEGREES, ZFAR, ZNEAR};
use crate::pose::CameraSink;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Right-handed perspective camera posed by position and XYZ Euler rotation.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub rotation: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            fov_degrees: DEFAULT_FOV_DEGREES,
            aspect,
            znear: ZNEAR,
            zfar: ZFAR,
        }
    }

    pub fn orientation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation(), self.position).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Direction the camera looks along (-Z in camera space).
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}

impl CameraSink for PerspectiveCamera {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    fn set_fov(&mut self, fov_degrees: f32) {
        self.fov_degrees = fov_degrees;
    }
}
