//! Camera keyframes, interpolated poses and the sink they are written to.

use glam::Vec3;

/// A camera pose authored at a segment boundary.
///
/// `rotation` holds Euler angles in radians applied in XYZ order, the
/// renderer's default. `fov` is in degrees; `None` leaves the sink's field of
/// view alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraKeyframe {
    pub position: Vec3,
    pub rotation: Vec3,
    pub fov: Option<f32>,
}

impl CameraKeyframe {
    pub const fn new(position: [f32; 3], rotation: [f32; 3], fov: Option<f32>) -> Self {
        Self {
            position: Vec3::new(position[0], position[1], position[2]),
            rotation: Vec3::new(rotation[0], rotation[1], rotation[2]),
            fov,
        }
    }

    /// Per-channel linear blend towards `other` by the already eased `e`.
    pub fn interpolate(&self, other: &CameraKeyframe, e: f32) -> CameraPose {
        let fov = match (self.fov, other.fov) {
            (Some(a), Some(b)) => Some(lerp(a, b, e)),
            _ => None,
        };
        CameraPose {
            position: self.position.lerp(other.position, e),
            rotation: self.rotation.lerp(other.rotation, e),
            fov,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.fov.map_or(true, f32::is_finite)
    }
}

/// Result of sampling the timeline at one progress value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Vec3,
    pub fov: Option<f32>,
}

impl CameraPose {
    pub fn apply_to(&self, sink: &mut dyn CameraSink) {
        sink.set_position(self.position);
        sink.set_rotation(self.rotation);
        if let Some(fov) = self.fov {
            sink.set_fov(fov);
        }
    }
}

/// Anything whose pose the timeline may drive. Writes must be visible before
/// the next rendered frame.
pub trait CameraSink {
    fn set_position(&mut self, position: Vec3);
    fn set_rotation(&mut self, rotation: Vec3);
    fn set_fov(&mut self, fov_degrees: f32);
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
