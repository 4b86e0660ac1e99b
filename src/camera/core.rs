use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }

    /// World-to-view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix. `perspective_rh` uses the [0,1] depth range
    /// (wgpu/Vulkan convention).
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Current position and look-at target.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        CameraPose::new(self.eye, self.target)
    }
}

/// Camera position plus the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Eye position.
    pub position: Vec3,
    /// Look-at target.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Pose from an eye position and target.
    #[must_use]
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Component-wise linear interpolation of both points.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }

    /// Distance between eye and target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.look_at)
    }

    /// Whether both points are within `epsilon` of `other`'s.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.distance(other.position) <= epsilon
            && self.look_at.distance(other.look_at) <= epsilon
    }
}
