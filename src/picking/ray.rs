//! Pointer-to-ray mapping.
//!
//! Converts a pixel coordinate into normalized device coordinates relative
//! to a viewport rectangle, then unprojects it through the camera into a
//! world-space ray. Rays are built fresh for every pick; nothing here is
//! cached, since any camera movement invalidates a previous ray.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::core::Camera;

/// Rectangle of the element receiving pointer input, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ViewportRect {
    /// Rectangle anchored at the origin (a full-window surface).
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Width / height, or `None` for a degenerate rectangle.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        self.is_valid().then(|| self.width / self.height)
    }

    /// Whether the rectangle has a finite, positive area.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Map a pixel coordinate to normalized device coordinates.
    ///
    /// Both axes land in `[-1, 1]` across the rectangle; the vertical axis
    /// is flipped so screen-down becomes NDC-down. Points outside the
    /// rectangle map outside that range. Returns `None` for a degenerate
    /// rectangle or a non-finite coordinate.
    #[must_use]
    pub fn to_ndc(&self, x: f32, y: f32) -> Option<Vec2> {
        if !self.is_valid() || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let ndc_x = ((x - self.x) / self.width) * 2.0 - 1.0;
        let ndc_y = -((y - self.y) / self.height) * 2.0 + 1.0;
        Some(Vec2::new(ndc_x, ndc_y))
    }
}

/// A half-line in world space. `direction` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `direction`. A zero direction stays zero
    /// and such a ray hits nothing.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Unproject an NDC coordinate through `camera`.
    ///
    /// The origin sits on the near plane and the direction points toward
    /// the far plane, matching a perspective pick ray.
    #[must_use]
    pub fn from_ndc(ndc: Vec2, camera: &Camera) -> Option<Self> {
        let inv = camera.build_matrix().inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        let dir = (far - near).normalize_or_zero();
        if !near.is_finite() || dir == Vec3::ZERO {
            return None;
        }
        Some(Self {
            origin: near,
            direction: dir,
        })
    }

    /// Full pointer-to-ray mapping: pixel → NDC → world ray.
    #[must_use]
    pub fn from_pointer(
        x: f32,
        y: f32,
        rect: &ViewportRect,
        camera: &Camera,
    ) -> Option<Self> {
        let ndc = rect.to_ndc(x, y)?;
        Self::from_ndc(ndc, camera)
    }
}
