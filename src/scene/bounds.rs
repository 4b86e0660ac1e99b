//! Axis-aligned bounding boxes.

use glam::{Affine3A, Vec3};

use crate::picking::ray::Ray;

/// Axis-aligned bounding box in whatever space its points came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Box spanning two arbitrary corners (ordered component-wise).
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centered on `center` with the given half extents.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// Smallest box containing every point, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Self {
            min: first,
            max: first,
        };
        for p in iter {
            aabb.expand_to(p);
        }
        Some(aabb)
    }

    /// Grow the box to include `point`.
    pub fn expand_to(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Box center.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f32 {
        self.size().length()
    }

    /// Bounds of this box after an affine transform (all eight corners).
    #[must_use]
    pub fn transformed(&self, transform: &Affine3A) -> Self {
        let corners = (0..8).map(|i| {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            transform.transform_point3(corner)
        });
        // Eight corners are always present.
        Self::from_points(corners).unwrap_or(*self)
    }

    /// Distance along `ray` to the box entry point (slab test).
    ///
    /// Returns `Some(0.0)` when the origin is inside the box and `None`
    /// when the box is missed or lies entirely behind the origin. A ray
    /// parallel to a slab hits only if its origin lies within that slab,
    /// face planes included.
    #[must_use]
    pub fn ray_entry(&self, ray: &Ray) -> Option<f32> {
        if ray.direction == Vec3::ZERO {
            return None;
        }
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);
            if direction == 0.0 {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }
            let inv = direction.recip();
            let t1 = (lo - origin) * inv;
            let t2 = (hi - origin) * inv;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }
        if t_far < 0.0 || t_near > t_far || t_near.is_nan() || t_far.is_nan() {
            return None;
        }
        Some(t_near.max(0.0))
    }
}
