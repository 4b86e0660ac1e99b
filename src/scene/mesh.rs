//! Triangle meshes used for pick intersection.

use glam::{Affine3A, Vec3};

use super::bounds::Aabb;
use crate::picking::ray::Ray;

/// Indexed triangle mesh in node-local space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    positions: Vec<Vec3>,
    indices: Vec<[u32; 3]>,
}

impl Mesh {
    /// Mesh from positions and triangle indices. Triangles referencing a
    /// missing vertex are ignored during intersection.
    #[must_use]
    pub fn new(positions: Vec<Vec3>, indices: Vec<[u32; 3]>) -> Self {
        Self { positions, indices }
    }

    /// Axis-aligned box centered on the local origin (12 triangles).
    #[must_use]
    pub fn cuboid(half_extents: Vec3) -> Self {
        let h = half_extents.abs();
        let positions = (0..8)
            .map(|i| {
                Vec3::new(
                    if i & 1 == 0 { -h.x } else { h.x },
                    if i & 2 == 0 { -h.y } else { h.y },
                    if i & 4 == 0 { -h.z } else { h.z },
                )
            })
            .collect();
        let indices = vec![
            // -z / +z
            [0, 2, 1],
            [1, 2, 3],
            [4, 5, 6],
            [5, 7, 6],
            // -x / +x
            [0, 4, 2],
            [2, 4, 6],
            [1, 3, 5],
            [3, 7, 5],
            // -y / +y
            [0, 1, 4],
            [1, 5, 4],
            [2, 6, 3],
            [3, 6, 7],
        ];
        Self { positions, indices }
    }

    /// Vertex positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Number of well-formed triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles().count()
    }

    /// Iterate triangles as vertex triples, skipping bad indices.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.iter().filter_map(|[a, b, c]| {
            Some([
                *self.positions.get(*a as usize)?,
                *self.positions.get(*b as usize)?,
                *self.positions.get(*c as usize)?,
            ])
        })
    }

    /// Local-space bounds, `None` for a mesh without vertices.
    #[must_use]
    pub fn local_bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().copied())
    }

    /// World-space bounds under `transform`, from the actual vertices
    /// (tighter than transforming the local box).
    #[must_use]
    pub fn world_bounds(&self, transform: &Affine3A) -> Option<Aabb> {
        Aabb::from_points(
            self.positions
                .iter()
                .map(|p| transform.transform_point3(*p)),
        )
    }

    /// Nearest positive hit distance of a world-space ray against this
    /// mesh placed with `transform`.
    ///
    /// Both triangle faces are pickable. At equal distance the first
    /// triangle in index order wins.
    #[must_use]
    pub fn intersect(&self, ray: &Ray, transform: &Affine3A) -> Option<f32> {
        let bounds = self.world_bounds(transform)?;
        let _ = bounds.ray_entry(ray)?;

        let mut nearest: Option<f32> = None;
        for [a, b, c] in self.triangles() {
            let tri = [
                transform.transform_point3(a),
                transform.transform_point3(b),
                transform.transform_point3(c),
            ];
            if let Some(t) = intersect_triangle(ray, tri) {
                if nearest.is_none_or(|best| t < best) {
                    nearest = Some(t);
                }
            }
        }
        nearest
    }
}

/// Möller–Trumbore ray/triangle intersection. Returns the distance along
/// the ray for hits strictly in front of the origin.
#[must_use]
pub fn intersect_triangle(ray: &Ray, [a, b, c]: [Vec3; 3]) -> Option<f32> {
    const EPSILON: f32 = 1e-7;

    let edge1 = b - a;
    let edge2 = c - a;
    let p = ray.direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    (t > EPSILON).then_some(t)
}
