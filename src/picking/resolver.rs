//! Resolves a pick ray to an interaction target.

use super::ray::Ray;
use super::{RayHit, SceneProvider};
use crate::scene::{Aabb, NodeId};

/// Separator between a logical object name and its material variant, as
/// exported by common DCC tools (`"Sphere001_Material_02"`).
pub const DEFAULT_MATERIAL_SEPARATOR: &str = "_Material";

/// Derive a target id from a node name.
///
/// Everything before the first occurrence of `separator` is the id; a name
/// without the separator is used whole. An empty result means the node has
/// no usable id.
#[must_use]
pub fn target_id<'a>(name: &'a str, separator: &str) -> Option<&'a str> {
    let id = if separator.is_empty() {
        name
    } else {
        name.find(separator).map_or(name, |end| &name[..end])
    };
    (!id.is_empty()).then_some(id)
}

/// A resolved interaction target.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedTarget {
    /// The clickable ancestor that was resolved.
    pub node: NodeId,
    /// Normalized target id.
    pub id: String,
    /// World-space bounds of the target at resolution time.
    pub bounds: Aabb,
    /// Distance along the pick ray to the geometry hit.
    pub distance: f32,
}

/// Result of resolving one pick ray.
#[derive(Debug, Clone, PartialEq)]
pub enum PickOutcome {
    /// The ray hit no geometry at all.
    Background,
    /// Geometry was hit but no clickable ancestor with a usable id exists.
    NonInteractive {
        /// The geometry node that was hit.
        hit: NodeId,
    },
    /// A clickable target was resolved.
    Target(PickedTarget),
}

impl PickOutcome {
    /// `(id, bounds)` of a resolved target.
    #[must_use]
    pub fn target(&self) -> Option<(&str, Aabb)> {
        match self {
            Self::Target(t) => Some((t.id.as_str(), t.bounds)),
            _ => None,
        }
    }

    /// Whether the ray missed all geometry.
    #[must_use]
    pub fn is_background(&self) -> bool {
        matches!(self, Self::Background)
    }
}

/// Casts pick rays against a scene and resolves clickable targets.
#[derive(Debug, Clone)]
pub struct HitResolver {
    separator: String,
}

impl Default for HitResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MATERIAL_SEPARATOR)
    }
}

impl HitResolver {
    /// Resolver stripping names at `separator`.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Material separator in use.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Resolve `ray` against `scene`.
    pub fn resolve<S: SceneProvider + ?Sized>(
        &self,
        scene: &S,
        ray: &Ray,
    ) -> PickOutcome {
        let Some(hit) = nearest_hit(scene.raycast(ray)) else {
            return PickOutcome::Background;
        };

        let Some(node) = clickable_ancestor(scene, hit.node) else {
            log::trace!("hit {:?} has no clickable ancestor", hit.node);
            return PickOutcome::NonInteractive { hit: hit.node };
        };

        let Some(id) = scene
            .name(node)
            .and_then(|name| target_id(name, &self.separator))
        else {
            log::debug!("clickable node {node:?} has no usable name");
            return PickOutcome::NonInteractive { hit: hit.node };
        };

        let bounds = scene
            .world_bounds(node)
            .unwrap_or_else(|| Aabb::new(hit.point, hit.point));

        PickOutcome::Target(PickedTarget {
            node,
            id: id.to_owned(),
            bounds,
            distance: hit.distance,
        })
    }
}

/// Nearest hit in front of the origin. Ties keep the earliest hit.
#[must_use]
pub fn nearest_hit(hits: impl IntoIterator<Item = RayHit>) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    for hit in hits {
        if !(hit.distance.is_finite() && hit.distance > 0.0) {
            continue;
        }
        if best.is_none_or(|b| hit.distance < b.distance) {
            best = Some(hit);
        }
    }
    best
}

/// Walk from `start` up the parent chain to the first clickable node.
///
/// The walk is bounded by the scene's node count, so a malformed chain
/// (cycle) terminates as "no clickable ancestor".
pub fn clickable_ancestor<S: SceneProvider + ?Sized>(
    scene: &S,
    start: NodeId,
) -> Option<NodeId> {
    let mut current = start;
    for _ in 0..=scene.node_count() {
        if scene.is_clickable(current) {
            return Some(current);
        }
        current = scene.parent(current)?;
    }
    None
}

#[cfg(test)]
mod tests {
    use glam::{Affine3A, Vec3};

    use super::*;
    use crate::scene::{Mesh, SceneGraph};

    #[test]
    fn id_truncates_at_first_separator() {
        assert_eq!(
            target_id("Sphere001_Material_02", DEFAULT_MATERIAL_SEPARATOR),
            Some("Sphere001")
        );
        assert_eq!(
            target_id("a_Material_b_Material_c", DEFAULT_MATERIAL_SEPARATOR),
            Some("a")
        );
        assert_eq!(target_id("body", DEFAULT_MATERIAL_SEPARATOR), Some("body"));
        assert_eq!(target_id("_Material_01", DEFAULT_MATERIAL_SEPARATOR), None);
        assert_eq!(target_id("", DEFAULT_MATERIAL_SEPARATOR), None);
        assert_eq!(target_id("whole", ""), Some("whole"));
    }

    #[test]
    fn nearest_hit_prefers_smaller_distance_and_first_tie() {
        let hit = |n: u32, d: f32| RayHit {
            node: NodeId::from_raw(n),
            distance: d,
            point: Vec3::ZERO,
        };
        let best = nearest_hit([hit(0, 10.0), hit(1, 5.0), hit(2, 5.0)]).unwrap();
        assert_eq!(best.node, NodeId::from_raw(1));
        assert!(nearest_hit([hit(0, -1.0), hit(1, f32::NAN)]).is_none());
    }

    /// Two boxes on the z axis, at ray distances 5 and 10.
    fn two_boxes() -> (SceneGraph, NodeId, NodeId) {
        let mut g = SceneGraph::new();
        let far = g.add_node(None, "Far_Material_01", Affine3A::IDENTITY);
        let near = g.add_node(
            None,
            "Near_Material_01",
            Affine3A::from_translation(Vec3::Z * 5.0),
        );
        let _ = g.set_mesh(far, Mesh::cuboid(Vec3::splat(0.5)));
        let _ = g.set_mesh(near, Mesh::cuboid(Vec3::splat(0.5)));
        let _ = g.set_clickable(far, true);
        let _ = g.set_clickable(near, true);
        (g, near, far)
    }

    #[test]
    fn resolves_nearest_of_two_targets() {
        let (g, near, _) = two_boxes();
        // Near box front face at z = 5.5, far box at z = 0.5.
        let ray = Ray::new(Vec3::new(0.1, 0.1, 10.5), Vec3::NEG_Z);
        let outcome = HitResolver::default().resolve(&g, &ray);
        assert!(
            matches!(
                &outcome,
                PickOutcome::Target(t)
                    if t.node == near
                        && t.id == "Near"
                        && (t.distance - 5.0).abs() < 1e-4
            ),
            "unexpected outcome {outcome:?}"
        );
    }

    #[test]
    fn walks_up_to_clickable_ancestor() {
        let mut g = SceneGraph::new();
        let group = g.add_node(None, "Sphere002_Material_01", Affine3A::IDENTITY);
        let mid = g.add_node(Some(group), "pivot", Affine3A::IDENTITY);
        let leaf = g.add_node(Some(mid), "mesh_0", Affine3A::IDENTITY);
        let _ = g.set_mesh(leaf, Mesh::cuboid(Vec3::ONE));
        let _ = g.set_clickable(group, true);

        let ray = Ray::new(Vec3::new(0.1, 0.1, 10.0), Vec3::NEG_Z);
        let outcome = HitResolver::default().resolve(&g, &ray);
        let (id, bounds) = outcome.target().unwrap();
        assert_eq!(id, "Sphere002");
        assert_eq!(bounds.center(), Vec3::ZERO);
    }

    #[test]
    fn exhausted_chain_is_non_interactive_not_background() {
        let mut g = SceneGraph::new();
        let root = g.add_node(None, "terrain", Affine3A::IDENTITY);
        let _ = g.set_mesh(root, Mesh::cuboid(Vec3::ONE));

        let resolver = HitResolver::default();
        let hit = Ray::new(Vec3::new(0.1, 0.1, 10.0), Vec3::NEG_Z);
        assert_eq!(
            resolver.resolve(&g, &hit),
            PickOutcome::NonInteractive { hit: root }
        );

        let miss = Ray::new(Vec3::new(50.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(resolver.resolve(&g, &miss).is_background());
    }

    #[test]
    fn empty_id_is_non_interactive() {
        let mut g = SceneGraph::new();
        let n = g.add_node(None, "_Material_7", Affine3A::IDENTITY);
        let _ = g.set_mesh(n, Mesh::cuboid(Vec3::ONE));
        let _ = g.set_clickable(n, true);
        let ray = Ray::new(Vec3::new(0.1, 0.1, 10.0), Vec3::NEG_Z);
        assert_eq!(
            HitResolver::default().resolve(&g, &ray),
            PickOutcome::NonInteractive { hit: n }
        );
    }

    /// A provider with a parent cycle, to prove the walk terminates.
    struct Cyclic;

    impl SceneProvider for Cyclic {
        fn raycast(&self, _ray: &Ray) -> Vec<RayHit> {
            vec![RayHit {
                node: NodeId::from_raw(0),
                distance: 1.0,
                point: Vec3::ZERO,
            }]
        }
        fn parent(&self, node: NodeId) -> Option<NodeId> {
            let next = if node.index() == 0 { 1 } else { 0 };
            Some(NodeId::from_raw(next))
        }
        fn name(&self, _node: NodeId) -> Option<&str> {
            Some("loop")
        }
        fn is_clickable(&self, _node: NodeId) -> bool {
            false
        }
        fn world_bounds(&self, _node: NodeId) -> Option<Aabb> {
            None
        }
        fn node_count(&self) -> usize {
            2
        }
    }

    #[test]
    fn parent_cycle_terminates() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(matches!(
            HitResolver::default().resolve(&Cyclic, &ray),
            PickOutcome::NonInteractive { .. }
        ));
    }
}
