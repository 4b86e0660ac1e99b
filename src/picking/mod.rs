//! Ray picking: pointer-to-ray mapping and hit resolution.
//!
//! The resolver is a pure function of the current scene and a ray. It does
//! not know about focus, panels or the camera controller.

pub mod ray;
pub mod resolver;

use glam::Vec3;

pub use ray::{Ray, ViewportRect};
pub use resolver::{target_id, HitResolver, PickOutcome, PickedTarget};

use crate::scene::{Aabb, NodeId};

/// A single ray/geometry intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Node whose geometry was hit.
    pub node: NodeId,
    /// Distance from the ray origin.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Scene access needed to resolve a pick.
///
/// Implemented by [`SceneGraph`](crate::scene::SceneGraph); hosts with their
/// own scene representation can implement it directly.
pub trait SceneProvider {
    /// Every intersection of `ray` with pickable geometry.
    fn raycast(&self, ray: &Ray) -> Vec<RayHit>;
    /// Parent of `node`, `None` at the top of the chain.
    fn parent(&self, node: NodeId) -> Option<NodeId>;
    /// Authored name of `node`.
    fn name(&self, node: NodeId) -> Option<&str>;
    /// Whether `node` is flagged as an interaction target.
    fn is_clickable(&self, node: NodeId) -> bool;
    /// World-space bounds of `node` and its descendants.
    fn world_bounds(&self, node: NodeId) -> Option<Aabb>;
    /// Upper bound on the length of any parent chain.
    fn node_count(&self) -> usize;
}
