//! Scene graph holding the loaded model.
//!
//! Nodes live in a flat arena indexed by [`NodeId`]. Each node has a name,
//! an optional parent, a local transform, an optional triangle mesh and a
//! `clickable` flag marking it as an interaction target. The interaction
//! engine only ever holds `NodeId`s, never references into the graph.

pub mod bounds;
pub mod description;
pub mod mesh;

use glam::Affine3A;
use rustc_hash::FxHashMap;

pub use bounds::Aabb;
pub use description::{MeshDescription, NodeDescription, SceneDescription};
pub use mesh::Mesh;

use crate::picking::ray::Ray;
use crate::picking::{RayHit, SceneProvider};

/// Index of a node in a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[cfg(test)]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

/// A single scene node.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node name as authored (may carry a material suffix).
    pub name: String,
    /// Transform relative to the parent.
    pub transform: Affine3A,
    /// Geometry, if this node is drawable.
    pub mesh: Option<Mesh>,
    /// Whether this node is an interaction target.
    pub clickable: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Parent node, `None` for roots.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed scene hierarchy.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a node. An unknown parent is logged and the node becomes a
    /// root.
    pub fn add_node(
        &mut self,
        parent: Option<NodeId>,
        name: impl Into<String>,
        transform: Affine3A,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let name = name.into();
        let parent = parent.filter(|p| {
            let known = p.index() < self.nodes.len();
            if !known {
                log::warn!("node {name:?}: unknown parent {p:?}, added as root");
            }
            known
        });
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        self.nodes.push(SceneNode {
            name,
            transform,
            mesh: None,
            clickable: false,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// Immutable node access.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Mutable node access.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// Attach geometry to a node. Returns `false` for an unknown node.
    pub fn set_mesh(&mut self, id: NodeId, mesh: Mesh) -> bool {
        self.node_mut(id).map(|n| n.mesh = Some(mesh)).is_some()
    }

    /// Set the interaction-target flag. Returns `false` for an unknown
    /// node.
    pub fn set_clickable(&mut self, id: NodeId, clickable: bool) -> bool {
        self.node_mut(id).map(|n| n.clickable = clickable).is_some()
    }

    /// All node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|id| self.nodes[id.index()].parent.is_none())
    }

    /// First node with exactly this name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.ids().find(|id| self.nodes[id.index()].name == name)
    }

    /// Name → id index (first occurrence wins).
    #[must_use]
    pub fn name_index(&self) -> FxHashMap<&str, NodeId> {
        let mut index = FxHashMap::default();
        for id in self.ids() {
            let _ = index.entry(self.nodes[id.index()].name.as_str()).or_insert(id);
        }
        index
    }

    /// Node-to-world transform: the product of local transforms from the
    /// root down to `id`. The ancestor walk is bounded by the node count.
    #[must_use]
    pub fn world_transform(&self, id: NodeId) -> Affine3A {
        let mut world = Affine3A::IDENTITY;
        let mut current = Some(id);
        for _ in 0..self.nodes.len() {
            let Some(node) = current.and_then(|c| self.node(c)) else {
                break;
            };
            world = node.transform * world;
            current = node.parent;
        }
        world
    }

    /// `id` and every node below it, depth first.
    #[must_use]
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.node(id).is_none() {
            return out;
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if out.len() >= self.nodes.len() {
                break;
            }
            out.push(next);
            stack.extend(self.nodes[next.index()].children.iter().rev());
        }
        out
    }

    /// World-space bounds of every mesh in the subtree rooted at `id`,
    /// computed from current transforms. `None` when no geometry exists.
    #[must_use]
    pub fn world_bounds(&self, id: NodeId) -> Option<Aabb> {
        self.subtree(id)
            .into_iter()
            .filter_map(|n| {
                let mesh = self.nodes[n.index()].mesh.as_ref()?;
                mesh.world_bounds(&self.world_transform(n))
            })
            .reduce(|a, b| a.union(&b))
    }

    /// Flag every mesh-bearing node under `root` as clickable. Returns how
    /// many nodes were flagged.
    pub fn mark_meshes_clickable(&mut self, root: NodeId) -> usize {
        let mut count = 0;
        for id in self.subtree(root) {
            let node = &mut self.nodes[id.index()];
            if node.mesh.is_some() {
                node.clickable = true;
                count += 1;
            }
        }
        count
    }

    /// Intersect a world-space ray with every mesh, in node order.
    #[must_use]
    pub fn raycast_all(&self, ray: &Ray) -> Vec<RayHit> {
        self.ids()
            .filter_map(|id| {
                let mesh = self.nodes[id.index()].mesh.as_ref()?;
                let distance = mesh.intersect(ray, &self.world_transform(id))?;
                Some(RayHit {
                    node: id,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect()
    }
}

impl SceneProvider for SceneGraph {
    fn raycast(&self, ray: &Ray) -> Vec<RayHit> {
        self.raycast_all(ray)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.name.as_str())
    }

    fn is_clickable(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.clickable)
    }

    fn world_bounds(&self, node: NodeId) -> Option<Aabb> {
        SceneGraph::world_bounds(self, node)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}
