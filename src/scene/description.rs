//! Declarative scene descriptions (TOML or JSON).
//!
//! A description lists nodes in parent-before-child order:
//!
//! ```toml
//! [[nodes]]
//! name = "island"
//! scale = [150.0, 150.0, 150.0]
//!
//! [[nodes]]
//! name = "Sphere002_Material_01"
//! parent = "island"
//! translation = [0.4, 0.1, 0.0]
//! clickable = true
//! mesh = { cuboid = { half_extents = [0.05, 0.05, 0.05] } }
//! ```

use std::path::Path;

use glam::{Affine3A, EulerRot, Quat, Vec3};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{Mesh, NodeId, SceneGraph};
use crate::error::VantageError;

/// Name of the node grouping several roots. Reserved in that case.
const GROUP_ROOT_NAME: &str = "scene";

/// Geometry attached to a described node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshDescription {
    /// Box centered on the node origin.
    Cuboid {
        /// Half size along each local axis.
        half_extents: Vec3,
    },
    /// Explicit indexed triangles.
    Triangles {
        /// Vertex positions.
        positions: Vec<Vec3>,
        /// Vertex index triples.
        indices: Vec<[u32; 3]>,
    },
}

impl MeshDescription {
    fn build(&self) -> Mesh {
        match self {
            Self::Cuboid { half_extents } => Mesh::cuboid(*half_extents),
            Self::Triangles { positions, indices } => {
                Mesh::new(positions.clone(), indices.clone())
            }
        }
    }
}

/// One node of a described scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeDescription {
    /// Node name (must be unique within the description).
    pub name: String,
    /// Name of an earlier node to attach to.
    pub parent: Option<String>,
    /// Local translation.
    pub translation: Vec3,
    /// Local rotation as XYZ Euler angles in degrees.
    pub rotation_degrees: Vec3,
    /// Local scale.
    pub scale: Vec3,
    /// Optional geometry.
    pub mesh: Option<MeshDescription>,
    /// Interaction-target flag.
    pub clickable: bool,
}

impl Default for NodeDescription {
    fn default() -> Self {
        Self {
            name: String::new(),
            parent: None,
            translation: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
            mesh: None,
            clickable: false,
        }
    }
}

impl NodeDescription {
    /// Local transform from translation, rotation and scale.
    #[must_use]
    pub fn transform(&self) -> Affine3A {
        let r = self.rotation_degrees;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        );
        Affine3A::from_scale_rotation_translation(
            self.scale,
            rotation,
            self.translation,
        )
    }
}

/// A whole scene, as loaded from a file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Nodes in parent-before-child order.
    pub nodes: Vec<NodeDescription>,
}

impl SceneDescription {
    /// Parse a TOML description.
    pub fn from_toml_str(s: &str) -> Result<Self, VantageError> {
        toml::from_str(s).map_err(|e| VantageError::SceneDescription(e.to_string()))
    }

    /// Parse a JSON description.
    pub fn from_json_str(s: &str) -> Result<Self, VantageError> {
        serde_json::from_str(s)
            .map_err(|e| VantageError::SceneDescription(e.to_string()))
    }

    /// Load from a `.json` or `.toml` file (anything else is read as TOML).
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    /// Build a scene graph. Returns the graph and the model root: the
    /// single root node, or a synthetic `"scene"` node grouping several
    /// roots. With several roots the name `"scene"` is reserved, and
    /// `parent = "scene"` attaches to the group.
    pub fn build(&self) -> Result<(SceneGraph, NodeId), VantageError> {
        if self.nodes.is_empty() {
            return Err(VantageError::SceneDescription(
                "scene has no nodes".into(),
            ));
        }

        let root_count = self.nodes.iter().filter(|n| n.parent.is_none()).count();
        let mut graph = SceneGraph::new();
        let synthetic_root = (root_count > 1)
            .then(|| graph.add_node(None, GROUP_ROOT_NAME, Affine3A::IDENTITY));

        let mut by_name: FxHashMap<&str, NodeId> = FxHashMap::default();
        if let Some(group) = synthetic_root {
            let _ = by_name.insert(GROUP_ROOT_NAME, group);
        }
        for desc in &self.nodes {
            if desc.name.is_empty() {
                return Err(VantageError::SceneDescription(
                    "node with empty name".into(),
                ));
            }
            if synthetic_root.is_some() && desc.name == GROUP_ROOT_NAME {
                return Err(VantageError::SceneDescription(format!(
                    "node name {GROUP_ROOT_NAME:?} is reserved in scenes with \
                     several roots"
                )));
            }
            if by_name.contains_key(desc.name.as_str()) {
                return Err(VantageError::SceneDescription(format!(
                    "duplicate node name {:?}",
                    desc.name
                )));
            }
            let parent = match &desc.parent {
                Some(parent) => {
                    Some(*by_name.get(parent.as_str()).ok_or_else(|| {
                        VantageError::SceneDescription(format!(
                            "node {:?}: parent {parent:?} must be declared \
                             before its children",
                            desc.name
                        ))
                    })?)
                }
                None => synthetic_root,
            };

            let id = graph.add_node(parent, desc.name.as_str(), desc.transform());
            if let Some(mesh) = &desc.mesh {
                let _ = graph.set_mesh(id, mesh.build());
            }
            let _ = graph.set_clickable(id, desc.clickable);
            let _ = by_name.insert(desc.name.as_str(), id);
        }

        let root = match synthetic_root {
            Some(root) => root,
            None => graph.roots().next().ok_or_else(|| {
                VantageError::SceneDescription("scene has no root".into())
            })?,
        };
        log::debug!("built scene with {} nodes", graph.len());
        Ok((graph, root))
    }
}
