mod color;
mod material;
mod node;

pub use color::Color;
pub use material::{Material, MaterialId, MaterialRegistry};
pub use node::{MeshBinding, NodeData, NodeId, NodeKind};

use crate::error::SceneError;
use slotmap::SlotMap;

/// Caller-owned scene graph of a loaded mouth model.
///
/// Nodes reference each other via typed IDs (generational indices), so
/// parents and children can be mutated without self-referential structures.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, NodeData>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    /// Creates a new, empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group node under `parent`, or as a root.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not in the scene.
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        self.insert(name.into(), NodeKind::Group, parent)
    }

    /// Adds a mesh node rendering `material` under `parent`, or as a root.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is not in the scene.
    pub fn add_mesh(
        &mut self,
        name: impl Into<String>,
        material: MaterialId,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        self.insert(
            name.into(),
            NodeKind::Mesh(MeshBinding::new(material)),
            parent,
        )
    }

    fn insert(
        &mut self,
        name: String,
        kind: NodeKind,
        parent: Option<NodeId>,
    ) -> Result<NodeId, SceneError> {
        if let Some(p) = parent {
            self.node(p)?;
        }
        let id = self.nodes.insert(NodeData {
            name,
            kind,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(p) => self.node_mut(p)?.children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    /// Returns a reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn node(&self, id: NodeId) -> Result<&NodeData, SceneError> {
        self.nodes
            .get(id)
            .ok_or(SceneError::EntityNotFound("node"))
    }

    /// Returns a mutable reference to the node data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is not in the scene.
    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut NodeData, SceneError> {
        self.nodes
            .get_mut(id)
            .ok_or(SceneError::EntityNotFound("node"))
    }

    /// Mesh binding of a node.
    ///
    /// # Errors
    ///
    /// Returns an error if the node is missing or is not a mesh.
    pub fn mesh_mut(&mut self, id: NodeId) -> Result<&mut MeshBinding, SceneError> {
        let node = self.node_mut(id)?;
        let name = node.name.clone();
        node.mesh_mut().ok_or(SceneError::NotAMesh(name))
    }

    /// First node with exactly this name, in traversal order.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.traverse()
            .into_iter()
            .find(|&id| self.nodes[id].name == name)
    }

    /// All nodes, depth-first, parents before children, siblings in
    /// insertion order.
    #[must_use]
    pub fn traverse(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            order.push(id);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }

    /// Mesh nodes in traversal order.
    #[must_use]
    pub fn meshes(&self) -> Vec<NodeId> {
        self.traverse()
            .into_iter()
            .filter(|&id| self.nodes[id].mesh().is_some())
            .collect()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn scene() -> (SceneGraph, MaterialRegistry) {
        let mut materials = MaterialRegistry::new();
        let enamel = materials.add(Material::new(Color::new(1.0, 1.0, 0.9)));
        let mut scene = SceneGraph::new();
        let upper = scene.add_group("upper", None).unwrap();
        scene.add_mesh("UR_1", enamel, Some(upper)).unwrap();
        scene.add_mesh("UL_1", enamel, Some(upper)).unwrap();
        let lower = scene.add_group("lower", None).unwrap();
        scene.add_mesh("LL_1", enamel, Some(lower)).unwrap();
        (scene, materials)
    }

    #[test]
    fn traversal_is_depth_first() {
        let (scene, _) = scene();
        let names: Vec<&str> = scene
            .traverse()
            .into_iter()
            .map(|id| scene.node(id).unwrap().name.as_str())
            .collect();
        assert_eq!(names, ["upper", "UR_1", "UL_1", "lower", "LL_1"]);
        assert_eq!(scene.meshes().len(), 3);
    }

    #[test]
    fn find_by_name() {
        let (scene, _) = scene();
        let id = scene.find_by_name("UL_1").unwrap();
        assert_eq!(scene.node(id).unwrap().name, "UL_1");
        assert!(scene.find_by_name("UL_9").is_none());
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let (mut scene, mut materials) = scene();
        let group = scene.add_group("tmp", None).unwrap();
        let mat = materials.add(Material::new(Color::black()));
        assert!(scene.add_mesh("m", mat, Some(NodeId::default())).is_err());
        assert!(matches!(scene.mesh_mut(group), Err(SceneError::NotAMesh(_))));
    }
}
