use super::MaterialId;

slotmap::new_key_type! {
    /// Unique identifier for a node in the scene graph.
    pub struct NodeId;
}

/// Material slots of a mesh node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshBinding {
    /// Material currently rendered.
    pub material: MaterialId,
    /// Material the mesh was loaded with, possibly shared with other meshes.
    pub source: MaterialId,
}

impl MeshBinding {
    #[must_use]
    pub fn new(material: MaterialId) -> Self {
        Self {
            material,
            source: material,
        }
    }
}

/// What a node carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A transform-only grouping node.
    Group,
    /// A renderable mesh.
    Mesh(MeshBinding),
}

/// Data associated with a scene node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Node name from the loaded asset.
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl NodeData {
    /// Mesh binding, if this node is a mesh.
    #[must_use]
    pub fn mesh(&self) -> Option<&MeshBinding> {
        match &self.kind {
            NodeKind::Mesh(binding) => Some(binding),
            NodeKind::Group => None,
        }
    }

    pub fn mesh_mut(&mut self) -> Option<&mut MeshBinding> {
        match &mut self.kind {
            NodeKind::Mesh(binding) => Some(binding),
            NodeKind::Group => None,
        }
    }
}
