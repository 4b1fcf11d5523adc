mod style;
mod target;

pub use style::HighlightStyle;
pub use target::{find_tooth_mesh, NodeNameTable};

use slotmap::SecondaryMap;
use style::Look;
use tracing::warn;

use crate::dentition::ToothNumber;
use crate::error::SceneError;
use crate::scene::{MaterialId, MaterialRegistry, NodeId, SceneGraph};

/// Which tooth is currently emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightState {
    /// Every tooth is dimmed.
    #[default]
    NoSelection,
    /// One tooth mesh is highlighted, the rest dimmed.
    Selected { tooth: ToothNumber, node: NodeId },
}

/// How much of the scene a highlight request touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightStrategy {
    /// Restyle every mesh on every request.
    #[default]
    ResetAll,
    /// After the first full pass, restyle only the previous and the new
    /// target. Call [`ToothHighlighter::invalidate`] after adding meshes.
    Diffed,
}

/// Whole-tooth emphasis on a caller-owned scene.
///
/// Each request dims every tooth and highlights the one asked for. Meshes
/// never have their loaded (possibly shared) material changed: the first
/// restyle gives a mesh its own copy in the registry, and later restyles
/// rewrite that copy from the loaded material. Only copies this highlighter
/// created are ever rewritten or removed; a mesh the caller rebinds gets a
/// fresh copy on its next restyle. Requests are synchronous and must not
/// interleave on the same scene.
#[derive(Debug, Clone, Default)]
pub struct ToothHighlighter {
    names: NodeNameTable,
    style: HighlightStyle,
    strategy: HighlightStrategy,
    state: HighlightState,
    primed: bool,
    copies: SecondaryMap<NodeId, MaterialId>,
}

impl ToothHighlighter {
    /// Creates a highlighter resolving teeth through `names`.
    #[must_use]
    pub fn new(names: NodeNameTable) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: HighlightStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Current selection.
    #[must_use]
    pub fn state(&self) -> HighlightState {
        self.state
    }

    /// Forces the next request to restyle every mesh.
    pub fn invalidate(&mut self) {
        self.primed = false;
    }

    /// Highlights `tooth` and dims everything else.
    ///
    /// If no mesh matches, the scene is left fully dimmed and the state is
    /// [`HighlightState::NoSelection`]. Meshes whose material is missing from
    /// the registry are skipped with a warning.
    pub fn highlight(
        &mut self,
        tooth: ToothNumber,
        scene: &mut SceneGraph,
        materials: &mut MaterialRegistry,
    ) -> HighlightState {
        let target = find_tooth_mesh(scene, &self.names, tooth);

        if self.strategy == HighlightStrategy::Diffed && self.primed {
            if let HighlightState::Selected { node, .. } = self.state {
                self.restyle(node, Look::Dimmed, scene, materials);
            }
        } else {
            for node in scene.meshes() {
                self.restyle(node, Look::Dimmed, scene, materials);
            }
            self.primed = true;
        }

        self.state = match target {
            Some(node) => {
                self.restyle(node, Look::Highlighted, scene, materials);
                HighlightState::Selected { tooth, node }
            }
            None => {
                warn!(%tooth, "no mesh found for tooth, nothing highlighted");
                HighlightState::NoSelection
            }
        };
        self.state
    }

    /// Dims every tooth.
    pub fn clear(&mut self, scene: &mut SceneGraph, materials: &mut MaterialRegistry) {
        for node in scene.meshes() {
            self.restyle(node, Look::Dimmed, scene, materials);
        }
        self.primed = true;
        self.state = HighlightState::NoSelection;
    }

    /// Drops the copies this highlighter created and points meshes still
    /// rendering one back at their loaded material.
    pub fn release(&mut self, scene: &mut SceneGraph, materials: &mut MaterialRegistry) {
        for (node, copy) in self.copies.drain() {
            materials.remove(copy);
            if let Ok(binding) = scene.mesh_mut(node) {
                if binding.material == copy {
                    binding.material = binding.source;
                }
            }
        }
        self.primed = false;
        self.state = HighlightState::NoSelection;
    }

    fn restyle(
        &mut self,
        node: NodeId,
        look: Look,
        scene: &mut SceneGraph,
        materials: &mut MaterialRegistry,
    ) {
        if let Err(err) = self.try_restyle(node, look, scene, materials) {
            warn!(?node, %err, "could not restyle tooth mesh");
        }
    }

    fn try_restyle(
        &mut self,
        node: NodeId,
        look: Look,
        scene: &mut SceneGraph,
        materials: &mut MaterialRegistry,
    ) -> Result<(), SceneError> {
        let binding = scene.mesh_mut(node)?;
        let restyled = self.style.restyle(materials.get(binding.source)?, look);
        let own_copy = self
            .copies
            .get(node)
            .copied()
            .filter(|&copy| copy == binding.material && materials.contains(copy));
        if let Some(copy) = own_copy {
            *materials.get_mut(copy)? = restyled;
        } else {
            if let Some(stale) = self.copies.remove(node) {
                materials.remove(stale);
            }
            let copy = materials.add(restyled);
            binding.material = copy;
            self.copies.insert(node, copy);
        }
        Ok(())
    }
}
