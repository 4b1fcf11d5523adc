use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dentition::{permanent_teeth, primary_teeth, ToothNumber};
use crate::scene::{NodeId, SceneGraph};

/// Tooth number to mesh node name, as exported by the mouth model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeNameTable {
    names: BTreeMap<ToothNumber, String>,
}

impl NodeNameTable {
    /// Creates an empty table; lookups rely on the numeric fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the bundled mouth model: quadrant and position, with
    /// letters for primary teeth (`UR_1`, `LL_8`, `UL_C`).
    #[must_use]
    pub fn builtin() -> Self {
        let quadrant = |t: ToothNumber| match t.quadrant() {
            1 | 5 => "UR",
            2 | 6 => "UL",
            3 | 7 => "LL",
            _ => "LR",
        };
        let permanent = permanent_teeth().map(|t| (t, format!("{}_{}", quadrant(t), t.position())));
        let primary = primary_teeth().map(|t| {
            let letter = ['A', 'B', 'C', 'D', 'E'][usize::from(t.position() - 1)];
            (t, format!("{}_{letter}", quadrant(t)))
        });
        Self {
            names: permanent.chain(primary).collect(),
        }
    }

    /// Sets or replaces the node name for `tooth`.
    #[must_use]
    pub fn with_name(mut self, tooth: ToothNumber, name: impl Into<String>) -> Self {
        self.names.insert(tooth, name.into());
        self
    }

    #[must_use]
    pub fn get(&self, tooth: ToothNumber) -> Option<&str> {
        self.names.get(&tooth).map(String::as_str)
    }
}

/// Finds the mesh for `tooth`: exact name from `names` first, then any mesh
/// whose name contains the tooth number as a whole run of digits.
#[must_use]
pub fn find_tooth_mesh(
    scene: &SceneGraph,
    names: &NodeNameTable,
    tooth: ToothNumber,
) -> Option<NodeId> {
    let meshes = scene.meshes();
    let name_of = |id: NodeId| scene.node(id).map(|n| n.name.as_str()).unwrap_or_default();

    if let Some(expected) = names.get(tooth) {
        if let Some(id) = meshes.iter().copied().find(|&id| name_of(id) == expected) {
            return Some(id);
        }
    }

    let wanted = tooth.to_string();
    let found = meshes
        .into_iter()
        .find(|&id| digit_runs(name_of(id)).any(|run| run == wanted));
    if let Some(id) = found {
        debug!(%tooth, name = name_of(id), "tooth mesh matched by number");
    }
    found
}

/// Maximal runs of ASCII digits in `name`.
fn digit_runs(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
}
