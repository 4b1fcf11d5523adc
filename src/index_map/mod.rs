mod builtin;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dentition::{ToothClass, ToothNumber};
use crate::surface::SurfaceCode;

/// A material sub-part of a tooth mesh, 1-based per model.
///
/// Models name their parts either by number or by string; consumers always
/// see the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexId {
    Number(u32),
    Name(String),
}

impl fmt::Display for IndexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<u32> for IndexId {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for IndexId {
    fn from(s: &str) -> Self {
        Self::Name(s.to_owned())
    }
}

/// Surface to ordered material indices, for one tooth or one class.
pub type SurfaceIndices = BTreeMap<SurfaceCode, Vec<IndexId>>;

/// Class defaults plus per-tooth overrides for one tooth model.
///
/// Lookup is total: a surface missing from both layers resolves to an empty
/// slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMaps {
    /// Indices shared by every tooth of a class.
    #[serde(default)]
    pub default: BTreeMap<ToothClass, SurfaceIndices>,
    /// Indices for teeth whose mesh deviates from the class default.
    #[serde(default)]
    pub overrides: BTreeMap<ToothNumber, SurfaceIndices>,
}

impl IndexMaps {
    /// Creates empty maps.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a class default entry.
    #[must_use]
    pub fn with_default<I>(mut self, class: ToothClass, surface: SurfaceCode, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<IndexId>,
    {
        self.default
            .entry(class)
            .or_default()
            .insert(surface, ids.into_iter().map(Into::into).collect());
        self
    }

    /// Adds or replaces a per-tooth override entry.
    #[must_use]
    pub fn with_override<I>(mut self, tooth: ToothNumber, surface: SurfaceCode, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<IndexId>,
    {
        self.overrides
            .entry(tooth)
            .or_default()
            .insert(surface, ids.into_iter().map(Into::into).collect());
        self
    }

    /// Two-level lookup: a non-empty override for `tooth` wins, then the class
    /// default, then nothing.
    #[must_use]
    pub fn lookup(
        &self,
        tooth: ToothNumber,
        class: ToothClass,
        surface: SurfaceCode,
    ) -> &[IndexId] {
        let overridden = self
            .overrides
            .get(&tooth)
            .and_then(|m| m.get(&surface))
            .filter(|ids| !ids.is_empty());
        if let Some(ids) = overridden {
            debug!(%tooth, %surface, "override index entry shadows class default");
            return ids;
        }
        self.default
            .get(&class)
            .and_then(|m| m.get(&surface))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Surfaces that resolve to at least one index for `tooth`, in surface order.
    #[must_use]
    pub fn surfaces(&self, tooth: ToothNumber, class: ToothClass) -> Vec<SurfaceCode> {
        let mut keys: Vec<SurfaceCode> = self
            .default
            .get(&class)
            .into_iter()
            .chain(self.overrides.get(&tooth))
            .flat_map(BTreeMap::keys)
            .copied()
            .filter(|&s| !self.lookup(tooth, class, s).is_empty())
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Overlays `other`: its class entries and per-tooth entries replace ours
    /// key by key.
    pub fn merge(&mut self, other: IndexMaps) {
        for (class, entries) in other.default {
            self.default.entry(class).or_default().extend(entries);
        }
        for (tooth, entries) in other.overrides {
            self.overrides.entry(tooth).or_default().extend(entries);
        }
    }
}
