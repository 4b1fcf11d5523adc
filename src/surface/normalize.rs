use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{parse_surfaces, SurfaceSet};
use crate::dentition::ToothNumber;
use crate::treatment::{normalize_treatment_type, TreatmentKey};

/// Surface field of a treatment record: either shorthand text or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SurfaceInput {
    /// Shorthand such as `"MOD"`.
    Text(String),
    /// One entry per surface, such as `["M", "O"]` or `["ROOT"]`.
    List(Vec<String>),
}

impl SurfaceInput {
    /// Canonical surfaces via [`parse_surfaces`], applied per list entry so
    /// that a `"ROOT"` element stays atomic.
    #[must_use]
    pub fn parse(&self, anterior: bool) -> SurfaceSet {
        match self {
            Self::Text(text) => parse_surfaces(text, anterior),
            Self::List(items) => items
                .iter()
                .flat_map(|item| parse_surfaces(item, anterior))
                .collect(),
        }
    }
}

impl From<&str> for SurfaceInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Record-level surface normalization, without synonym substitution.
///
/// - absent surfaces: `{"ROOT"}` for a root canal, otherwise `None`, meaning
///   the record covers the whole tooth;
/// - a list: each entry uppercased and trimmed, blanks dropped, deduplicated;
/// - text: split into uppercase characters, whitespace dropped.
///
/// This differs from [`parse_surfaces`], which also rewrites `B`, `P` and
/// anterior `O`. Both are kept until the clinical intent is settled.
#[must_use]
pub fn normalize_surfaces(
    surfaces: Option<&SurfaceInput>,
    tooth: ToothNumber,
    treatment_type: Option<&str>,
) -> Option<BTreeSet<String>> {
    match surfaces {
        None => {
            if normalize_treatment_type(treatment_type) == TreatmentKey::ROOT_CANAL {
                debug!(%tooth, "root canal without surfaces, using ROOT");
                Some(BTreeSet::from(["ROOT".to_owned()]))
            } else {
                None
            }
        }
        Some(SurfaceInput::List(items)) => Some(
            items
                .iter()
                .map(|s| s.trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        Some(SurfaceInput::Text(text)) => Some(
            text.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_uppercase)
                .map(String::from)
                .collect(),
        ),
    }
}
