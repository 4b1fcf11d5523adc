use std::collections::HashSet;

use crate::dentition::{classify, ToothClass, ToothNumber};
use crate::index_map::{IndexId, IndexMaps};
use crate::surface::{parse_surfaces, SurfaceCode, SurfaceInput, SurfaceSet};

/// Resolves a tooth and its surfaces to material indices on the tooth model.
///
/// Output is deduplicated and insertion-ordered: parsed surfaces in
/// [`SurfaceCode`] order, then contact, then root, each entry keeping its map
/// order. Resolution never fails; unknown teeth, empty maps and unparseable
/// surfaces give an empty or partial result.
#[derive(Debug, Clone)]
pub struct ResolveHighlightIndices {
    tooth: ToothNumber,
    class: ToothClass,
    surfaces: SurfaceSet,
    include_contact: bool,
    include_root: bool,
}

impl ResolveHighlightIndices {
    /// Creates a new query from surface shorthand such as `"MOD"`.
    ///
    /// Synonyms are substituted (see [`parse_surfaces`]).
    #[must_use]
    pub fn new(tooth: ToothNumber, surfaces: &str) -> Self {
        let class = classify(tooth);
        let surfaces = parse_surfaces(surfaces, class == ToothClass::Anterior);
        Self::with_surface_set(tooth, surfaces)
    }

    /// Creates a new query from a record's surface field.
    #[must_use]
    pub fn from_input(tooth: ToothNumber, surfaces: &SurfaceInput) -> Self {
        let class = classify(tooth);
        let surfaces = surfaces.parse(class == ToothClass::Anterior);
        Self::with_surface_set(tooth, surfaces)
    }

    /// Creates a new query from already-canonical surfaces.
    #[must_use]
    pub fn with_surface_set(tooth: ToothNumber, surfaces: SurfaceSet) -> Self {
        Self {
            tooth,
            class: classify(tooth),
            surfaces,
            include_contact: false,
            include_root: false,
        }
    }

    /// Also highlight the interproximal contact area.
    #[must_use]
    pub fn with_contact(mut self, include: bool) -> Self {
        self.include_contact = include;
        self
    }

    /// Also highlight the root, whether or not `ROOT` was requested.
    #[must_use]
    pub fn with_root(mut self, include: bool) -> Self {
        self.include_root = include;
        self
    }

    /// The canonical surfaces this query covers.
    #[must_use]
    pub fn surfaces(&self) -> &SurfaceSet {
        &self.surfaces
    }

    /// Executes the query, returning stringified index identifiers.
    #[must_use]
    pub fn execute(&self, maps: &IndexMaps) -> Vec<String> {
        let lookup = |surface| maps.lookup(self.tooth, self.class, surface);
        let mut acc = IndexAccumulator::default();

        for &surface in &self.surfaces {
            acc.extend(lookup(surface));
        }

        if self.include_contact {
            let contact = lookup(SurfaceCode::Contact);
            if contact.is_empty() {
                // No contact geometry: mesial and distal stand in for it.
                acc.extend(lookup(SurfaceCode::Mesial));
                acc.extend(lookup(SurfaceCode::Distal));
            } else {
                acc.extend(contact);
            }
        }

        if self.include_root {
            acc.extend(lookup(SurfaceCode::Root));
        }

        acc.ids
    }
}

/// Insertion-ordered set of stringified ids.
#[derive(Default)]
struct IndexAccumulator {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl IndexAccumulator {
    fn extend(&mut self, ids: &[IndexId]) {
        for id in ids {
            let id = id.to_string();
            if self.seen.insert(id.clone()) {
                self.ids.push(id);
            }
        }
    }
}
