use std::collections::BTreeSet;

use serde::Serialize;

use super::ResolveHighlightIndices;
use crate::dentition::{ToothClass, ToothNumber};
use crate::index_map::IndexMaps;
use crate::record::TreatmentRecord;
use crate::scene::Color;
use crate::surface::{parse_surfaces, SurfaceCode, SurfaceSet};
use crate::treatment::{TreatmentFilter, TreatmentKey, TreatmentPalette};

/// Everything a renderer and the legend need for one treatment record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMark {
    pub tooth: ToothNumber,
    pub class: ToothClass,
    /// Taxonomy key, `None` for visits without a chart color.
    pub treatment: Option<TreatmentKey>,
    pub color: Option<Color>,
    /// Raw surface tokens; `None` when the record covers the whole tooth.
    pub surfaces: Option<BTreeSet<String>>,
    /// Material indices to paint.
    pub indices: Vec<String>,
    /// `true` when no surfaces were given and every mapped part is painted.
    pub whole_tooth: bool,
}

/// Runs one record through taxonomy, surface parsing and index resolution.
pub struct ResolveTreatment<'a> {
    record: &'a TreatmentRecord,
}

impl<'a> ResolveTreatment<'a> {
    /// Creates a new `ResolveTreatment` operation.
    #[must_use]
    pub fn new(record: &'a TreatmentRecord) -> Self {
        Self { record }
    }

    /// Executes the resolution.
    ///
    /// A record with surfaces paints those surfaces. A record without
    /// surfaces paints the root for root canals and the whole tooth otherwise.
    #[must_use]
    pub fn execute(&self, maps: &IndexMaps, palette: &TreatmentPalette) -> ChartMark {
        let record = self.record;
        let tooth = record.tooth_number;
        let class = tooth.class();
        let anterior = class == ToothClass::Anterior;
        let treatment = record.treatment_key();
        let tokens = record.surface_tokens().or_else(|| {
            let root_canal =
                record.surfaces.is_none() && treatment.as_ref() == Some(&TreatmentKey::ROOT_CANAL);
            root_canal.then(|| BTreeSet::from([SurfaceCode::Root.to_string()]))
        });

        let (query, whole_tooth) = match (&record.surfaces, &tokens) {
            (Some(input), _) => (ResolveHighlightIndices::from_input(tooth, input), false),
            (None, Some(tokens)) => {
                let set: SurfaceSet = tokens
                    .iter()
                    .flat_map(|t| parse_surfaces(t, anterior))
                    .collect();
                (ResolveHighlightIndices::with_surface_set(tooth, set), false)
            }
            (None, None) => {
                let all = maps.surfaces(tooth, class).into_iter().collect();
                (ResolveHighlightIndices::with_surface_set(tooth, all), true)
            }
        };

        ChartMark {
            tooth,
            class,
            color: treatment.as_ref().map(|k| palette.color_for(k)),
            treatment,
            surfaces: tokens,
            indices: query.execute(maps),
            whole_tooth,
        }
    }
}

/// Resolves a patient's records, skipping those the filter rejects.
pub struct ResolveChart<'a> {
    records: &'a [TreatmentRecord],
    filter: TreatmentFilter,
}

impl<'a> ResolveChart<'a> {
    /// Creates a new `ResolveChart` operation over all records.
    #[must_use]
    pub fn new(records: &'a [TreatmentRecord]) -> Self {
        Self {
            records,
            filter: TreatmentFilter::default(),
        }
    }

    /// Restricts output to records passing `filter`.
    #[must_use]
    pub fn with_filter(mut self, filter: TreatmentFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Executes the resolution, one mark per kept record in input order.
    #[must_use]
    pub fn execute(&self, maps: &IndexMaps, palette: &TreatmentPalette) -> Vec<ChartMark> {
        self.filter
            .apply(self.records)
            .map(|r| ResolveTreatment::new(r).execute(maps, palette))
            .collect()
    }
}
