use std::collections::{BTreeMap, BTreeSet};

use super::TreatmentKey;
use crate::dentition::ToothNumber;
use crate::record::TreatmentRecord;

/// Allow-list of treatment keys. An empty filter lets everything through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreatmentFilter {
    keys: BTreeSet<TreatmentKey>,
}

impl TreatmentFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_key(mut self, key: TreatmentKey) -> Self {
        self.keys.insert(key);
        self
    }

    /// Returns `true` if records with `key` pass. Keyless records only pass an
    /// empty filter.
    #[must_use]
    pub fn allows(&self, key: Option<&TreatmentKey>) -> bool {
        if self.keys.is_empty() {
            return true;
        }
        key.is_some_and(|k| self.keys.contains(k))
    }

    /// Records that pass the filter, in input order.
    pub fn apply<'a>(
        &'a self,
        records: &'a [TreatmentRecord],
    ) -> impl Iterator<Item = &'a TreatmentRecord> + 'a {
        records
            .iter()
            .filter(|r| self.allows(r.treatment_key().as_ref()))
    }
}

impl FromIterator<TreatmentKey> for TreatmentFilter {
    fn from_iter<I: IntoIterator<Item = TreatmentKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Treatment counts across a patient's records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreatmentSummary {
    /// Number of records per key.
    pub by_key: BTreeMap<TreatmentKey, usize>,
    /// Distinct keys per tooth.
    pub by_tooth: BTreeMap<ToothNumber, BTreeSet<TreatmentKey>>,
    /// Records with no chart key (cleanings, checkups).
    pub uncharted: usize,
}

impl TreatmentSummary {
    /// Aggregates records by their taxonomy key.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TreatmentRecord>) -> Self {
        let mut summary = Self::default();
        for record in records {
            let Some(key) = record.treatment_key() else {
                summary.uncharted += 1;
                continue;
            };
            *summary.by_key.entry(key.clone()).or_default() += 1;
            summary
                .by_tooth
                .entry(record.tooth_number)
                .or_default()
                .insert(key);
        }
        summary
    }

    /// Number of records with `key`.
    #[must_use]
    pub fn count(&self, key: &TreatmentKey) -> usize {
        self.by_key.get(key).copied().unwrap_or(0)
    }

    /// Total charted records.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_key.values().sum()
    }
}
