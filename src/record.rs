use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dentition::ToothNumber;
use crate::surface::{normalize_surfaces, SurfaceInput};
use crate::treatment::{classify_treatment, TreatmentKey};

/// A clinical treatment record as supplied by the data layer.
///
/// Field names follow the API's camelCase JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    pub tooth_number: ToothNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surfaces: Option<SurfaceInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub treatment_type: Option<String>,
}

impl TreatmentRecord {
    #[must_use]
    pub fn new(tooth_number: impl Into<ToothNumber>) -> Self {
        Self {
            tooth_number: tooth_number.into(),
            surfaces: None,
            treatment_type: None,
        }
    }

    #[must_use]
    pub fn with_surfaces(mut self, surfaces: impl Into<SurfaceInput>) -> Self {
        self.surfaces = Some(surfaces.into());
        self
    }

    #[must_use]
    pub fn with_treatment(mut self, treatment_type: impl Into<String>) -> Self {
        self.treatment_type = Some(treatment_type.into());
        self
    }

    /// Chart key through the taxonomy. A record without a type is `normal`;
    /// visits such as cleanings have no key.
    #[must_use]
    pub fn treatment_key(&self) -> Option<TreatmentKey> {
        match &self.treatment_type {
            Some(label) => classify_treatment(label),
            None => Some(TreatmentKey::NORMAL),
        }
    }

    /// Raw surface tokens, or `None` for whole-tooth records.
    /// See [`normalize_surfaces`].
    #[must_use]
    pub fn surface_tokens(&self) -> Option<BTreeSet<String>> {
        normalize_surfaces(
            self.surfaces.as_ref(),
            self.tooth_number,
            self.treatment_type.as_deref(),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_json() {
        let json = r#"[
            {"toothNumber": 16, "surfaces": "MOD", "treatmentType": "Filling"},
            {"toothNumber": "36", "treatmentType": "Root Canal"},
            {"toothNumber": 11, "surfaces": ["F", "I"]}
        ]"#;
        let records: Vec<TreatmentRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].tooth_number, ToothNumber::new(36));
        assert_eq!(records[0].treatment_key(), Some(TreatmentKey::FILLING));
        assert_eq!(records[2].treatment_key(), Some(TreatmentKey::NORMAL));
        assert_eq!(
            records[1].surface_tokens(),
            Some(BTreeSet::from(["ROOT".to_owned()]))
        );
    }

    #[test]
    fn cleaning_has_no_key() {
        let record = TreatmentRecord::new(21u16).with_treatment("Cleaning");
        assert_eq!(record.treatment_key(), None);
        assert_eq!(record.surface_tokens(), None);
    }

    #[test]
    fn blank_type_is_normal() {
        for label in ["", "  "] {
            let record = TreatmentRecord::new(21u16).with_treatment(label);
            assert_eq!(record.treatment_key(), Some(TreatmentKey::NORMAL));
        }
    }

    #[test]
    fn serializes_without_absent_fields() {
        let record = TreatmentRecord::new(21u16);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"toothNumber":21}"#
        );
    }
}
