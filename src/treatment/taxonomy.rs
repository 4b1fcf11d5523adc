use tracing::debug;

use super::TreatmentKey;

/// Display labels and already-normalized keys, mapped to chart keys.
///
/// `None` marks visits that leave no mark on the chart. Every `Some` key must
/// also have an entry in the builtin palette.
pub const TAXONOMY: [(&str, Option<TreatmentKey>); 24] = [
    ("Crown Placement", Some(TreatmentKey::CROWN)),
    ("Crown", Some(TreatmentKey::CROWN)),
    ("crown", Some(TreatmentKey::CROWN)),
    ("Filling", Some(TreatmentKey::FILLING)),
    ("filling", Some(TreatmentKey::FILLING)),
    ("Root Canal", Some(TreatmentKey::ROOT_CANAL)),
    ("root_canal", Some(TreatmentKey::ROOT_CANAL)),
    ("rootcanal", Some(TreatmentKey::ROOT_CANAL)),
    ("Extraction", Some(TreatmentKey::EXTRACTION)),
    ("extraction", Some(TreatmentKey::EXTRACTION)),
    ("Bridge", Some(TreatmentKey::BRIDGE)),
    ("bridge", Some(TreatmentKey::BRIDGE)),
    ("Implant", Some(TreatmentKey::IMPLANT)),
    ("Implant Placement", Some(TreatmentKey::IMPLANT)),
    ("implant", Some(TreatmentKey::IMPLANT)),
    ("Veneer", Some(TreatmentKey::VENEER)),
    ("veneer", Some(TreatmentKey::VENEER)),
    ("Sealant", Some(TreatmentKey::SEALANT)),
    ("sealant", Some(TreatmentKey::SEALANT)),
    ("normal", Some(TreatmentKey::NORMAL)),
    ("Cleaning", None),
    ("cleaning", None),
    ("Checkup", None),
    ("checkup", None),
];

/// Maps a treatment label to its chart key.
///
/// Labels in [`TAXONOMY`] use the table, so "Cleaning" and "Checkup" give
/// `None`. A blank label is `normal`. Anything else falls back to the
/// lowercased label.
#[must_use]
pub fn classify_treatment(label: &str) -> Option<TreatmentKey> {
    if label.trim().is_empty() {
        return Some(TreatmentKey::NORMAL);
    }
    if let Some((_, key)) = TAXONOMY.iter().find(|(l, _)| *l == label) {
        return key.clone();
    }
    let fallback = label.to_lowercase();
    debug!(label, key = %fallback, "unmapped treatment label");
    Some(TreatmentKey::from(fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::treatment::TreatmentPalette;

    #[test]
    fn display_labels() {
        assert_eq!(classify_treatment("Crown Placement"), Some(TreatmentKey::CROWN));
        assert_eq!(classify_treatment("root_canal"), Some(TreatmentKey::ROOT_CANAL));
        assert_eq!(classify_treatment("Sealant"), Some(TreatmentKey::SEALANT));
    }

    #[test]
    fn visits_without_chart_color() {
        assert_eq!(classify_treatment("Cleaning"), None);
        assert_eq!(classify_treatment("Checkup"), None);
    }

    #[test]
    fn blank_labels_are_normal() {
        for label in ["", "   ", "\t\n"] {
            assert_eq!(classify_treatment(label), Some(TreatmentKey::NORMAL), "{label:?}");
        }
    }

    #[test]
    fn unknown_labels_are_lowercased() {
        assert_eq!(
            classify_treatment("Orthodontic Retainer"),
            Some(TreatmentKey::from("orthodontic retainer".to_owned()))
        );
    }

    #[test]
    fn every_charted_key_has_a_builtin_color() {
        let palette = TreatmentPalette::builtin();
        for (label, key) in &TAXONOMY {
            if let Some(key) = key {
                assert!(palette.contains(key), "{label} -> {key} has no color");
            }
        }
    }
}
