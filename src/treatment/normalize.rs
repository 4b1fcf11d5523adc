use super::TreatmentKey;

/// Normalizes a free-text treatment type: lowercase, all whitespace removed,
/// and any `placement` substring dropped.
///
/// Absent or blank input is `normal`.
#[must_use]
pub fn normalize_treatment_type(raw: Option<&str>) -> TreatmentKey {
    let Some(raw) = raw else {
        return TreatmentKey::NORMAL;
    };
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    let key = compact.replace("placement", "");
    if key.is_empty() {
        TreatmentKey::NORMAL
    } else {
        TreatmentKey::from(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> String {
        normalize_treatment_type(Some(raw)).to_string()
    }

    #[test]
    fn strips_case_whitespace_and_placement() {
        assert_eq!(norm("Crown Placement"), "crown");
        assert_eq!(norm("Root Canal"), "rootcanal");
        assert_eq!(norm("  Implant\tPlacement "), "implant");
        assert_eq!(norm("FILLING"), "filling");
    }

    #[test]
    fn absent_or_blank_is_normal() {
        assert_eq!(normalize_treatment_type(None), TreatmentKey::NORMAL);
        assert_eq!(norm(""), "normal");
        assert_eq!(norm("Placement"), "normal");
    }

    #[test]
    fn keeps_punctuation() {
        assert_eq!(norm("root_canal"), "root_canal");
    }
}
