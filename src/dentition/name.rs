use super::{from_primary_fdi, ToothNumber};

/// Clinical name of a tooth, e.g. "First molar".
///
/// Primary dentition has no premolars, so with `is_child` set positions 4 and 5
/// read "First/Second primary molar". Primary codes (51-85) are accepted and
/// named as child teeth. Unmapped numbers return "Tooth".
#[must_use]
pub fn display_name(tooth: ToothNumber, is_child: bool) -> &'static str {
    let (tooth, is_child) = match from_primary_fdi(tooth) {
        Some(permanent) => (permanent, true),
        None => (tooth, is_child),
    };
    if !tooth.is_permanent() {
        return "Tooth";
    }
    match (tooth.position(), is_child) {
        (1, _) => "Central incisor",
        (2, _) => "Lateral incisor",
        (3, _) => "Canine",
        (4, false) => "First premolar",
        (4, true) => "First primary molar",
        (5, false) => "Second premolar",
        (5, true) => "Second primary molar",
        (6, _) => "First molar",
        (7, _) => "Second molar",
        (8, _) => "Third molar (Wisdom)",
        _ => "Tooth",
    }
}

/// Patient-facing quadrant label ("Upper right", ...), or `None` outside FDI.
#[must_use]
pub fn quadrant_name(tooth: ToothNumber) -> Option<&'static str> {
    match tooth.quadrant() {
        1 | 5 => Some("Upper right"),
        2 | 6 => Some("Upper left"),
        3 | 7 => Some("Lower left"),
        4 | 8 => Some("Lower right"),
        _ => None,
    }
}
