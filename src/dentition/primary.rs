use super::ToothNumber;

/// Permanent teeth with a primary predecessor, paired with the primary code.
pub const PRIMARY_FDI: [(u16, u16); 20] = [
    (11, 51),
    (12, 52),
    (13, 53),
    (14, 54),
    (15, 55),
    (21, 61),
    (22, 62),
    (23, 63),
    (24, 64),
    (25, 65),
    (31, 71),
    (32, 72),
    (33, 73),
    (34, 74),
    (35, 75),
    (41, 81),
    (42, 82),
    (43, 83),
    (44, 84),
    (45, 85),
];

/// Maps a permanent tooth to its primary analogue.
///
/// Returns `None` for molars and anything else without a primary predecessor.
#[must_use]
pub fn to_primary_fdi(permanent: ToothNumber) -> Option<ToothNumber> {
    PRIMARY_FDI
        .iter()
        .find(|(p, _)| *p == permanent.get())
        .map(|&(_, c)| ToothNumber::new(c))
}

/// Reverse of [`to_primary_fdi`].
#[must_use]
pub fn from_primary_fdi(primary: ToothNumber) -> Option<ToothNumber> {
    PRIMARY_FDI
        .iter()
        .find(|(_, c)| *c == primary.get())
        .map(|&(p, _)| ToothNumber::new(p))
}
