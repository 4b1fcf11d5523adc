use super::{SurfaceCode, SurfaceSet};

/// Parses clinical surface shorthand ("MOD", "B", "ROOT") into a canonical set.
///
/// Input is uppercased and all whitespace removed. The exact token `ROOT` is
/// atomic. Every other character maps through the synonym table: `B` to
/// facial, `P` to lingual, and `O` to incisal when `anterior` is set.
/// Duplicates collapse. Empty input yields an empty set.
#[must_use]
pub fn parse_surfaces(raw: &str, anterior: bool) -> SurfaceSet {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect();

    if cleaned == "ROOT" {
        return SurfaceSet::from([SurfaceCode::Root]);
    }

    cleaned
        .chars()
        .map(|c| match c {
            'B' => SurfaceCode::Facial,
            'P' => SurfaceCode::Lingual,
            'O' if anterior => SurfaceCode::Incisal,
            other => SurfaceCode::from_letter(other),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::SurfaceCode::{
        Distal, Facial, Incisal, Letter, Lingual, Mesial, Occlusal, Root,
    };

    #[test]
    fn empty_input() {
        assert!(parse_surfaces("", true).is_empty());
        assert!(parse_surfaces("   ", false).is_empty());
    }

    #[test]
    fn root_is_atomic() {
        for anterior in [true, false] {
            assert_eq!(parse_surfaces("ROOT", anterior), SurfaceSet::from([Root]));
            assert_eq!(parse_surfaces(" root ", anterior), SurfaceSet::from([Root]));
        }
    }

    #[test]
    fn synonyms_depend_on_class() {
        assert_eq!(
            parse_surfaces("BOL", true),
            SurfaceSet::from([Facial, Incisal, Lingual])
        );
        assert_eq!(
            parse_surfaces("BOL", false),
            SurfaceSet::from([Facial, Occlusal, Lingual])
        );
    }

    #[test]
    fn lowercase_and_duplicates() {
        assert_eq!(
            parse_surfaces("m o d m", false),
            SurfaceSet::from([Mesial, Occlusal, Distal])
        );
        assert_eq!(parse_surfaces("PL", false), SurfaceSet::from([Lingual]));
    }

    #[test]
    fn root_inside_longer_string_is_letters() {
        assert_eq!(
            parse_surfaces("MROOT", false),
            SurfaceSet::from([Mesial, Letter('R'), Occlusal, Letter('T')])
        );
    }
}
