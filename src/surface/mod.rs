mod normalize;
mod parse;

pub use normalize::{normalize_surfaces, SurfaceInput};
pub use parse::parse_surfaces;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SurfaceError;

/// A canonical set of surfaces, ordered by [`SurfaceCode`].
pub type SurfaceSet = BTreeSet<SurfaceCode>;

/// An anatomical tooth surface, or one of the synthetic aggregates.
///
/// Variant order is the iteration order of a [`SurfaceSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SurfaceCode {
    /// `F`: facial, also written buccal (`B`).
    Facial,
    /// `L`: lingual, also written palatal (`P`).
    Lingual,
    /// `M`: mesial.
    Mesial,
    /// `D`: distal.
    Distal,
    /// `O`: occlusal, posterior teeth only.
    Occlusal,
    /// `I`: incisal, anterior teeth only.
    Incisal,
    /// `C`: interproximal contact.
    Contact,
    /// `ROOT`: the whole root. Never split into letters.
    Root,
    /// Any other single letter. Kept so unknown input degrades to an empty
    /// index lookup instead of being rejected.
    Letter(char),
}

impl SurfaceCode {
    /// Maps one uppercase letter to its code, without synonym substitution.
    #[must_use]
    pub fn from_letter(c: char) -> Self {
        match c {
            'F' => Self::Facial,
            'L' => Self::Lingual,
            'M' => Self::Mesial,
            'D' => Self::Distal,
            'O' => Self::Occlusal,
            'I' => Self::Incisal,
            'C' => Self::Contact,
            other => Self::Letter(other),
        }
    }
}

impl fmt::Display for SurfaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Facial => "F",
            Self::Lingual => "L",
            Self::Mesial => "M",
            Self::Distal => "D",
            Self::Occlusal => "O",
            Self::Incisal => "I",
            Self::Contact => "C",
            Self::Root => "ROOT",
            Self::Letter(c) => return write!(f, "{c}"),
        };
        f.write_str(s)
    }
}

impl FromStr for SurfaceCode {
    type Err = SurfaceError;

    /// Strict parse of a single code, as used for config keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        if upper == "ROOT" {
            return Ok(Self::Root);
        }
        let mut chars = upper.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(SurfaceError::Empty),
            (Some(c), None) if c.is_alphabetic() => Ok(Self::from_letter(c)),
            _ => Err(SurfaceError::Unknown(s.to_owned())),
        }
    }
}

impl TryFrom<String> for SurfaceCode {
    type Error = SurfaceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SurfaceCode> for String {
    fn from(code: SurfaceCode) -> Self {
        code.to_string()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_from_str() {
        for code in [
            SurfaceCode::Facial,
            SurfaceCode::Lingual,
            SurfaceCode::Mesial,
            SurfaceCode::Distal,
            SurfaceCode::Occlusal,
            SurfaceCode::Incisal,
            SurfaceCode::Contact,
            SurfaceCode::Root,
            SurfaceCode::Letter('X'),
        ] {
            assert_eq!(code.to_string().parse::<SurfaceCode>().unwrap(), code);
        }
    }

    #[test]
    fn strict_parse_rejects_words() {
        assert!(matches!("".parse::<SurfaceCode>(), Err(SurfaceError::Empty)));
        assert!(matches!(
            "MOD".parse::<SurfaceCode>(),
            Err(SurfaceError::Unknown(_))
        ));
        assert!("7".parse::<SurfaceCode>().is_err());
        assert_eq!("root".parse::<SurfaceCode>().unwrap(), SurfaceCode::Root);
    }

    #[test]
    fn set_order_follows_variant_order() {
        let set: SurfaceSet = [SurfaceCode::Root, SurfaceCode::Distal, SurfaceCode::Facial]
            .into_iter()
            .collect();
        let keys: Vec<String> = set.iter().map(ToString::to_string).collect();
        assert_eq!(keys, ["F", "D", "ROOT"]);
    }
}
