use serde::{Deserialize, Serialize};

use super::ToothNumber;

/// Front teeth (incisors and canines).
const ANTERIOR: [u16; 12] = [11, 12, 13, 21, 22, 23, 31, 32, 33, 41, 42, 43];

/// Dental arch class, which decides the surfaces a tooth can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToothClass {
    /// Incisors and canines: incisal edge, no occlusal surface.
    Anterior,
    /// Premolars and molars: occlusal surface.
    Posterior,
}

impl ToothClass {
    /// Lowercase name used as a config key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anterior => "anterior",
            Self::Posterior => "posterior",
        }
    }
}

/// Returns `true` if `tooth` is one of the twelve permanent anterior teeth.
#[must_use]
pub fn is_anterior(tooth: ToothNumber) -> bool {
    ANTERIOR.contains(&tooth.get())
}

/// Classifies a tooth. Anything outside the anterior set, including invalid
/// numbers, is posterior.
#[must_use]
pub fn classify(tooth: ToothNumber) -> ToothClass {
    if is_anterior(tooth) {
        ToothClass::Anterior
    } else {
        ToothClass::Posterior
    }
}
