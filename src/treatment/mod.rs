mod normalize;
mod palette;
mod summary;
mod taxonomy;

pub use normalize::normalize_treatment_type;
pub use palette::TreatmentPalette;
pub use summary::{TreatmentFilter, TreatmentSummary};
pub use taxonomy::{classify_treatment, TAXONOMY};

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Internal treatment identifier used for coloring, filtering and aggregation.
///
/// Keys are lowercase. Known keys are associated constants with no
/// whitespace; an unmapped label keeps its own spacing in its owned key
/// (`"orthodontic retainer"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreatmentKey(Cow<'static, str>);

impl TreatmentKey {
    pub const NORMAL: Self = Self::from_static("normal");
    pub const CROWN: Self = Self::from_static("crown");
    pub const FILLING: Self = Self::from_static("filling");
    pub const ROOT_CANAL: Self = Self::from_static("rootcanal");
    pub const EXTRACTION: Self = Self::from_static("extraction");
    pub const BRIDGE: Self = Self::from_static("bridge");
    pub const IMPLANT: Self = Self::from_static("implant");
    pub const VENEER: Self = Self::from_static("veneer");
    pub const SEALANT: Self = Self::from_static("sealant");

    /// Every key with a chart color, in legend order.
    pub const KNOWN: [Self; 9] = [
        Self::NORMAL,
        Self::CROWN,
        Self::FILLING,
        Self::ROOT_CANAL,
        Self::EXTRACTION,
        Self::BRIDGE,
        Self::IMPLANT,
        Self::VENEER,
        Self::SEALANT,
    ];

    #[must_use]
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Returns the key text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TreatmentKey {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

impl fmt::Display for TreatmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
