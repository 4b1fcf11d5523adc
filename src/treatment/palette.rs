use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::TreatmentKey;
use crate::scene::Color;

/// Stable treatment key to chart color table shared with legend and list UIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreatmentPalette {
    colors: BTreeMap<TreatmentKey, Color>,
}

impl TreatmentPalette {
    /// The default chart colors for every key in [`TreatmentKey::KNOWN`].
    #[must_use]
    pub fn builtin() -> Self {
        let colors = [
            (TreatmentKey::NORMAL, Color::from_rgb8(0xf4, 0xf1, 0xe8)),
            (TreatmentKey::CROWN, Color::from_rgb8(0xf2, 0xc1, 0x4e)),
            (TreatmentKey::FILLING, Color::from_rgb8(0x4a, 0x90, 0xe2)),
            (TreatmentKey::ROOT_CANAL, Color::from_rgb8(0xe0, 0x4f, 0x5f)),
            (TreatmentKey::EXTRACTION, Color::from_rgb8(0x80, 0x80, 0x80)),
            (TreatmentKey::BRIDGE, Color::from_rgb8(0x9b, 0x59, 0xb6)),
            (TreatmentKey::IMPLANT, Color::from_rgb8(0x2e, 0xcc, 0x71)),
            (TreatmentKey::VENEER, Color::from_rgb8(0xf3, 0x9c, 0x12)),
            (TreatmentKey::SEALANT, Color::from_rgb8(0x1a, 0xbc, 0x9c)),
        ];
        Self {
            colors: colors.into_iter().collect(),
        }
    }

    /// Sets or replaces the color for `key`.
    #[must_use]
    pub fn with_color(mut self, key: TreatmentKey, color: Color) -> Self {
        self.colors.insert(key, color);
        self
    }

    /// Returns `true` if `key` has its own entry.
    #[must_use]
    pub fn contains(&self, key: &TreatmentKey) -> bool {
        self.colors.contains_key(key)
    }

    /// Color for `key`, falling back to the `normal` color, then to white.
    #[must_use]
    pub fn color_for(&self, key: &TreatmentKey) -> Color {
        self.colors
            .get(key)
            .or_else(|| self.colors.get(&TreatmentKey::NORMAL))
            .copied()
            .unwrap_or_else(|| Color::new(1.0, 1.0, 1.0))
    }

    /// `(key, color)` pairs in key order.
    pub fn legend(&self) -> impl Iterator<Item = (&TreatmentKey, Color)> {
        self.colors.iter().map(|(k, c)| (k, *c))
    }

    /// Overlays `other` on top of this palette.
    pub fn merge(&mut self, other: TreatmentPalette) {
        self.colors.extend(other.colors);
    }
}

impl Default for TreatmentPalette {
    fn default() -> Self {
        Self::builtin()
    }
}
