use serde::{Deserialize, Serialize};

use crate::scene::{Color, Material};

/// Appearance of the selected tooth; every other tooth gets its loaded
/// material with the glow switched off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightStyle {
    /// Base color painted on the selected tooth.
    pub color: Color,
    /// Emissive glow color of the selected tooth.
    pub glow: Color,
    /// Glow strength of the selected tooth.
    pub glow_intensity: f32,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x5c, 0xc8, 0xff),
            glow: Color::from_rgb8(0x1e, 0x90, 0xff),
            glow_intensity: 0.6,
        }
    }
}

/// The two looks a tooth mesh can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Look {
    Dimmed,
    Highlighted,
}

impl HighlightStyle {
    /// Derives the material for `look` from the mesh's loaded material.
    pub(crate) fn restyle(&self, source: &Material, look: Look) -> Material {
        let mut material = source.clone();
        match look {
            Look::Dimmed => {
                material.emissive = Color::black();
                material.emissive_intensity = 0.0;
            }
            Look::Highlighted => {
                material.base_color = self.color;
                material.emissive = self.glow;
                material.emissive_intensity = self.glow_intensity;
            }
        }
        material
    }
}
