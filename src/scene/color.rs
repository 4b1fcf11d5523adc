use std::fmt;
use std::str::FromStr;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Linear RGB color with components in `[0, 1]`.
///
/// Serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(Vector3<f32>);

impl Color {
    /// Creates a color from components in `[0, 1]`, clamping out-of-range values.
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vector3::new(r, g, b).map(|c| c.clamp(0.0, 1.0)))
    }

    /// Creates a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(Vector3::new(r, g, b).map(|c| f32::from(c) / 255.0))
    }

    #[must_use]
    pub fn black() -> Self {
        Self(Vector3::zeros())
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(hex.to_owned());
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats as `#rrggbb`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Channels rounded to 8 bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rgb8(&self) -> [u8; 3] {
        let c = self.0.map(|v| (v * 255.0).round() as u8);
        [c.x, c.y, c.z]
    }

    /// Component-wise scale, clamped to `[0, 1]`.
    #[must_use]
    pub fn scaled(&self, factor: f32) -> Self {
        Self((self.0 * factor).map(|c| c.clamp(0.0, 1.0)))
    }

    #[must_use]
    pub fn as_vector(&self) -> &Vector3<f32> {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
