mod class;
mod name;
mod primary;

pub use class::{classify, is_anterior, ToothClass};
pub use name::{display_name, quadrant_name};
pub use primary::{from_primary_fdi, to_primary_fdi, PRIMARY_FDI};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ToothError;

/// A tooth identifier in two-digit FDI notation.
///
/// The first digit is the quadrant (1-4 permanent, 5-8 primary), the second
/// the position counted from the midline. Construction is deliberately
/// permissive: any integer is accepted, and [`ToothNumber::validate`] is the
/// opt-in strict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawToothNumber", into = "u16")]
pub struct ToothNumber(u16);

/// Dental arch a tooth sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    /// Maxillary teeth (quadrants 1, 2, 5, 6).
    Upper,
    /// Mandibular teeth (quadrants 3, 4, 7, 8).
    Lower,
}

impl ToothNumber {
    /// Wraps a raw tooth number without validating it.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Quadrant digit (tens place).
    #[must_use]
    pub const fn quadrant(self) -> u16 {
        self.0 / 10
    }

    /// Position digit counted from the midline (units place).
    #[must_use]
    pub const fn position(self) -> u16 {
        self.0 % 10
    }

    /// Returns `true` for permanent codes 11-18, 21-28, 31-38, 41-48.
    #[must_use]
    pub const fn is_permanent(self) -> bool {
        matches!(self.quadrant(), 1..=4) && matches!(self.position(), 1..=8)
    }

    /// Returns `true` for primary codes 51-55, 61-65, 71-75, 81-85.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self.quadrant(), 5..=8) && matches!(self.position(), 1..=5)
    }

    /// Returns `true` if the number is a valid permanent or primary code.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.is_permanent() || self.is_primary()
    }

    /// Strict check for callers that want to reject bad input up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the number is not a valid FDI code.
    pub fn validate(self) -> Result<Self, ToothError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ToothError::InvalidFdi(self.0))
        }
    }

    /// Returns the arch, or `None` for numbers outside the FDI quadrants.
    #[must_use]
    pub fn arch(self) -> Option<Arch> {
        match self.quadrant() {
            1 | 2 | 5 | 6 => Some(Arch::Upper),
            3 | 4 | 7 | 8 => Some(Arch::Lower),
            _ => None,
        }
    }

    /// Anterior/posterior class of this tooth. See [`classify`].
    #[must_use]
    pub fn class(self) -> ToothClass {
        classify(self)
    }
}

/// Iterates the 32 permanent teeth in quadrant order.
pub fn permanent_teeth() -> impl Iterator<Item = ToothNumber> {
    (1..=4u16).flat_map(|q| (1..=8u16).map(move |p| ToothNumber(q * 10 + p)))
}

/// Iterates the 20 primary teeth in quadrant order.
pub fn primary_teeth() -> impl Iterator<Item = ToothNumber> {
    (5..=8u16).flat_map(|q| (1..=5u16).map(move |p| ToothNumber(q * 10 + p)))
}

impl From<u16> for ToothNumber {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<ToothNumber> for u16 {
    fn from(tooth: ToothNumber) -> Self {
        tooth.0
    }
}

impl fmt::Display for ToothNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToothNumber {
    type Err = ToothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .map(Self)
            .map_err(|_| ToothError::NotANumber(s.to_owned()))
    }
}

/// Wire form of a tooth number: records carry either `16` or `"16"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawToothNumber {
    Int(u16),
    Text(String),
}

impl TryFrom<RawToothNumber> for ToothNumber {
    type Error = ToothError;

    fn try_from(raw: RawToothNumber) -> Result<Self, Self::Error> {
        match raw {
            RawToothNumber::Int(n) => Ok(Self(n)),
            RawToothNumber::Text(s) => s.parse(),
        }
    }
}
