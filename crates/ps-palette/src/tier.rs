//! The ten fixed shade tiers of a palette.
//!
//! A tier names a position in the lightness ramp. Its target lightness is
//! a fixed table lookup, independent of the base color: 50 is always the
//! lightest (96%) and 900 always the darkest (10%).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PaletteError;

/// One of the ten shade tiers, ordered lightest → darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Tier {
    T50,
    T100,
    T200,
    T300,
    T400,
    T500,
    T600,
    T700,
    T800,
    T900,
}

impl Tier {
    /// Every tier, lightest first.
    pub const ALL: [Self; 10] = [
        Self::T50, Self::T100, Self::T200, Self::T300, Self::T400,
        Self::T500, Self::T600, Self::T700, Self::T800, Self::T900,
    ];

    /// All tiers as a slice, lightest first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The numeric tier name (50, 100, ... 900).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::T50 => 50,
            Self::T100 => 100,
            Self::T200 => 200,
            Self::T300 => 300,
            Self::T400 => 400,
            Self::T500 => 500,
            Self::T600 => 600,
            Self::T700 => 700,
            Self::T800 => 800,
            Self::T900 => 900,
        }
    }

    /// Target HSL lightness in percent.
    #[must_use]
    pub const fn lightness(self) -> u8 {
        match self {
            Self::T50 => 96,
            Self::T100 => 90,
            Self::T200 => 80,
            Self::T300 => 70,
            Self::T400 => 60,
            Self::T500 => 50,
            Self::T600 => 40,
            Self::T700 => 30,
            Self::T800 => 20,
            Self::T900 => 10,
        }
    }

    /// Position in [`Tier::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a tier by its numeric name.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }
}

impl From<Tier> for u16 {
    fn from(tier: Tier) -> Self {
        tier.value()
    }
}

impl TryFrom<u16> for Tier {
    type Error = PaletteError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(PaletteError::UnknownTier(value))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
