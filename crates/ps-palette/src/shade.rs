//! Shade generation — from one base color to a ten-tier ramp.
//!
//! Only the base color's hue and saturation survive. Lightness comes from
//! the fixed [`Tier`] table, hue is rotated by the hue shift and shared by
//! every shade, and saturation is scaled by vibrancy then shaped per tier:
//!
//! ```text
//! tier        coefficient                 intent
//! ─────────   ─────────────────────────   ─────────────────────────
//! ≤ 100       0.3 + tier / 500            keep the lightest airy
//! 101–499     0.6 + tier / 1000
//! 500–799     0.9 + (tier − 500) / 2000
//! ≥ 800       0.95                        keep the darkest from muddying
//! ```
//!
//! The coefficient jumps between bands (e.g. 0.5 at 100 → 0.8 at 200).
//! That discontinuity is part of the ramp's character and is not smoothed.

use serde::{Deserialize, Serialize};

use ps_color::{Hsl, hex_to_hsl, hsl_to_hex, normalize_hex};

use crate::tier::Tier;

/// The color the studio opens with.
pub const DEFAULT_BASE: &str = "#169BED";

/// Vibrancy at which the saturation multiplier is exactly 1.0.
pub const NEUTRAL_VIBRANCY: u8 = 50;

/// Vibrancy above this value has no further effect.
pub const VIBRANCY_CAP: u8 = 85;

/// Upper bound of shaped saturation, in percent.
pub const SATURATION_CAP: f64 = 100.0;

// ---------------------------------------------------------------------------
// ColorShade
// ---------------------------------------------------------------------------

/// One generated shade: its tier, canonical hex, and the integer HSL it was
/// built from.
///
/// `saturation` is the shaped saturation rounded for display; `hex` was
/// computed from the unrounded value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorShade {
    pub shade: Tier,
    pub hex: String,
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A complete ramp: exactly ten shades, one per [`Tier`], lightest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    base: String,
    shades: [ColorShade; 10],
}

impl Palette {
    /// Generate the ramp for `params`. See [`generate_palette`].
    #[must_use]
    pub fn generate(params: &PaletteParams) -> Self {
        generate_palette(&params.base, params.vibrancy, params.hue_shift)
    }

    /// The base color this palette was generated from, as given.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The shade for `tier`.
    #[must_use]
    pub const fn get(&self, tier: Tier) -> &ColorShade {
        &self.shades[tier.index()]
    }

    /// All ten shades, lightest first.
    #[must_use]
    pub const fn as_slice(&self) -> &[ColorShade] {
        &self.shades
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorShade> {
        self.shades.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorShade;
    type IntoIter = std::slice::Iter<'a, ColorShade>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate the ten-tier ramp for a base color.
///
/// - `base_hex`: 6-digit hex, optional `#` (normalize free text first)
/// - `vibrancy`: 0–100, 50 is neutral, capped at 85 internally
/// - `hue_shift`: degrees, -180–180, added to the base hue
///
/// Pure and deterministic: identical inputs give byte-identical output.
/// An achromatic base yields a gray ramp whatever the controls say.
#[must_use]
pub fn generate_palette(base_hex: &str, vibrancy: u8, hue_shift: i16) -> Palette {
    let Hsl { hue: base_hue, saturation: base_sat, .. } = hex_to_hsl(base_hex);

    let hue = shifted_hue(base_hue, hue_shift);
    let multiplier = saturation_multiplier(vibrancy);

    let shades = Tier::ALL.map(|tier| {
        let saturation = shaped_saturation(f64::from(base_sat), multiplier, tier);
        let lightness = tier.lightness();
        ColorShade {
            shade: tier,
            hex: hsl_to_hex(f64::from(hue), saturation, f64::from(lightness)),
            hue,
            saturation: saturation.round().clamp(0.0, SATURATION_CAP) as u8,
            lightness,
        }
    });

    tracing::debug!(base = base_hex, vibrancy, hue_shift, hue, base_sat, "generated palette");

    Palette { base: base_hex.to_owned(), shades }
}

/// `(base + shift + 360) mod 360`, always in `[0, 360)`.
#[must_use]
pub fn shifted_hue(base_hue: u16, hue_shift: i16) -> u16 {
    (i32::from(base_hue) + i32::from(hue_shift) + 360).rem_euclid(360) as u16
}

/// `min(vibrancy, 85) / 50`: 0.0 at vibrancy 0, 1.0 at 50, 1.7 at the cap.
#[must_use]
pub fn saturation_multiplier(vibrancy: u8) -> f64 {
    f64::from(vibrancy.min(VIBRANCY_CAP)) / f64::from(NEUTRAL_VIBRANCY)
}

/// Saturation for one tier, before rounding, clamped to at most 100.
#[must_use]
pub fn shaped_saturation(base_sat: f64, multiplier: f64, tier: Tier) -> f64 {
    let t = f64::from(tier.value());
    let coefficient = match tier.value() {
        ..=100 => 0.3 + t / 500.0,
        101..500 => 0.6 + t / 1000.0,
        500..800 => 0.9 + (t - 500.0) / 2000.0,
        _ => 0.95,
    };
    (base_sat * multiplier * coefficient).min(SATURATION_CAP)
}

// ---------------------------------------------------------------------------
// PaletteParams
// ---------------------------------------------------------------------------

/// The three inputs of the pipeline.
///
/// Changing any field means regenerating the whole [`Palette`]; there is
/// no incremental update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteParams {
    pub base: String,
    pub vibrancy: u8,
    pub hue_shift: i16,
}

impl Default for PaletteParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_owned(),
            vibrancy: NEUTRAL_VIBRANCY,
            hue_shift: 0,
        }
    }
}

impl PaletteParams {
    #[must_use]
    pub fn new(base: impl Into<String>, vibrancy: u8, hue_shift: i16) -> Self {
        Self { base: base.into(), vibrancy, hue_shift }
    }

    /// Generate the palette for the current inputs.
    #[must_use]
    pub fn generate(&self) -> Palette {
        Palette::generate(self)
    }

    /// Replace the base from free text, keeping the current base when the
    /// text holds no hex digits.
    pub fn set_base_text(&mut self, raw: &str) {
        self.base = normalize_hex(raw, &self.base);
    }

    /// Pull the controls back into their slider ranges and canonicalize the
    /// base (falling back to [`DEFAULT_BASE`]).
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            base: normalize_hex(&self.base, DEFAULT_BASE),
            vibrancy: self.vibrancy.min(100),
            hue_shift: self.hue_shift.clamp(-180, 180),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
