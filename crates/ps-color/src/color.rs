// SPDX-License-Identifier: MIT
//
// ps-color conversion core — sRGB hex ↔ HSL, plus WCAG relative luminance.
//
// Single-character names (r, g, b, h, s, l, p, q, t) follow the usual
// color-science notation.
#![allow(clippy::many_single_char_names)]
// Channel bytes must round exactly as the unfused formulas do; `mul_add`
// changes the last ulp.
#![allow(clippy::suboptimal_flops)]
//
// Conversion pipeline:
//
//   "#RRGGBB" ↔ Rgb (u8 × 3) ↔ unit RGB (f64 × 3) ↔ HSL
//                                     │
//                                     └─→ linear sRGB → relative luminance
//
// HSL values leaving this module are integers (degrees / percent), so a
// hex → HSL → hex round-trip is exact only to ±1 per channel.

use std::fmt;
use std::str::FromStr;

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque 8-bit sRGB color.
///
/// This is the only representation that ever becomes a hex string. All the
/// HSL math works in `f64` and lands here through [`Rgb::from_unit`].
///
/// # Examples
///
/// ```
/// use ps_color::Rgb;
///
/// let red = Rgb::from_hex("#ff0000").unwrap();
/// assert_eq!(red, Rgb::new(255, 0, 0));
/// assert_eq!(red.to_hex(), "#FF0000");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strictly parse a 6-digit hex color, with or without a leading `#`.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::Length`] when the digit count is not 6 and
    /// [`HexError::Digit`] for the first character that is not a hex digit.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let count = digits.chars().count();
        if count != 6 {
            return Err(HexError::Length(count));
        }
        if let Some((index, found)) = digits
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(HexError::Digit { found, index });
        }

        Ok(Self::from_hex_lossy(digits))
    }

    /// Decode the first three channel pairs of a hex string, never failing.
    ///
    /// A leading `#` is skipped. Any pair that is missing or contains a
    /// non-hex character reads as `0`. This is what the total conversion
    /// functions ([`hex_to_hsl`], [`relative_luminance`]) use: garbage in
    /// degrades to dark channels rather than an error.
    #[must_use]
    pub fn from_hex_lossy(s: &str) -> Self {
        let bytes = s.strip_prefix('#').unwrap_or(s).as_bytes();
        let channel = |i: usize| -> u8 {
            bytes
                .get(i * 2..i * 2 + 2)
                .and_then(parse_hex_byte)
                .unwrap_or(0)
        };
        Self::new(channel(0), channel(1), channel(2))
    }

    /// Build from unit-range channels, rounding half away from zero.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Channels normalized to `[0.0, 1.0]`.
    #[inline]
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Canonical `#RRGGBB` form, uppercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Integer HSL decomposition. See [`hex_to_hsl`].
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self)
    }

    /// WCAG relative luminance. See [`relative_luminance`].
    #[must_use]
    pub fn luminance(self) -> f64 {
        rgb_luminance(self)
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({:02X}{:02X}{:02X})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Why a strict hex parse was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("expected 6 hex digits, found {0}")]
    Length(usize),

    #[error("invalid hex digit {found:?} at position {index}")]
    Digit { found: char, index: usize },
}

// ─── Hsl ─────────────────────────────────────────────────────────────────────

/// Integer HSL: hue in degrees `[0, 360)`, saturation and lightness in
/// percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Back to 8-bit sRGB through [`hsl_to_rgb`].
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(
            f64::from(self.hue),
            f64::from(self.saturation),
            f64::from(self.lightness),
        )
    }
}

// ─── Hex / RGB → HSL ─────────────────────────────────────────────────────────

/// Decompose a 6-digit hex color (optional `#`) into integer HSL.
///
/// Malformed input is the caller's problem: route free text through
/// [`normalize_hex`](crate::normalize_hex) first. Undecodable channels read
/// as zero (see [`Rgb::from_hex_lossy`]).
///
/// ```
/// use ps_color::{hex_to_hsl, Hsl};
///
/// assert_eq!(hex_to_hsl("#FF0000"), Hsl::new(0, 100, 50));
/// ```
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Hsl {
    rgb_to_hsl(Rgb::from_hex_lossy(hex))
}

/// Integer HSL of an 8-bit color.
///
/// Lightness is `(max + min) / 2`. Saturation uses the two-branch formula
/// (denominator `2 - max - min` above half lightness, `max + min` below).
/// Hue is the six-sector formula keyed on the maximal channel. Achromatic
/// colors (`max == min`) short-circuit to hue 0 and saturation 0, so no
/// division by zero is possible.
#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let (r, g, b) = rgb.to_unit();

    // Channel comparisons happen on the exact bytes, not on the floats.
    let max8 = rgb.r.max(rgb.g).max(rgb.b);
    let min8 = rgb.r.min(rgb.g).min(rgb.b);
    let max = f64::from(max8) / 255.0;
    let min = f64::from(min8) / 255.0;

    let l = (max + min) / 2.0;

    if max8 == min8 {
        return Hsl::new(0, 0, round_percent(l));
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let sector = if max8 == rgb.r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max8 == rgb.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;

    Hsl::new(round_degrees(h * 360.0), round_percent(s), round_percent(l))
}

// ─── HSL → RGB / Hex ─────────────────────────────────────────────────────────

/// Convert HSL to a canonical `#RRGGBB` string.
///
/// `hue` is in degrees and should already be in `[0, 360)`; it is divided
/// by 360 and only wrapped once inside the channel function. `saturation`
/// and `lightness` are percentages and are not clamped here.
///
/// ```
/// use ps_color::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#FF0000");
/// assert_eq!(hsl_to_hex(0.0, 0.0, 100.0), "#FFFFFF");
/// ```
#[must_use]
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    hsl_to_rgb(hue, saturation, lightness).to_hex()
}

/// Convert HSL (degrees, percent, percent) to 8-bit sRGB.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = hue / 360.0;
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    if s.abs() < f64::EPSILON {
        return Rgb::from_unit(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_unit(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

/// Piecewise hue → channel function with breakpoints at 0, 1, 1/6, 1/2, 2/3.
#[inline]
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Wrap any hue angle into `[0, 360)`.
#[inline]
#[must_use]
pub fn wrap_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ─── Relative Luminance ──────────────────────────────────────────────────────
//
// WCAG 2.x definition: linearize each sRGB channel, then weight with the
// BT.709 coefficients. The linearization threshold is the WCAG-published
// 0.03928 rather than the IEC 0.04045. For 8-bit input both thresholds
// pick the same branch for every byte value.

/// Relative luminance of a hex color, in `[0.0, 1.0]`.
///
/// ```
/// use ps_color::relative_luminance;
///
/// assert!(relative_luminance("#000000").abs() < 1e-9);
/// assert!((relative_luminance("#FFFFFF") - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn relative_luminance(hex: &str) -> f64 {
    rgb_luminance(Rgb::from_hex_lossy(hex))
}

/// Relative luminance of an 8-bit color.
#[must_use]
pub fn rgb_luminance(rgb: Rgb) -> f64 {
    let (r, g, b) = rgb.to_unit();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Remove the sRGB transfer curve from a unit channel.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Rounding & Hex Digits ───────────────────────────────────────────────────

/// Unit float → byte. `f64::round` rounds half away from zero.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Unit float → integer percent.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_percent(v: f64) -> u8 {
    (v * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Degrees → integer degrees in `[0, 360)`. A hue a hair under 360 rounds
/// up to 360 and wraps to 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_degrees(v: f64) -> u16 {
    (v.round().clamp(0.0, 360.0) as u16) % 360
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
