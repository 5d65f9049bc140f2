//! Random base colors — the "surprise me" entry point of the pipeline.
//!
//! Two strategies, picked by a single draw:
//!
//! - 30%: an independent color. Hue anywhere, saturation 20–100%,
//!   lightness 20–80%.
//! - 70%: a related color. The current hue jittered by up to ±60°, with
//!   saturation and lightness drawn from the same ranges.
//!
//! Entropy always comes in through a [`RandomSource`], so tests can script
//! the exact draws and assert exact colors.

use ps_color::{hex_to_hsl, hsl_to_hex, wrap_hue};

use crate::shade::{NEUTRAL_VIBRANCY, PaletteParams};

/// Probability of ignoring the current color entirely.
pub const INDEPENDENT_CHANCE: f64 = 0.3;

/// Maximum hue distance, either way, for a related color.
pub const HUE_JITTER: f64 = 60.0;

/// Saturation range for random colors, in percent, upper bound exclusive.
pub const SATURATION_RANGE: (f64, f64) = (20.0, 100.0);

/// Lightness range for random colors, in percent, upper bound exclusive.
pub const LIGHTNESS_RANGE: (f64, f64) = (20.0, 80.0);

// ---------------------------------------------------------------------------
// RandomSource
// ---------------------------------------------------------------------------

/// A source of uniformly distributed reals.
pub trait RandomSource {
    /// A value in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        (**self).uniform(lo, hi)
    }
}

// ---------------------------------------------------------------------------
// Xorshift32 — a minimal deterministic PRNG
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG. Same seed, same colors.
#[derive(Debug, Clone)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// A zero seed would lock the generator at zero, so it is bumped to 1.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    /// Seed from the sub-second part of the system clock.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.subsec_nanos());
        Self::new(nanos)
    }

    pub const fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }
}

impl RandomSource for Xorshift32 {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        // 2^32 keeps the upper bound exclusive.
        let t = f64::from(self.next_u32()) / 4_294_967_296.0;
        lo + (hi - lo) * t
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

/// Which branch of the policy produced a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomStrategy {
    Independent,
    Related,
}

/// Draw a new base color, possibly related to `current_hex`.
///
/// Draw order: strategy, hue (or hue jitter), saturation, lightness.
#[must_use]
pub fn randomize_base_color<R: RandomSource + ?Sized>(current_hex: &str, rng: &mut R) -> String {
    randomize_with_strategy(current_hex, rng).0
}

/// Like [`randomize_base_color`], also reporting the branch taken.
pub fn randomize_with_strategy<R: RandomSource + ?Sized>(
    current_hex: &str,
    rng: &mut R,
) -> (String, RandomStrategy) {
    let (hue, strategy) = if rng.uniform(0.0, 1.0) < INDEPENDENT_CHANCE {
        (rng.uniform(0.0, 360.0).floor(), RandomStrategy::Independent)
    } else {
        let current = f64::from(hex_to_hsl(current_hex).hue);
        let jitter = rng.uniform(-HUE_JITTER, HUE_JITTER);
        (wrap_hue(current + jitter), RandomStrategy::Related)
    };
    let saturation = rng.uniform(SATURATION_RANGE.0, SATURATION_RANGE.1);
    let lightness = rng.uniform(LIGHTNESS_RANGE.0, LIGHTNESS_RANGE.1);

    let hex = hsl_to_hex(hue, saturation, lightness);
    tracing::debug!(current = current_hex, new = %hex, ?strategy, hue, saturation, lightness, "randomized base color");
    (hex, strategy)
}

impl PaletteParams {
    /// Replace the base with a random color and reset vibrancy and hue
    /// shift to their neutral values.
    pub fn randomize<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> RandomStrategy {
        let (base, strategy) = randomize_with_strategy(&self.base, rng);
        self.base = base;
        self.vibrancy = NEUTRAL_VIBRANCY;
        self.hue_shift = 0;
        strategy
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays unit fractions: each draw returns `lo + (hi - lo) * t`.
    struct Scripted(VecDeque<f64>);

    impl Scripted {
        fn new(ts: &[f64]) -> Self {
            Self(ts.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
            let t = self.0.pop_front().expect("script exhausted");
            lo + (hi - lo) * t
        }
    }

    // ── Policy branches ─────────────────────────────────────────────

    #[test]
    fn independent_branch() {
        // 0.1 < 0.3 → independent; hue 180, sat 60, light 50.
        let mut rng = Scripted::new(&[0.1, 0.5, 0.5, 0.5]);
        let (hex, strategy) = randomize_with_strategy("#FF0000", &mut rng);
        assert_eq!(strategy, RandomStrategy::Independent);
        assert_eq!(hex, "#33CCCC");
        assert!(rng.0.is_empty());
    }

    #[test]
    fn independent_hue_is_floored() {
        // 0.9999 * 360 = 359.96 → 359.
        let mut rng = Scripted::new(&[0.0, 0.9999, 0.5, 0.5]);
        assert_eq!(randomize_base_color("#000000", &mut rng), hsl_to_hex(359.0, 60.0, 50.0));
    }

    #[test]
    fn related_branch_jitters_current_hue() {
        // 0.9 → related; green (120°) jittered by -60 → 60, sat 60, light 50.
        let mut rng = Scripted::new(&[0.9, 0.0, 0.5, 0.5]);
        let (hex, strategy) = randomize_with_strategy("#00FF00", &mut rng);
        assert_eq!(strategy, RandomStrategy::Related);
        assert_eq!(hex, "#CCCC33");
    }

    #[test]
    fn related_hue_wraps_below_zero() {
        // Red (0°) jittered by -60 → 300.
        let mut rng = Scripted::new(&[0.5, 0.0, 0.5, 0.5]);
        assert_eq!(randomize_base_color("#FF0000", &mut rng), "#CC33CC");
    }

    #[test]
    fn threshold_draw_is_related() {
        let mut rng = Scripted::new(&[0.3, 0.5, 0.5, 0.5]);
        let (_, strategy) = randomize_with_strategy("#FF0000", &mut rng);
        assert_eq!(strategy, RandomStrategy::Related);
    }

    #[test]
    fn params_reset_controls() {
        let mut params = PaletteParams::new("#FF0000", 80, 45);
        let mut rng = Scripted::new(&[0.1, 0.5, 0.5, 0.5]);
        params.randomize(&mut rng);
        assert_eq!(params, PaletteParams::new("#33CCCC", 50, 0));
    }

    // ── Xorshift32 ──────────────────────────────────────────────────

    #[test]
    fn xorshift_is_deterministic() {
        let mut a = Xorshift32::new(42);
        let mut b = Xorshift32::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn xorshift_zero_seed_still_moves() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn xorshift_uniform_stays_in_range() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..10_000 {
            let v = rng.uniform(20.0, 80.0);
            assert!((20.0..80.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn seeded_randomize_is_repeatable() {
        let a = randomize_base_color("#169BED", &mut Xorshift32::new(1234));
        let b = randomize_base_color("#169BED", &mut Xorshift32::new(1234));
        assert_eq!(a, b);
        assert!(ps_color::is_canonical_hex(&a));
    }

    #[test]
    fn random_colors_respect_ranges() {
        let mut rng = Xorshift32::new(99);
        let mut current = String::from("#169BED");
        for _ in 0..500 {
            current = randomize_base_color(&current, &mut rng);
            let hsl = ps_color::hex_to_hsl(&current);
            // 8-bit quantization on the way back can nudge by a point or so.
            assert!((18..=100).contains(&hsl.saturation), "{current}: {hsl:?}");
            assert!((19..=81).contains(&hsl.lightness), "{current}: {hsl:?}");
        }
    }
}
