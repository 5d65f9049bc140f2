//! WCAG contrast scoring across a palette's shades.
//!
//! Scores a reduced subset of tiers (50, 100, 200, 500, 700, 900) pairwise,
//! 15 pairs instead of 45, and classifies each ratio:
//!
//! - AAA: ratio >= 7.0
//! - AA: ratio >= 4.5
//! - AA Large: ratio >= 3.0
//! - Fail: anything lower
//!
//! Ratios come from relative luminance (WCAG definition), so swapping
//! background and foreground never changes a score.

use std::fmt;

use serde::Serialize;

use ps_color::relative_luminance;

use crate::shade::ColorShade;
use crate::tier::Tier;

/// Tiers that take part in scoring, in pairing order.
pub const SCORED_TIERS: [Tier; 6] = [Tier::T50, Tier::T100, Tier::T200, Tier::T500, Tier::T700, Tier::T900];

// ---------------------------------------------------------------------------
// Ratio
// ---------------------------------------------------------------------------

/// Compute the WCAG 2.1 contrast ratio between two hex colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    luminance_ratio(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio from two precomputed luminances.
#[must_use]
pub fn luminance_ratio(la: f64, lb: f64) -> f64 {
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ---------------------------------------------------------------------------
// WcagLevel
// ---------------------------------------------------------------------------

/// Accessibility classification of a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "Fail")]
    Fail,
}

impl WcagLevel {
    /// Classify a ratio. Thresholds are inclusive.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio >= 7.0 {
            Self::Aaa
        } else if ratio >= 4.5 {
            Self::Aa
        } else if ratio >= 3.0 {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aaa => "AAA",
            Self::Aa => "AA",
            Self::AaLarge => "AA Large",
            Self::Fail => "Fail",
        }
    }

    /// Every level except `Fail` passes.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        !matches!(self, Self::Fail)
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContrastScore
// ---------------------------------------------------------------------------

/// One scored pairing. `pass` always equals `level.is_pass()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastScore {
    pub background: ColorShade,
    pub foreground: ColorShade,
    pub ratio: f64,
    pub level: WcagLevel,
    pub pass: bool,
}

impl ContrastScore {
    /// Score `foreground` text on `background`.
    #[must_use]
    pub fn new(background: ColorShade, foreground: ColorShade) -> Self {
        let ratio = contrast_ratio(&background.hex, &foreground.hex);
        let level = WcagLevel::classify(ratio);
        Self { background, foreground, ratio, level, pass: level.is_pass() }
    }
}

/// Score every pair of [`SCORED_TIERS`] found in `shades`, highest ratio
/// first.
///
/// A pair is skipped when either tier is missing from `shades`, so a
/// partial sequence yields fewer scores rather than an error. Ties keep
/// pairing order.
#[must_use]
pub fn score_accessibility(shades: &[ColorShade]) -> Vec<ContrastScore> {
    let find = |tier: Tier| shades.iter().find(|s| s.shade == tier);

    let mut scores = Vec::with_capacity(15);
    for (i, &bg_tier) in SCORED_TIERS.iter().enumerate() {
        for &fg_tier in &SCORED_TIERS[i + 1..] {
            if let (Some(bg), Some(fg)) = (find(bg_tier), find(fg_tier)) {
                scores.push(ContrastScore::new(bg.clone(), fg.clone()));
            }
        }
    }

    scores.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    tracing::trace!(
        pairs = scores.len(),
        passing = scores.iter().filter(|s| s.pass).count(),
        "scored palette contrast"
    );

    scores
}

/// Passing scores, in their existing order.
pub fn passing(scores: &[ContrastScore]) -> impl Iterator<Item = &ContrastScore> {
    scores.iter().filter(|s| s.pass)
}

/// Failing scores, in their existing order.
pub fn failing(scores: &[ContrastScore]) -> impl Iterator<Item = &ContrastScore> {
    scores.iter().filter(|s| !s.pass)
}

// ---------------------------------------------------------------------------
// AccessibilityReport
// ---------------------------------------------------------------------------

/// The sorted score list plus its passing/failing partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityReport {
    pub scores: Vec<ContrastScore>,
}

impl AccessibilityReport {
    #[must_use]
    pub fn new(shades: &[ColorShade]) -> Self {
        Self { scores: score_accessibility(shades) }
    }

    pub fn passing(&self) -> impl Iterator<Item = &ContrastScore> {
        passing(&self.scores)
    }

    pub fn failing(&self) -> impl Iterator<Item = &ContrastScore> {
        failing(&self.scores)
    }

    #[must_use]
    pub fn pass_count(&self) -> usize {
        self.passing().count()
    }

    #[must_use]
    pub fn fail_count(&self) -> usize {
        self.failing().count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shade::generate_palette;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn shade(tier: Tier, hex: &str) -> ColorShade {
        let hsl = ps_color::hex_to_hsl(hex);
        ColorShade {
            shade: tier,
            hex: hex.to_owned(),
            hue: hsl.hue,
            saturation: hsl.saturation,
            lightness: hsl.lightness,
        }
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#FFFFFF");
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_same_color_is_1() {
        let ratio = contrast_ratio("#169BED", "#169BED");
        assert!(approx_eq(ratio, 1.0, 1e-12), "Same-color contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#CC3344", "#1A1A66");
        let ba = contrast_ratio("#1A1A66", "#CC3344");
        assert!(approx_eq(ab, ba, 1e-15), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_known_gray_on_white() {
        let ratio = contrast_ratio("#767676", "#FFFFFF");
        assert!(approx_eq(ratio, 4.54, 0.01), "Gray/white contrast: {ratio}");
    }

    // ── Classification ──────────────────────────────────────────────

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(WcagLevel::classify(7.0), WcagLevel::Aaa);
        assert_eq!(WcagLevel::classify(4.5), WcagLevel::Aa);
        assert_eq!(WcagLevel::classify(3.0), WcagLevel::AaLarge);
        assert_eq!(WcagLevel::classify(2.99), WcagLevel::Fail);
    }

    #[test]
    fn just_below_each_threshold() {
        assert_eq!(WcagLevel::classify(6.999), WcagLevel::Aa);
        assert_eq!(WcagLevel::classify(4.499), WcagLevel::AaLarge);
        assert_eq!(WcagLevel::classify(1.0), WcagLevel::Fail);
        assert_eq!(WcagLevel::classify(21.0), WcagLevel::Aaa);
    }

    #[test]
    fn level_strings() {
        assert_eq!(WcagLevel::Aaa.to_string(), "AAA");
        assert_eq!(WcagLevel::Aa.to_string(), "AA");
        assert_eq!(WcagLevel::AaLarge.to_string(), "AA Large");
        assert_eq!(WcagLevel::Fail.to_string(), "Fail");
        assert_eq!(serde_json::to_string(&WcagLevel::AaLarge).unwrap(), "\"AA Large\"");
    }

    // ── Scoring ─────────────────────────────────────────────────────

    #[test]
    fn black_on_white_scores_aaa() {
        let shades = [shade(Tier::T50, "#FFFFFF"), shade(Tier::T900, "#000000")];
        let scores = score_accessibility(&shades);
        assert_eq!(scores.len(), 1);
        let s = &scores[0];
        assert!(approx_eq(s.ratio, 21.0, 1e-9));
        assert_eq!(s.level, WcagLevel::Aaa);
        assert!(s.pass);
        assert_eq!(s.background.shade, Tier::T50);
        assert_eq!(s.foreground.shade, Tier::T900);
    }

    #[test]
    fn full_palette_gives_15_pairs() {
        let p = generate_palette("#169BED", 50, 0);
        assert_eq!(score_accessibility(p.as_slice()).len(), 15);
    }

    #[test]
    fn only_scored_tiers_participate() {
        let p = generate_palette("#169BED", 50, 0);
        for s in score_accessibility(p.as_slice()) {
            assert!(SCORED_TIERS.contains(&s.background.shade));
            assert!(SCORED_TIERS.contains(&s.foreground.shade));
            assert!(s.background.shade < s.foreground.shade);
        }
    }

    #[test]
    fn sorted_by_ratio_descending() {
        let p = generate_palette("#E4572E", 60, 0);
        let scores = score_accessibility(p.as_slice());
        for pair in scores.windows(2) {
            assert!(pair[0].ratio >= pair[1].ratio, "{} < {}", pair[0].ratio, pair[1].ratio);
        }
        // Lightest against darkest is always the widest gap.
        assert_eq!(scores[0].background.shade, Tier::T50);
        assert_eq!(scores[0].foreground.shade, Tier::T900);
    }

    #[test]
    fn pass_matches_level() {
        let p = generate_palette("#169BED", 50, 0);
        for s in score_accessibility(p.as_slice()) {
            assert_eq!(s.pass, s.level != WcagLevel::Fail);
            assert!(s.ratio >= 1.0);
        }
    }

    #[test]
    fn missing_tier_drops_its_pairs() {
        let p = generate_palette("#169BED", 50, 0);
        let without_500: Vec<ColorShade> =
            p.iter().filter(|s| s.shade != Tier::T500).cloned().collect();
        assert_eq!(score_accessibility(&without_500).len(), 10);
        assert!(score_accessibility(&[]).is_empty());
    }

    #[test]
    fn unscored_tiers_alone_give_nothing() {
        let p = generate_palette("#169BED", 50, 0);
        let unscored: Vec<ColorShade> = p
            .iter()
            .filter(|s| !SCORED_TIERS.contains(&s.shade))
            .cloned()
            .collect();
        assert!(score_accessibility(&unscored).is_empty());
    }

    // ── Partition ───────────────────────────────────────────────────

    #[test]
    fn report_partitions_scores() {
        let p = generate_palette("#169BED", 50, 0);
        let report = AccessibilityReport::new(p.as_slice());
        assert_eq!(report.pass_count() + report.fail_count(), 15);
        assert!(report.passing().all(|s| s.pass));
        assert!(report.failing().all(|s| !s.pass));
        // 50 vs 900 always clears AAA; neighbours 50 vs 100 never clear 3:1.
        assert!(report.pass_count() > 0);
        assert!(report.fail_count() > 0);
    }

    #[test]
    fn partition_preserves_order() {
        let p = generate_palette("#2E8B57", 50, 0);
        let scores = score_accessibility(p.as_slice());
        let ratios: Vec<f64> = passing(&scores).map(|s| s.ratio).collect();
        assert!(ratios.windows(2).all(|w| w[0] >= w[1]));
    }
}
