//! # ps-palette — Shade Ramp & Contrast Engine
//!
//! Turns one base color plus two controls (vibrancy, hue shift) into a
//! ten-step shade ramp, then scores every reduced-subset pairing of that
//! ramp against the WCAG contrast thresholds.
//!
//! # Architecture
//!
//! ```text
//! free text ──► ps_color::normalize_hex ──┐
//!                                         ▼
//! random.rs: RandomSource ──► PaletteParams { base, vibrancy, hue_shift }
//!                                         │
//!                                         ▼
//! shade.rs:    hue shift + saturation shaping per Tier (pure math)
//!                                         │
//!                                         ▼
//!              Palette ([ColorShade; 10], lightest → darkest)
//!                    │                              │
//!                    ▼                              ▼
//! contrast.rs: 15 pairwise WCAG scores    export.rs: JSON / CSS / Tailwind
//! ```
//!
//! # Recompute, never mutate
//!
//! A `Palette` is rebuilt in full whenever any input changes and the score
//! list is always derived from the current palette. Both are plain values
//! with no shared state, so every function here can be called from any
//! thread.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Tier values and percentages are small integers widened to f64.
#![allow(clippy::cast_precision_loss)]
// Shaped saturation is clamped to [0, 100] before narrowing.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Saturation shaping is written term for term, unfused.
#![allow(clippy::suboptimal_flops)]

pub mod contrast;
pub mod error;
pub mod export;
pub mod random;
pub mod shade;
pub mod tier;

pub use contrast::{AccessibilityReport, ContrastScore, WcagLevel, contrast_ratio, score_accessibility};
pub use error::PaletteError;
pub use export::ExportFormat;
pub use random::{RandomSource, RandomStrategy, Xorshift32, randomize_base_color};
pub use shade::{ColorShade, Palette, PaletteParams, generate_palette};
pub use tier::Tier;
