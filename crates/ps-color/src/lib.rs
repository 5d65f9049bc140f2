// SPDX-License-Identifier: MIT
//
// ps-color — Color space math for palette-studio.
//
// The leaf layer of the palette pipeline: converting between 6-digit sRGB
// hex strings and integer HSL, computing WCAG relative luminance, and
// repairing free-text hex input into a canonical `#RRGGBB` form.
//
// No I/O and no state. Every conversion is total over its documented
// input domain; `Rgb::from_hex` is the strict parser for callers that want
// to reject bad input instead of repairing it.

pub mod color;
pub mod normalize;

pub use color::{
    HexError, Hsl, Rgb, hex_to_hsl, hsl_to_hex, relative_luminance, rgb_luminance, wrap_hue,
};
pub use normalize::{is_canonical_hex, normalize_hex};
