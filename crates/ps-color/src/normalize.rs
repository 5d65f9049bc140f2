// SPDX-License-Identifier: MIT
//
// Hex normalizer — best-effort repair of free-text color input.
//
// Text fields hand us whatever the user typed: `f0a`, `#FF`, `rgb 12ab`,
// pasted values with trailing junk. Rather than rejecting, we strip the
// input down to its hex digits and pad or truncate to exactly six:
//
//   digits  rule                         example
//   ──────  ───────────────────────────  ─────────────────
//   0       return the fallback          ""      → fallback
//   1       repeat six times             F       → FFFFFF
//   2       red, red again, blue 00      FF      → FFFF00
//   3       shorthand, double each       F0A     → FF00AA
//   4       red + green, blue 00         12AB    → 12AB00
//   5       append the first digit       12345   → 123451
//   6       as-is                        169bed  → 169BED
//   7+      keep the first six           FFFFFFFF → FFFFFF

/// Repair `raw` into a canonical `#RRGGBB` (uppercase) color.
///
/// Never fails. When `raw` contains no hex digits at all, `fallback` is
/// returned unchanged, so pass the last known-good color.
///
/// ```
/// use ps_color::normalize_hex;
///
/// assert_eq!(normalize_hex("F00", "#000000"), "#FF0000");
/// assert_eq!(normalize_hex("", "#ABCDEF"), "#ABCDEF");
/// assert_eq!(normalize_hex("FFFFFFFF", "#000000"), "#FFFFFF");
/// ```
#[must_use]
pub fn normalize_hex(raw: &str, fallback: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_hexdigit).collect();

    let Some(first) = digits.chars().next() else {
        tracing::trace!(raw, fallback, "no hex digits in input, using fallback");
        return fallback.to_owned();
    };

    match digits.len() {
        1 => digits = digits.repeat(6),
        2 => digits = format!("{digits}{digits}00"),
        3 => digits = digits.chars().flat_map(|c| [c, c]).collect(),
        4 => digits.push_str("00"),
        5 => digits.push(first),
        6 => {}
        _ => digits.truncate(6),
    }
    digits.make_ascii_uppercase();

    let normalized = format!("#{digits}");
    if normalized != raw {
        tracing::debug!(raw, %normalized, "repaired hex input");
    }
    normalized
}

/// Whether `s` is exactly `#` followed by six uppercase hex digits.
#[must_use]
pub fn is_canonical_hex(s: &str) -> bool {
    s.strip_prefix('#').is_some_and(|digits| {
        digits.len() == 6
            && digits
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BLACK: &str = "#000000";

    #[test]
    fn shorthand_expands() {
        assert_eq!(normalize_hex("F00", BLACK), "#FF0000");
        assert_eq!(normalize_hex("#f0a", BLACK), "#FF00AA");
    }

    #[test]
    fn empty_returns_fallback_unchanged() {
        assert_eq!(normalize_hex("", "#ABCDEF"), "#ABCDEF");
        assert_eq!(normalize_hex("#", "#ABCDEF"), "#ABCDEF");
        assert_eq!(normalize_hex("xyz!", "#ABCDEF"), "#ABCDEF");
    }

    #[test]
    fn fallback_is_not_reformatted() {
        // The fallback is trusted, even when it's lowercase.
        assert_eq!(normalize_hex("   ", "#abcdef"), "#abcdef");
    }

    #[test]
    fn long_input_truncates() {
        assert_eq!(normalize_hex("FFFFFFFF", BLACK), "#FFFFFF");
        assert_eq!(normalize_hex("#12345678", BLACK), "#123456");
    }

    #[test]
    fn single_digit_repeats() {
        assert_eq!(normalize_hex("F", BLACK), "#FFFFFF");
        assert_eq!(normalize_hex("a", BLACK), "#AAAAAA");
    }

    #[test]
    fn two_digits_become_red_green() {
        assert_eq!(normalize_hex("FF", BLACK), "#FFFF00");
        assert_eq!(normalize_hex("3c", BLACK), "#3C3C00");
    }

    #[test]
    fn four_digits_get_zero_blue() {
        assert_eq!(normalize_hex("12AB", BLACK), "#12AB00");
    }

    #[test]
    fn five_digits_append_first() {
        assert_eq!(normalize_hex("12345", BLACK), "#123451");
    }

    #[test]
    fn six_digits_pass_through_uppercased() {
        assert_eq!(normalize_hex("#169bed", BLACK), "#169BED");
        assert_eq!(normalize_hex("169BED", BLACK), "#169BED");
    }

    #[test]
    fn non_hex_characters_are_stripped() {
        assert_eq!(normalize_hex("  #1g6-9 b/e d ", BLACK), "#169BED");
        assert_eq!(normalize_hex("rgb(12, 34)", BLACK), "#B1234B");
    }

    #[test]
    fn canonical_check() {
        assert!(is_canonical_hex("#169BED"));
        assert!(!is_canonical_hex("#169bed"));
        assert!(!is_canonical_hex("169BED"));
        assert!(!is_canonical_hex("#169BE"));
        assert!(!is_canonical_hex("#169BEDD"));
    }
}
