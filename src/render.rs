// SPDX-License-Identifier: MIT
//
// Terminal rendering of palettes and contrast scores.
//
// Plain text tables with an optional 24-bit background swatch per row. The
// swatches are the only escape sequences we emit; with `color` off there
// are none, so output piped to a file stays diffable.
//
//   tier  hex        H    S    L
//   ────  ───────  ───  ───  ───
//     50  #F9F1F1    0   40   96  ██████
use std::io::{self, Write};

use ps_color::Rgb;
use ps_palette::{ContrastScore, Palette};

/// Width of a swatch, in cells.
const SWATCH_WIDTH: usize = 6;

// ─── Escapes ─────────────────────────────────────────────────────────────────

/// True-color background block (SGR 48;2;R;G;B), reset afterwards.
pub fn swatch(w: &mut impl Write, rgb: Rgb, width: usize) -> io::Result<()> {
    let Rgb { r, g, b } = rgb;
    write!(w, "\x1b[48;2;{r};{g};{b}m{:width$}\x1b[0m", "")
}

/// `text` in `fg` on `bg`, both true-color.
pub fn sample(w: &mut impl Write, bg: Rgb, fg: Rgb, text: &str) -> io::Result<()> {
    write!(
        w,
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m{text}\x1b[0m",
        bg.r, bg.g, bg.b, fg.r, fg.g, fg.b
    )
}

// ─── Tables ──────────────────────────────────────────────────────────────────

/// One row per tier: tier, hex, H/S/L and, with `color`, a swatch.
pub fn palette_table(w: &mut impl Write, palette: &Palette, color: bool) -> io::Result<()> {
    writeln!(w, "tier  hex        H    S    L")?;
    writeln!(w, "────  ───────  ───  ───  ───")?;
    for shade in palette {
        write!(
            w,
            "{:>4}  {}  {:>3}  {:>3}  {:>3}",
            shade.shade.value(),
            shade.hex, shade.hue, shade.saturation, shade.lightness
        )?;
        if color {
            w.write_all(b"  ")?;
            swatch(w, Rgb::from_hex_lossy(&shade.hex), SWATCH_WIDTH)?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// One row per scored pair, in the order given.
pub fn contrast_table<'a>(
    w: &mut impl Write,
    scores: impl IntoIterator<Item = &'a ContrastScore>,
    color: bool,
) -> io::Result<()> {
    writeln!(w, " bg   fg   ratio  level")?;
    writeln!(w, "───  ───  ──────  ────────")?;
    for score in scores {
        write!(
            w,
            "{:>3}  {:>3}  {:>6.2}  {}",
            score.background.shade.value(),
            score.foreground.shade.value(),
            score.ratio,
            score.level.as_str()
        )?;
        if color {
            write!(w, "{:pad$}", "", pad = 10 - score.level.as_str().len())?;
            sample(
                w,
                Rgb::from_hex_lossy(&score.background.hex),
                Rgb::from_hex_lossy(&score.foreground.hex),
                " Aa ",
            )?;
        }
        writeln!(w)?;
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
