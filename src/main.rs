// SPDX-License-Identifier: MIT
//
// palette-studio — ten-step shade palettes from a single base color.
//
// This is the command-line binary that wires the library crates together:
//
//   ps-color   → hex/HSL conversion, luminance, hex repair
//   ps-palette → shade ramp, contrast scores, random policy, exports
//
// Every command follows the same flow:
//
//   palette-studio.toml ─┐
//   built-in defaults ───┼─► PaletteParams ─► Palette ─► table / export
//   CLI flags ───────────┘                       │
//                                                └─► contrast scores
//
// CLI flags win over the config file, which wins over built-in defaults.
// stdout carries only command output; logs go to stderr.

mod config;
mod logging;
mod render;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use ps_color::normalize_hex;
use ps_palette::{AccessibilityReport, ContrastScore, Palette, PaletteParams, Xorshift32};

use crate::config::{OutputFormat, StudioConfig};
use crate::logging::LogFormat;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "palette-studio")]
#[command(version, about = "Generate ten-step color shade palettes and check their contrast", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file (default: ./palette-studio.toml if present)
    #[arg(long, global = true, env = "PALETTE_STUDIO_CONFIG")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Log line format
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a palette and print it as a table or an export
    Generate {
        #[command(flatten)]
        palette: PaletteArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Score the contrast of a palette's shade pairs
    Contrast {
        #[command(flatten)]
        palette: PaletteArgs,
        /// Show only passing or only failing pairs
        #[arg(long, value_enum)]
        only: Option<Only>,
        /// Print the scores as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick a random base color near the configured one
    Random {
        /// Seed for a repeatable pick (default: system clock)
        #[arg(long)]
        seed: Option<u32>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Repair free text into a #RRGGBB color
    Normalize {
        /// Text to repair, e.g. "f0a" or "rgb 12ab"
        raw: String,
        /// Returned when RAW holds no hex digits (default: configured base)
        #[arg(long)]
        fallback: Option<String>,
    },
}

/// The three palette inputs, each overriding the config file.
#[derive(Debug, Args)]
struct PaletteArgs {
    /// Base color; free text is repaired, e.g. "f00" → #FF0000
    #[arg(long)]
    base: Option<String>,
    /// Saturation intensity, 50 is neutral
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    vibrancy: Option<u8>,
    /// Degrees added to the base hue
    #[arg(long, allow_hyphen_values = true, value_parser = clap::value_parser!(i16).range(-180..=180))]
    hue_shift: Option<i16>,
}

impl PaletteArgs {
    fn apply(&self, params: &mut PaletteParams) {
        if let Some(base) = &self.base {
            params.set_base_text(base);
        }
        if let Some(vibrancy) = self.vibrancy {
            params.vibrancy = vibrancy;
        }
        if let Some(hue_shift) = self.hue_shift {
            params.hue_shift = hue_shift;
        }
    }
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// Output format (default: [export] format, else table)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Variable-group name for CSS and Tailwind (default: [export] name)
    #[arg(long)]
    name: Option<String>,
    /// Write to this file, or into this directory under the download name
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Only {
    Passing,
    Failing,
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = StudioConfig::load(cli.config.as_deref())?;
    let log = config.log.clone().with_overrides(cli.verbose, cli.log_format);
    logging::init_logging(&log).context("failed to initialize logging")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), config = ?cli.config, "palette-studio starting");

    match cli.command {
        Command::Generate { palette, output } => {
            let mut params = config.palette.clone();
            palette.apply(&mut params);
            emit_palette(&params.generate(), &output, &config)
        }
        Command::Contrast { palette, only, json } => {
            let mut params = config.palette.clone();
            palette.apply(&mut params);
            print_contrast(&params.generate(), only, json)
        }
        Command::Random { seed, output } => {
            let mut params = config.palette.clone();
            let mut rng = seed.map_or_else(Xorshift32::from_clock, Xorshift32::new);
            let strategy = params.randomize(&mut rng);
            tracing::info!(base = %params.base, ?strategy, seed, "picked random base");

            let palette = params.generate();
            if resolve_format(&output, &config) == OutputFormat::Table && output.output.is_none() {
                println!("base {} ({strategy:?})", params.base);
            }
            emit_palette(&palette, &output, &config)
        }
        Command::Normalize { raw, fallback } => {
            let fallback = fallback.as_deref().unwrap_or(&config.palette.base);
            println!("{}", normalize_hex(&raw, fallback));
            Ok(())
        }
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn resolve_format(output: &OutputArgs, config: &StudioConfig) -> OutputFormat {
    output.format.unwrap_or(config.export.format)
}

/// Print or write `palette` in the requested format.
fn emit_palette(palette: &Palette, output: &OutputArgs, config: &StudioConfig) -> Result<()> {
    let format = resolve_format(output, config);
    let name = output.name.as_deref().unwrap_or(&config.export.name);

    let Some(path) = &output.output else {
        let mut stdout = io::stdout().lock();
        match format.export() {
            Some(export) => {
                let text = palette.export(export, name)?;
                stdout.write_all(text.as_bytes())?;
                if !text.ends_with('\n') {
                    writeln!(stdout)?;
                }
            }
            None => render::palette_table(&mut stdout, palette, io::stdout().is_terminal())?,
        }
        return Ok(());
    };

    let (path, text) = match format.export() {
        Some(export) => (output_path(path, &palette.file_name(export)), palette.export(export, name)?),
        None => {
            let mut buf = Vec::new();
            render::palette_table(&mut buf, palette, false)?;
            let file_name = format!("palette-{}.txt", palette.base().trim_start_matches('#'));
            (output_path(path, &file_name), String::from_utf8(buf)?)
        }
    };
    write_file(&path, &text)
}

/// A directory target gets the download-style file name appended.
fn output_path(target: &Path, file_name: &str) -> PathBuf {
    if target.is_dir() { target.join(file_name) } else { target.to_path_buf() }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = text.len(), "wrote palette");
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn print_contrast(palette: &Palette, only: Option<Only>, json: bool) -> Result<()> {
    let report = AccessibilityReport::new(palette.as_slice());
    let selected: Vec<&ContrastScore> = match only {
        None => report.scores.iter().collect(),
        Some(Only::Passing) => report.passing().collect(),
        Some(Only::Failing) => report.failing().collect(),
    };

    let mut stdout = io::stdout().lock();
    if json {
        let text = serde_json::to_string_pretty(&selected).context("failed to serialize scores")?;
        writeln!(stdout, "{text}")?;
    } else {
        render::contrast_table(&mut stdout, selected.iter().copied(), io::stdout().is_terminal())?;
        writeln!(stdout, "\n{} passing, {} failing", report.pass_count(), report.fail_count())?;
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
