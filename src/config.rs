// SPDX-License-Identifier: MIT
//
// The palette-studio.toml config file.
//
//   [palette]  base / vibrancy / hue_shift   → ps_palette::PaletteParams
//   [export]   format / name                 → default output of `generate`
//   [log]      level / format                → crate::logging::LogConfig
//
// Every section and field is optional. Values are pulled back into their
// slider ranges on load, and an unusable base falls back to the built-in
// default color.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use ps_palette::{ExportFormat, PaletteParams};

use crate::logging::LogConfig;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "palette-studio.toml";

// ─── Output format ──────────────────────────────────────────────────────────

/// What `generate` and `random` print: the swatch table or a file export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Css,
    Tailwind,
}

impl OutputFormat {
    /// The export behind this format, `None` for the table.
    #[must_use]
    pub const fn export(self) -> Option<ExportFormat> {
        match self {
            Self::Table => None,
            Self::Json => Some(ExportFormat::Json),
            Self::Css => Some(ExportFormat::Css),
            Self::Tailwind => Some(ExportFormat::Tailwind),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.export() {
            Some(export) => fmt::Display::fmt(&export, f),
            None => f.write_str("table"),
        }
    }
}

// ─── Sections ───────────────────────────────────────────────────────────────

/// The `[export]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub format: OutputFormat,
    /// Variable-group name: `--color-<name>-500`, `colors.<name>`.
    pub name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Table, name: ps_palette::export::DEFAULT_GROUP.to_owned() }
    }
}

/// The whole config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub palette: PaletteParams,
    pub export: ExportConfig,
    pub log: LogConfig,
}

impl StudioConfig {
    /// Load the config.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read if present and built-in defaults are
    /// used otherwise.
    ///
    /// # Errors
    ///
    /// Fails when an explicit file is missing, or any file that is read
    /// cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() { Self::from_file(&default) } else { Ok(Self::default()) }
            }
        }
    }

    /// Read and parse one file.
    ///
    /// # Errors
    ///
    /// Fails on I/O or TOML errors, with the path in the context.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parse TOML text.
    ///
    /// # Errors
    ///
    /// Fails on invalid TOML or out-of-type values.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config.clamped())
    }

    /// Pull palette controls into range and canonicalize the base.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self { palette: self.palette.clamped(), ..self }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::logging::LogFormat;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = StudioConfig::parse("").unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.palette.base, "#169BED");
        assert_eq!(config.export.name, "primary");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn full_file() {
        let config = StudioConfig::parse(
            r##"
            [palette]
            base = "#3a7d44"
            vibrancy = 70
            hue_shift = -20

            [export]
            format = "css"
            name = "brand"

            [log]
            level = "debug"
            format = "json"
            "##,
        )
        .unwrap();
        assert_eq!(config.palette, PaletteParams::new("#3A7D44", 70, -20));
        assert_eq!(config.export.format, OutputFormat::Css);
        assert_eq!(config.export.name, "brand");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = StudioConfig::parse("[palette]\nvibrancy = 20\n").unwrap();
        assert_eq!(config.palette, PaletteParams::new("#169BED", 20, 0));
    }

    #[test]
    fn values_are_clamped_on_load() {
        let config = StudioConfig::parse("[palette]\nbase = \"f00\"\nvibrancy = 250\nhue_shift = 400\n").unwrap();
        assert_eq!(config.palette, PaletteParams::new("#FF0000", 100, 180));
    }

    #[test]
    fn unusable_base_falls_back_to_default() {
        let config = StudioConfig::parse("[palette]\nbase = \"not a color\"\n").unwrap();
        // "not a color" still holds two hex digits, a and c.
        assert_eq!(config.palette.base, "#ACAC00");
        let config = StudioConfig::parse("[palette]\nbase = \"xyz\"\n").unwrap();
        assert_eq!(config.palette.base, "#169BED");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(StudioConfig::parse("[export]\nformat = \"scss\"\n").is_err());
    }

    #[test]
    fn reads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[export]\nformat = \"tailwind\"").unwrap();
        let config = StudioConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.export.format, OutputFormat::Tailwind);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = StudioConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"), "{err:#}");
    }

    #[test]
    fn parse_error_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[palette\nbase =").unwrap();
        let err = StudioConfig::from_file(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse config file"), "{err:#}");
    }

    #[test]
    fn output_format_maps_to_export() {
        assert_eq!(OutputFormat::Table.export(), None);
        assert_eq!(OutputFormat::Css.export(), Some(ExportFormat::Css));
        assert_eq!(OutputFormat::Tailwind.to_string(), "tailwind");
        assert_eq!(OutputFormat::Table.to_string(), "table");
    }
}
