//! Text exports of a finished palette: JSON, CSS custom properties and a
//! Tailwind config module.
//!
//! Every builder is a pure function of the [`Palette`]; writing the result
//! somewhere is the caller's business.

use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::PaletteError;
use crate::shade::Palette;

/// Variable-group name used when none is given to the Tailwind export.
pub const DEFAULT_GROUP: &str = "primary";

/// A supported export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Json,
    Css,
    Tailwind,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Json, Self::Css, Self::Tailwind];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Tailwind => "tailwind",
        }
    }

    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Css => "css",
            Self::Tailwind => "js",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaletteError::UnknownFormat(s.to_owned()))
    }
}

impl Palette {
    /// Tier value → hex, ascending by tier.
    #[must_use]
    pub fn tier_map(&self) -> BTreeMap<u16, &str> {
        self.iter().map(|s| (s.shade.value(), s.hex.as_str())).collect()
    }

    /// Pretty-printed JSON object, e.g. `{ "50": "#F9F1F1", ... }`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PaletteError> {
        Ok(serde_json::to_string_pretty(&self.tier_map())?)
    }

    /// A `:root` block with one custom property per tier.
    ///
    /// An empty `name` drops the group segment: `--color-500`.
    #[must_use]
    pub fn to_css(&self, name: &str) -> String {
        let prefix = if name.is_empty() { String::from("--color") } else { format!("--color-{name}") };
        let mut css = String::from(":root {\n");
        for shade in self {
            let _ = writeln!(css, "  {prefix}-{}: {};", shade.shade, shade.hex);
        }
        css.push_str("}\n");
        css
    }

    /// A `tailwind.config.js` module extending `theme.extend.colors.<name>`.
    #[must_use]
    pub fn to_tailwind(&self, name: &str) -> String {
        let name = if name.is_empty() { DEFAULT_GROUP } else { name };
        let key = if is_js_identifier(name) { name.to_owned() } else { format!("{name:?}") };

        let mut js = String::from("/** @type {import('tailwindcss').Config} */\n");
        js.push_str("module.exports = {\n  theme: {\n    extend: {\n      colors: {\n");
        let _ = writeln!(js, "        {key}: {{");
        for shade in self {
            let _ = writeln!(js, "          {}: \"{}\",", shade.shade, shade.hex);
        }
        js.push_str("        },\n      },\n    },\n  },\n};\n");
        js
    }

    /// Render in `format`. `name` is the variable group for CSS and Tailwind.
    ///
    /// # Errors
    ///
    /// Only JSON can fail, see [`Palette::to_json`].
    pub fn export(&self, format: ExportFormat, name: &str) -> Result<String, PaletteError> {
        tracing::debug!(%format, base = self.base(), "exporting palette");
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Css => Ok(self.to_css(name)),
            ExportFormat::Tailwind => Ok(self.to_tailwind(name)),
        }
    }

    /// Download-style file name derived from the base color,
    /// e.g. `palette-169BED.json` or `tailwind-config-169BED.js`.
    #[must_use]
    pub fn file_name(&self, format: ExportFormat) -> String {
        let hex = self.base().trim_start_matches('#');
        match format {
            ExportFormat::Tailwind => format!("tailwind-config-{hex}.js"),
            other => format!("palette-{hex}.{}", other.extension()),
        }
    }
}

fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
