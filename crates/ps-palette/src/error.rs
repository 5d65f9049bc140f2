//! Error type for the parsing edges of the palette crate.
//!
//! The generation and scoring core is total and never returns these. They
//! only come from turning outside text or numbers into typed values.

/// Errors raised when converting external input into palette types.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("unknown shade tier {0} (expected 50, 100, 200, ... 900)")]
    UnknownTier(u16),

    #[error("unknown export format {0:?} (expected json, css or tailwind)")]
    UnknownFormat(String),

    #[error("failed to serialize palette: {0}")]
    Json(#[from] serde_json::Error),
}
