//! Error type for palette validation.

use thiserror::Error;

use crate::color::ParseColorError;

/// Error type for palette construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// No colors provided.
    #[error("palette cannot be empty")]
    Empty,

    /// Invalid hex color string.
    #[error("invalid palette color: {0}")]
    ParseColor(#[from] ParseColorError),
}
