//! Unified error type for the mapart-dither public API.
//!
//! Every failure is detected before any pixel is processed: callers either
//! get a complete output buffer or a typed error, never partial work.

use thiserror::Error;

use crate::palette::PaletteError;
use crate::tile::GridAxis;

/// Dimension validation failure.
///
/// Covers both geometry checks the pipeline performs before the sweep: the
/// tile-grid axis bounds and the non-zero-area requirement on the source.
#[derive(Debug, Error)]
pub enum DimensionError {
    /// Tile-grid axis outside the configured bounds.
    #[error("tile grid {axis} of {value} is outside the allowed {min}..={max} range")]
    GridAxisOutOfRange {
        /// Which axis was out of range.
        axis: GridAxis,
        /// The rejected value.
        value: u32,
        /// Inclusive lower bound.
        min: u32,
        /// Inclusive upper bound.
        max: u32,
    },

    /// Source image has zero width or height.
    #[error("source image has zero area ({width}x{height})")]
    ZeroAreaSource {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
    },
}

/// Unified error type for the mapart-dither public API.
///
/// # Taxonomy
///
/// - [`Palette`](DitherError::Palette): invalid palette (empty list, bad hex)
/// - [`InvalidDimensions`](DitherError::InvalidDimensions): geometry
///   validation failed, either a tile-grid axis outside the allowed range or
///   a source image with zero area (see [`DimensionError`])
/// - [`UnsupportedFormat`](DitherError::UnsupportedFormat): file extension
///   outside the supported set
/// - [`Image`](DitherError::Image) / [`Io`](DitherError::Io): surfaced from
///   the decode/encode collaborator, not generated by the core
#[derive(Debug, Error)]
pub enum DitherError {
    /// Palette validation failed.
    #[error(transparent)]
    Palette(#[from] PaletteError),

    /// Geometry validation failed: grid axis out of bounds or zero-area
    /// source.
    #[error(transparent)]
    InvalidDimensions(#[from] DimensionError),

    /// File extension is not in the supported set.
    #[error("unsupported image format: {path}")]
    UnsupportedFormat {
        /// The offending path, for the error message.
        path: String,
    },

    /// Decode/encode failure from the image collaborator.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure from the image collaborator.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
