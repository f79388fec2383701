//! Color types and conversions.
//!
//! Two color spaces, two purposes:
//!
//! - [`Rgb`]: 8-bit storage and output. Pixel buffers, palette entries, and
//!   dithered output are all `Rgb`.
//! - [`Lab`]: CIELAB, used only for perceptual distance during palette
//!   matching. Derived deterministically from `Rgb`, never displayed.
//!
//! The dithering working buffer itself is plain `[f32; 3]` in the 0..=255
//! domain, so diffused fractional error survives between pixels; it converts
//! back through [`Rgb::from_f32_clamped`] at lookup time.

mod lab;
mod rgb;

pub use lab::Lab;
pub use rgb::Rgb;

use std::num::ParseIntError;
use thiserror::Error;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 digits)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}
