//! Palette ownership and nearest-color lookup.
//!
//! A [`Palette`] owns the fixed list of allowed output colors, caches each
//! entry's CIELAB representation at construction, and answers nearest-color
//! queries under a selectable [`Metric`]. It is immutable after construction
//! and safe to share across concurrent dithering runs.

mod carpet;
mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use carpet::CARPET_COLORS;
pub use error::PaletteError;
pub use palette::{Metric, Nearest, Palette};
