//! Quantization and Floyd-Steinberg error diffusion.
//!
//! The [`Ditherer`] is the primary entry point: it owns a palette and runs
//! the quantization sweep over a prepared pixel buffer. Supporting pieces:
//!
//! - [`Kernel`] / [`FLOYD_STEINBERG`]: the error diffusion stencil
//! - [`DitherOptions`]: per-run configuration (tile grid, progress batch)
//! - [`ProgressObserver`]: progress callback contract
//! - [`Comparison`]: the original/quantized/dithered triple

mod ditherer;
mod kernel;
mod options;
mod progress;

pub use ditherer::{Comparison, Ditherer, PaletteInfo};
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use options::{DitherOptions, DEFAULT_PROGRESS_BATCH};
pub use progress::ProgressObserver;

#[cfg(test)]
pub(crate) use ditherer::diffuse_error;
