//! The quantization and error-diffusion sweep.
//!
//! A [`Ditherer`] consumes a [`Palette`] and a source [`PixelBuffer`] and
//! produces a quantized output buffer. Two modes are available: quantize-only
//! (nearest-color mapping, no diffusion) and full Floyd-Steinberg dithering.
//! Each run validates and prepares its input before any pixel is processed,
//! so a failed run never exposes a partial output buffer.

use tracing::debug;

use super::kernel::FLOYD_STEINBERG;
use super::options::DitherOptions;
use super::progress::{ProgressObserver, ProgressTracker};
use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::error::{DimensionError, DitherError};
use crate::palette::{Metric, Palette};
use crate::prep;

/// Diagnostic summary of a ditherer's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteInfo {
    /// Number of colors in the palette.
    pub color_count: usize,
    /// Label for the matching color space.
    pub color_space: &'static str,
    /// Label for the dithering algorithm.
    pub algorithm: &'static str,
}

/// The three same-size products of a comparison run.
///
/// All buffers share the post-resize content and dimensions, so they can be
/// displayed side by side.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The resized (or untouched) source, unquantized.
    pub original: PixelBuffer,
    /// Nearest-color mapping with no error diffusion.
    pub quantized: PixelBuffer,
    /// Full Floyd-Steinberg result.
    pub dithered: PixelBuffer,
}

/// Sweep mode: plain nearest-color mapping, or mapping plus error diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Quantize,
    Diffuse,
}

/// Palette-driven image quantizer with Floyd-Steinberg error diffusion.
///
/// Construction takes the palette explicitly; there is no global palette
/// state. A `Ditherer` is immutable, so one instance can serve many runs,
/// including concurrent runs from different threads (each run owns its own
/// working and output buffers).
///
/// # Example
///
/// ```
/// use mapart_dither::{Ditherer, DitherOptions, Palette, PixelBuffer, Rgb};
///
/// let ditherer = Ditherer::new(Palette::carpet());
/// let image = PixelBuffer::filled(16, 16, Rgb::new(90, 140, 60));
///
/// let result = ditherer.dither(&image, &DitherOptions::new()).unwrap();
/// assert_eq!(result.width(), 128);
/// assert_eq!(result.height(), 128);
/// ```
#[derive(Debug, Clone)]
pub struct Ditherer {
    palette: Palette,
}

impl Ditherer {
    /// Create a ditherer over the given palette.
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// The palette this ditherer matches against.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Diagnostic summary: color count plus space and algorithm labels.
    pub fn palette_info(&self) -> PaletteInfo {
        PaletteInfo {
            color_count: self.palette.len(),
            color_space: "CIELAB",
            algorithm: "Floyd-Steinberg error diffusion",
        }
    }

    /// Quantize without error diffusion.
    ///
    /// Every pixel is matched against the untouched source value; used as a
    /// baseline for visual comparison against the dithered result.
    ///
    /// # Errors
    ///
    /// Fails before any pixel is processed on a zero-area source
    /// ([`DimensionError::ZeroAreaSource`]).
    pub fn quantize(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
    ) -> Result<PixelBuffer, DitherError> {
        self.run(source, options, Mode::Quantize, None)
    }

    /// [`quantize`](Self::quantize) with a progress observer.
    pub fn quantize_observed(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
        observer: &mut dyn ProgressObserver,
    ) -> Result<PixelBuffer, DitherError> {
        self.run(source, options, Mode::Quantize, Some(observer))
    }

    /// Quantize with full Floyd-Steinberg error diffusion.
    ///
    /// # Errors
    ///
    /// Fails before any pixel is processed on a zero-area source
    /// ([`DimensionError::ZeroAreaSource`]).
    pub fn dither(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
    ) -> Result<PixelBuffer, DitherError> {
        self.run(source, options, Mode::Diffuse, None)
    }

    /// [`dither`](Self::dither) with a progress observer.
    pub fn dither_observed(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
        observer: &mut dyn ProgressObserver,
    ) -> Result<PixelBuffer, DitherError> {
        self.run(source, options, Mode::Diffuse, Some(observer))
    }

    /// Produce the original, quantize-only, and dithered images in one run.
    ///
    /// The resize/centering step runs once; all three buffers share its
    /// content and dimensions.
    pub fn dither_with_comparison(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
    ) -> Result<Comparison, DitherError> {
        self.comparison(source, options, None)
    }

    /// [`dither_with_comparison`](Self::dither_with_comparison) with a
    /// progress observer; the observer follows the diffusion sweep.
    pub fn dither_with_comparison_observed(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
        observer: &mut dyn ProgressObserver,
    ) -> Result<Comparison, DitherError> {
        self.comparison(source, options, Some(observer))
    }

    fn comparison(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
        observer: Option<&mut dyn ProgressObserver>,
    ) -> Result<Comparison, DitherError> {
        let original = self.prepare(source, options)?;

        let mut silent = ProgressTracker::new(original.pixel_count(), options.progress_batch, None);
        let quantized = self.sweep(&original, Mode::Quantize, &mut silent);

        let mut tracker =
            ProgressTracker::new(original.pixel_count(), options.progress_batch, observer);
        let dithered = self.sweep(&original, Mode::Diffuse, &mut tracker);

        Ok(Comparison {
            original,
            quantized,
            dithered,
        })
    }

    fn run(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
        mode: Mode,
        observer: Option<&mut dyn ProgressObserver>,
    ) -> Result<PixelBuffer, DitherError> {
        let prepared = self.prepare(source, options)?;
        let mut tracker =
            ProgressTracker::new(prepared.pixel_count(), options.progress_batch, observer);
        Ok(self.sweep(&prepared, mode, &mut tracker))
    }

    /// Validation and resize. All failures happen here, before the sweep.
    fn prepare(
        &self,
        source: &PixelBuffer,
        options: &DitherOptions,
    ) -> Result<PixelBuffer, DitherError> {
        if source.is_zero_area() {
            return Err(DimensionError::ZeroAreaSource {
                width: source.width(),
                height: source.height(),
            }
            .into());
        }

        let prepared = match options.resize_to_grid {
            Some(grid) => {
                debug!(
                    width_tiles = grid.width_tiles(),
                    height_tiles = grid.height_tiles(),
                    "preparing tile canvas"
                );
                prep::resize_and_center(source, grid.canvas_width(), grid.canvas_height())
            }
            None => source.clone(),
        };
        Ok(prepared)
    }

    /// The pixel loop. Row-major order is a correctness requirement: each
    /// working value may include error diffused from the pixel to its left
    /// and up to three pixels in the row above.
    fn sweep(&self, source: &PixelBuffer, mode: Mode, tracker: &mut ProgressTracker) -> PixelBuffer {
        let width = source.width();
        let height = source.height();
        debug!(width, height, ?mode, "sweep started");

        let mut output = PixelBuffer::filled(width, height, Rgb::BLACK);

        match mode {
            Mode::Quantize => {
                for y in 0..height {
                    for x in 0..width {
                        let nearest = self.palette.nearest(source.get(x, y), Metric::Lab);
                        output.set(x, y, nearest.color);
                        tracker.advance();
                    }
                }
            }
            Mode::Diffuse => {
                let mut working: Vec<[f32; 3]> =
                    source.pixels().iter().map(|p| p.to_f32()).collect();

                for y in 0..height {
                    for x in 0..width {
                        let idx = (y as usize) * (width as usize) + (x as usize);
                        // The working value may already carry diffused error;
                        // round and clamp back into the 8-bit domain for lookup.
                        let current = Rgb::from_f32_clamped(working[idx]);
                        let nearest = self.palette.nearest(current, Metric::Lab);
                        output.set(x, y, nearest.color);

                        let error = [
                            current.r as f32 - nearest.color.r as f32,
                            current.g as f32 - nearest.color.g as f32,
                            current.b as f32 - nearest.color.b as f32,
                        ];
                        diffuse_error(&mut working, width, height, x, y, error);
                        tracker.advance();
                    }
                }
            }
        }

        tracker.finish();
        debug!(width, height, ?mode, "sweep finished");
        output
    }
}

/// Distribute a pixel's quantization error to its stencil neighbors.
///
/// Each in-bounds neighbor channel is clamped to `[0, 255]` immediately after
/// the addition. Out-of-bounds neighbors are skipped silently; their error
/// share is dropped, not redistributed. Both behaviors are observable output
/// characteristics and must not change.
pub(crate) fn diffuse_error(
    working: &mut [[f32; 3]],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    error: [f32; 3],
) {
    let divisor = FLOYD_STEINBERG.divisor as f32;
    for &(dx, dy, weight) in FLOYD_STEINBERG.entries {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
            continue;
        }
        let share = weight as f32 / divisor;
        let neighbor = &mut working[(ny as usize) * (width as usize) + (nx as usize)];
        for c in 0..3 {
            neighbor[c] = (neighbor[c] + error[c] * share).clamp(0.0, 255.0);
        }
    }
}
