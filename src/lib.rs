//! mapart-dither: palette quantization and dithering for map tile art
//!
//! This library converts arbitrary raster images into images composed
//! exclusively of a fixed palette's colors, sized to a grid of 128x128
//! tiles. Quantization uses perceptual (CIELAB) nearest-color matching,
//! and Floyd-Steinberg error diffusion spreads each pixel's quantization
//! error to its unprocessed neighbors so that limited palettes still
//! reproduce smooth tones.
//!
//! # Quick Start
//!
//! The [`Ditherer`] is the primary entry point:
//!
//! ```
//! use mapart_dither::{Ditherer, DitherOptions, Palette, PixelBuffer, Rgb};
//!
//! let ditherer = Ditherer::new(Palette::carpet());
//! let image = PixelBuffer::filled(200, 150, Rgb::new(90, 140, 60));
//!
//! // Default options fit the image onto a single 128x128 tile.
//! let result = ditherer.dither(&image, &DitherOptions::new()).unwrap();
//! assert_eq!(result.width(), 128);
//! assert_eq!(result.height(), 128);
//!
//! // Every output pixel is a palette color.
//! let palette = ditherer.palette();
//! assert!(result.pixels().iter().all(|p| palette.colors().contains(p)));
//! ```
//!
//! Larger outputs use a [`TileGrid`]:
//!
//! ```
//! use mapart_dither::{Ditherer, DitherOptions, Palette, PixelBuffer, Rgb, TileGrid};
//!
//! let ditherer = Ditherer::new(Palette::carpet());
//! let image = PixelBuffer::filled(640, 480, Rgb::new(30, 80, 200));
//!
//! let options = DitherOptions::new().grid(TileGrid::new(2, 2).unwrap());
//! let result = ditherer.dither(&image, &options).unwrap();
//! assert_eq!(result.width(), 256);
//! assert_eq!(result.height(), 256);
//! ```
//!
//! # Color Spaces
//!
//! Two color spaces, two purposes:
//!
//! - [`Rgb`]: gamma-encoded 8-bit sRGB. Input pixels, palette entries,
//!   output pixels, and the error diffusion arithmetic all live here. The
//!   diffusion working buffer is `[f32; 3]` in the 0..=255 sRGB domain so
//!   fractional error survives between pixels.
//! - [`Lab`]: CIELAB (D65), used only to measure color distance during
//!   palette matching. Euclidean distance in CIELAB tracks human-perceived
//!   difference far better than distance in raw RGB, which over-weights
//!   some hue shifts and under-weights lightness changes.
//!
//! Matching in CIELAB while diffusing in the sRGB domain is a deliberate
//! pairing: the match decides which palette color *looks* closest, and the
//! diffusion bookkeeping stays in the same domain as the 8-bit pixel data
//! it corrects.
//!
//! # Pipeline Overview
//!
//! ```text
//! source image (any size)
//!     |
//!     v
//! resize + center          shrink-to-fit onto the tile canvas,
//!     |                    black fill, never upscaled
//!     v
//! row-major sweep          per pixel:
//!     |                      working value -> round/clamp to 8-bit
//!     |                      -> CIELAB nearest palette color (output)
//!     |                      -> error = pixel - chosen color
//!     |                      -> diffuse 7/16, 3/16, 5/16, 1/16 forward
//!     v
//! output buffer            palette colors only, same size as canvas
//! ```
//!
//! Quantize-only mode ([`Ditherer::quantize`]) skips the diffusion step and
//! is the baseline half of [`Ditherer::dither_with_comparison`].
//!
//! # File I/O
//!
//! Loading, saving, and resizing live in [`prep`] and delegate to the
//! `image` crate. The core operates on [`PixelBuffer`] values and never
//! touches the filesystem itself.

pub mod buffer;
pub mod color;
pub mod dither;
pub mod error;
pub mod palette;
pub mod prep;
pub mod tile;

#[cfg(test)]
mod domain_tests;

pub use buffer::PixelBuffer;
pub use color::{Lab, ParseColorError, Rgb};
pub use dither::{
    Comparison, DitherOptions, Ditherer, Kernel, PaletteInfo, ProgressObserver,
    DEFAULT_PROGRESS_BATCH, FLOYD_STEINBERG,
};
pub use error::{DimensionError, DitherError};
pub use palette::{Metric, Nearest, Palette, PaletteError, CARPET_COLORS};
pub use prep::{is_supported_format, load_image, resize_and_center, save_image, SUPPORTED_EXTENSIONS};
pub use tile::{GridAxis, TileGrid, MAX_TILES, MIN_TILES, TILE_SIZE};
