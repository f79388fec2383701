//! Image preparation collaborators: decode, encode, resize-and-center.
//!
//! This module holds the I/O boundary of the crate. All decode/encode and
//! resampling work is delegated to the `image` crate; nothing here performs
//! color-science work. The dithering core consumes these functions and
//! surfaces their failures unchanged.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbImage;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::error::DitherError;

/// File extensions accepted by [`load_image`] and [`save_image`].
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "gif"];

/// Background color for pixels outside the centered content.
///
/// Fill pixels are dithered like any other pixel; they are not special-cased.
pub const CANVAS_FILL: Rgb = Rgb::BLACK;

/// True if the path's extension is in the supported set (case-insensitive).
pub fn is_supported_format(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Load an image file into a [`PixelBuffer`], converting to 8-bit RGB.
///
/// Fails fast on unsupported extensions before touching the file, so no
/// decode work starts for formats the pipeline will not handle.
///
/// # Errors
///
/// [`DitherError::UnsupportedFormat`] for extensions outside
/// [`SUPPORTED_EXTENSIONS`]; [`DitherError::Image`] if decoding fails.
pub fn load_image(path: &Path) -> Result<PixelBuffer, DitherError> {
    if !is_supported_format(path) {
        return Err(DitherError::UnsupportedFormat {
            path: path.display().to_string(),
        });
    }

    let decoded = image::open(path)?.to_rgb8();
    debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        "image loaded"
    );
    Ok(from_rgb_image(decoded))
}

/// Save a [`PixelBuffer`] to a file; format follows the extension.
///
/// # Errors
///
/// [`DitherError::UnsupportedFormat`] for extensions outside
/// [`SUPPORTED_EXTENSIONS`]; [`DitherError::Image`] if encoding fails.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<(), DitherError> {
    if !is_supported_format(path) {
        return Err(DitherError::UnsupportedFormat {
            path: path.display().to_string(),
        });
    }

    to_rgb_image(buffer).save(path)?;
    debug!(path = %path.display(), "image saved");
    Ok(())
}

/// Fit `source` inside a `canvas_width` x `canvas_height` canvas and center it.
///
/// The source is scaled down (never up) preserving aspect ratio, using
/// Lanczos3 resampling, then pasted centered onto a canvas pre-filled with
/// [`CANVAS_FILL`]. Deterministic for identical inputs.
pub fn resize_and_center(
    source: &PixelBuffer,
    canvas_width: u32,
    canvas_height: u32,
) -> PixelBuffer {
    debug_assert!(!source.is_zero_area(), "source must have non-zero area");
    debug_assert!(canvas_width > 0 && canvas_height > 0, "canvas must have non-zero area");

    let src = to_rgb_image(source);

    // Shrink-to-fit: images already inside the canvas keep their size.
    let scale = f64::min(
        canvas_width as f64 / source.width() as f64,
        canvas_height as f64 / source.height() as f64,
    )
    .min(1.0);
    let fit_width = ((source.width() as f64 * scale).round() as u32).max(1);
    let fit_height = ((source.height() as f64 * scale).round() as u32).max(1);

    let fitted = if fit_width == source.width() && fit_height == source.height() {
        src
    } else {
        imageops::resize(&src, fit_width, fit_height, FilterType::Lanczos3)
    };

    let mut canvas = RgbImage::from_pixel(
        canvas_width,
        canvas_height,
        image::Rgb(CANVAS_FILL.to_bytes()),
    );
    let offset_x = (canvas_width - fit_width) / 2;
    let offset_y = (canvas_height - fit_height) / 2;
    imageops::replace(&mut canvas, &fitted, offset_x as i64, offset_y as i64);

    debug!(
        source_width = source.width(),
        source_height = source.height(),
        canvas_width,
        canvas_height,
        fit_width,
        fit_height,
        "resized and centered"
    );
    from_rgb_image(canvas)
}

fn to_rgb_image(buffer: &PixelBuffer) -> RgbImage {
    let mut img = RgbImage::new(buffer.width(), buffer.height());
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgb(buffer.get(x, y).to_bytes());
    }
    img
}

fn from_rgb_image(img: RgbImage) -> PixelBuffer {
    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
        .collect();
    PixelBuffer::from_pixels(width, height, pixels)
}
