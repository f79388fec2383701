//! Domain-critical regression tests for mapart-dither.
//!
//! These tests guard the observable behaviors that define the output format,
//! not just happy paths. Each test documents the regression it catches.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::dither::{diffuse_error, DitherOptions, Ditherer};
use crate::error::{DimensionError, DitherError};
use crate::palette::{Metric, Palette, PaletteError};
use crate::tile::{GridAxis, TileGrid};

fn bw_palette() -> Palette {
    Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap()
}

fn own_size(batch: usize) -> DitherOptions {
    DitherOptions::new().no_resize().progress_batch(batch)
}

// ========================================================================
// Matching space: nearest-color decisions must be made in CIELAB
// ========================================================================

/// If this breaks, it means: palette matching regressed to raw RGB distance.
/// sRGB 128 grey has L* ~53.6, perceptually nearer white (distance 46.4)
/// than black (53.6); raw RGB distance would pick black (128 < 127.5 is
/// false, but 124 below makes the metrics disagree cleanly).
#[test]
fn test_matching_is_perceptual_not_raw_rgb() {
    let palette = bw_palette();

    let probe = Rgb::new(124, 124, 124);
    assert_eq!(palette.nearest(probe, Metric::Rgb).color, Rgb::BLACK);
    assert_eq!(palette.nearest(probe, Metric::Lab).color, Rgb::WHITE);

    // The production pipeline follows the Lab decision
    let ditherer = Ditherer::new(palette);
    let image = PixelBuffer::filled(4, 4, probe);
    let result = ditherer.quantize(&image, &own_size(1000)).unwrap();
    assert!(result.pixels().iter().all(|&p| p == Rgb::WHITE));
}

// ========================================================================
// Diffusion domain: error arithmetic stays in the 0..=255 sRGB domain
// ========================================================================

/// If this breaks, it means: error diffusion moved to a different numeric
/// domain. In the sRGB 0..=255 domain, dithering flat 128 grey to black and
/// white conserves the mean, so the white ratio lands near 128/255 ~ 0.50.
/// (Linear-light diffusion would land near 0.21 instead.)
#[test]
fn test_diffusion_preserves_srgb_mean() {
    let ditherer = Ditherer::new(bw_palette());
    let size = 32u32;
    let image = PixelBuffer::filled(size, size, Rgb::new(128, 128, 128));
    let result = ditherer.dither(&image, &own_size(1000)).unwrap();

    let total = (size * size) as f64;
    let whites = result.pixels().iter().filter(|&&p| p == Rgb::WHITE).count();
    let ratio = whites as f64 / total;
    assert!(
        (ratio - 128.0 / 255.0).abs() < 0.12,
        "white ratio {:.3}, expected ~0.502 for sRGB-domain diffusion",
        ratio
    );
}

/// If this breaks, it means: diffused error is no longer conserved. Away
/// from image borders and the clamp limits, the four kernel shares must sum
/// to exactly the produced error.
#[test]
fn test_interior_error_is_fully_conserved() {
    let mut working = vec![[100.0f32; 3]; 25]; // 5x5
    diffuse_error(&mut working, 5, 5, 2, 2, [48.0, -48.0, 17.0]);

    let sums = working.iter().fold([0.0f64; 3], |mut acc, px| {
        for c in 0..3 {
            acc[c] += px[c] as f64;
        }
        acc
    });
    let base = 2500.0;
    assert!((sums[0] - (base + 48.0)).abs() < 1e-3);
    assert!((sums[1] - (base - 48.0)).abs() < 1e-3);
    assert!((sums[2] - (base + 17.0)).abs() < 1e-3);
}

// ========================================================================
// Determinism and tie-breaking
// ========================================================================

/// If this breaks, it means: the sweep picked up a nondeterministic input
/// (iteration order, uninitialized state, parallelism without ordering).
/// Identical inputs must produce byte-identical outputs.
#[test]
fn test_runs_are_byte_identical() {
    let ditherer = Ditherer::new(Palette::carpet());
    let image = PixelBuffer::from_fn(96, 64, |x, y| {
        Rgb::new((x * 2) as u8, (y * 3) as u8, ((x + y) * 2) as u8)
    });
    let options = own_size(1000);
    let a = ditherer.dither(&image, &options).unwrap();
    let b = ditherer.dither(&image, &options).unwrap();
    assert_eq!(a, b);
}

/// If this breaks, it means: the nearest-color scan stopped resolving ties
/// to the lowest index. Duplicates are legal palette entries, and first-wins
/// keeps output stable when they exist.
#[test]
fn test_duplicate_palette_entries_resolve_to_first() {
    let grey = Rgb::new(140, 140, 140);
    let palette = Palette::new(&[grey, grey]).unwrap();
    let hit = palette.nearest(Rgb::new(100, 100, 100), Metric::Lab);
    assert_eq!(hit.index, 0);

    let ditherer = Ditherer::new(palette);
    let image = PixelBuffer::filled(3, 3, Rgb::new(100, 100, 100));
    let result = ditherer.dither(&image, &own_size(1000)).unwrap();
    assert!(result.pixels().iter().all(|&p| p == grey));
}

// ========================================================================
// Output closure and bounds safety
// ========================================================================

/// If this breaks, it means: a non-palette color leaked into the output.
/// Every output pixel, including black canvas fill, must be a palette entry.
#[test]
fn test_output_contains_only_palette_colors() {
    let ditherer = Ditherer::new(Palette::carpet());
    let image = PixelBuffer::from_fn(200, 90, |x, y| {
        Rgb::new((x % 251) as u8, (y * 7 % 239) as u8, ((x * y) % 227) as u8)
    });
    let result = ditherer
        .dither(&image, &DitherOptions::new().grid(TileGrid::single()))
        .unwrap();

    let palette = ditherer.palette();
    for &pixel in result.pixels() {
        assert!(
            palette.colors().contains(&pixel),
            "non-palette color {} in output",
            pixel
        );
    }
}

/// If this breaks, it means: the diffusion stencil wrote outside the image.
/// Degenerate geometries exercise every boundary case of the kernel.
#[test]
fn test_degenerate_geometries_complete() {
    let ditherer = Ditherer::new(Palette::carpet());
    for (w, h) in [(1, 1), (1, 64), (64, 1), (2, 2)] {
        let image = PixelBuffer::filled(w, h, Rgb::new(137, 92, 210));
        let result = ditherer.dither(&image, &own_size(1000)).unwrap();
        assert_eq!((result.width(), result.height()), (w, h));
    }
}

// ========================================================================
// Validation: all failures fire before any pixel is processed
// ========================================================================

#[test]
fn test_empty_palette_rejected_at_construction() {
    assert!(matches!(Palette::new(&[]), Err(PaletteError::Empty)));
}

#[test]
fn test_tile_grid_bounds_are_inclusive() {
    assert!(TileGrid::new(1, 1).is_ok());
    assert!(TileGrid::new(8, 8).is_ok());

    let too_small = TileGrid::new(0, 4).unwrap_err();
    assert!(matches!(
        too_small,
        DitherError::InvalidDimensions(DimensionError::GridAxisOutOfRange {
            axis: GridAxis::Width,
            value: 0,
            min: 1,
            max: 8,
        })
    ));

    let too_large = TileGrid::new(4, 9).unwrap_err();
    assert!(matches!(
        too_large,
        DitherError::InvalidDimensions(DimensionError::GridAxisOutOfRange {
            axis: GridAxis::Height,
            value: 9,
            ..
        })
    ));
}

/// If this breaks, it means: the zero-area check moved out of the dimension
/// taxonomy. Grid-bounds failures and zero-area sources are both geometry
/// errors and must both surface as `InvalidDimensions`, so one match arm
/// catches every dimension problem.
#[test]
fn test_zero_area_source_is_a_dimension_error() {
    let ditherer = Ditherer::new(bw_palette());
    let empty = PixelBuffer::filled(3, 0, Rgb::BLACK);
    let result = ditherer.quantize(&empty, &own_size(1000));
    assert!(matches!(
        result,
        Err(DitherError::InvalidDimensions(
            DimensionError::ZeroAreaSource {
                width: 3,
                height: 0
            }
        ))
    ));
}

// ========================================================================
// Comparison product
// ========================================================================

/// If this breaks, it means: the three comparison buffers stopped sharing
/// one prepared source. They must agree on dimensions, and on gradients the
/// dithered result must visibly differ from plain quantization.
#[test]
fn test_comparison_shares_one_prepared_source() {
    let ditherer = Ditherer::new(bw_palette());
    let gradient = PixelBuffer::from_fn(300, 200, |x, _| {
        let v = (x * 255 / 299) as u8;
        Rgb::new(v, v, v)
    });

    let options = DitherOptions::new().grid(TileGrid::new(2, 1).unwrap());
    let cmp = ditherer.dither_with_comparison(&gradient, &options).unwrap();

    for buf in [&cmp.original, &cmp.quantized, &cmp.dithered] {
        assert_eq!(buf.width(), 256);
        assert_eq!(buf.height(), 128);
    }
    assert_ne!(cmp.quantized, cmp.dithered);
    // The original stays unquantized: the gradient keeps mid-grey values
    assert!(cmp
        .original
        .pixels()
        .iter()
        .any(|&p| p != Rgb::BLACK && p != Rgb::WHITE));
}
