//! End-to-end pipeline tests: file in, dithered tile art out.

use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use mapart_dither::{
    load_image, save_image, DitherError, DitherOptions, Ditherer, Palette, PixelBuffer, Rgb,
    TileGrid, TILE_SIZE,
};

fn gradient(width: u32, height: u32) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        Rgb::new(
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            128,
        )
    })
}

#[test]
fn test_png_round_trip_is_lossless() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("source.png");

    let original = gradient(90, 60);
    save_image(&original, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded, original);
}

#[test]
fn test_full_pipeline_single_tile() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("photo.png");
    let output = dir.path().join("map.png");

    save_image(&gradient(300, 200), &input).unwrap();

    let ditherer = Ditherer::new(Palette::carpet());
    let source = load_image(&input).unwrap();
    let result = ditherer.dither(&source, &DitherOptions::new()).unwrap();

    assert_eq!(result.width(), TILE_SIZE);
    assert_eq!(result.height(), TILE_SIZE);

    let palette = ditherer.palette();
    assert!(result.pixels().iter().all(|p| palette.colors().contains(p)));

    save_image(&result, &output).unwrap();
    assert_eq!(load_image(&output).unwrap(), result);
}

#[test]
fn test_comparison_products_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let ditherer = Ditherer::new(Palette::carpet());

    let options = DitherOptions::new().grid(TileGrid::new(2, 1).unwrap());
    let cmp = ditherer
        .dither_with_comparison(&gradient(512, 256), &options)
        .unwrap();

    for (name, buffer) in [
        ("original.png", &cmp.original),
        ("quantized.png", &cmp.quantized),
        ("dithered.png", &cmp.dithered),
    ] {
        let path = dir.path().join(name);
        save_image(buffer, &path).unwrap();
        assert_eq!(&load_image(&path).unwrap(), buffer);
    }
}

#[test]
fn test_unsupported_extension_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.webp");

    let buffer = PixelBuffer::filled(4, 4, Rgb::WHITE);
    let result = save_image(&buffer, &path);
    assert!(matches!(result, Err(DitherError::UnsupportedFormat { .. })));
    assert!(!path.exists(), "rejected save must not create a file");
}

#[test]
fn test_missing_file_surfaces_codec_error() {
    let result = load_image(Path::new("/nonexistent/definitely-missing.png"));
    assert!(result.is_err());
}

#[test]
fn test_swatch_preview_saves() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("palette.png");

    let preview = Palette::carpet().swatch_grid(50, 4);
    save_image(&preview, &path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.width(), 200);
    assert_eq!(loaded.height(), 800);
    // First cell is the first carpet color
    assert_eq!(loaded.get(10, 10), Rgb::new(0xDC, 0x00, 0x00));
}
