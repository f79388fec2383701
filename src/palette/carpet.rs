//! Built-in carpet color palette.
//!
//! The 61 flat-placeable carpet colors usable for map tile art. Kept as
//! plain RGB triples so the built-in palette constructor cannot fail.

use crate::color::Rgb;

/// The 61 carpet colors, in canonical order.
///
/// Order matters: palette indices are stable across runs, and the
/// nearest-color tie-break resolves to the lower index.
pub const CARPET_COLORS: [Rgb; 61] = [
    Rgb::new(0xDC, 0x00, 0x00), Rgb::new(0xA3, 0x29, 0x2A), Rgb::new(0x84, 0x2C, 0x2C), Rgb::new(0x8A, 0x42, 0x43),
    Rgb::new(0x7A, 0x33, 0x27), Rgb::new(0x60, 0x01, 0x00), Rgb::new(0x4F, 0x15, 0x19), Rgb::new(0xBA, 0x6D, 0x2C),
    Rgb::new(0xA0, 0x72, 0x1F), Rgb::new(0x89, 0x46, 0x1F), Rgb::new(0x6F, 0x4A, 0x2A), Rgb::new(0x7B, 0x66, 0x3E),
    Rgb::new(0x58, 0x41, 0x2C), Rgb::new(0x82, 0x5E, 0x42), Rgb::new(0x74, 0x5C, 0x54), Rgb::new(0xB4, 0x98, 0x8A),
    Rgb::new(0xBA, 0x96, 0x7E), Rgb::new(0xD5, 0xC9, 0x8C), Rgb::new(0xC5, 0xC5, 0x2C), Rgb::new(0xD7, 0xCD, 0x42),
    Rgb::new(0x6D, 0x99, 0x30), Rgb::new(0x6D, 0xB0, 0x15), Rgb::new(0x58, 0x64, 0x2D), Rgb::new(0x58, 0x6D, 0x2C),
    Rgb::new(0x41, 0x46, 0x24), Rgb::new(0x00, 0x6A, 0x00), Rgb::new(0x00, 0xBB, 0x32), Rgb::new(0x6D, 0x90, 0x81),
    Rgb::new(0x11, 0x9B, 0x72), Rgb::new(0x32, 0x7A, 0x78), Rgb::new(0x12, 0x6C, 0x73), Rgb::new(0x41, 0x6D, 0x84),
    Rgb::new(0x58, 0x84, 0xBA), Rgb::new(0x3F, 0x6E, 0xDC), Rgb::new(0x37, 0x37, 0xDC), Rgb::new(0x2C, 0x41, 0x99),
    Rgb::new(0x4F, 0xBC, 0xB7), Rgb::new(0x8A, 0x8A, 0xDC), Rgb::new(0x8D, 0x90, 0x9E), Rgb::new(0x60, 0x5D, 0x77),
    Rgb::new(0x41, 0x35, 0x4F), Rgb::new(0x99, 0x41, 0xBA), Rgb::new(0x6D, 0x36, 0x99), Rgb::new(0xD0, 0x6D, 0x8E),
    Rgb::new(0x7F, 0x36, 0x53), Rgb::new(0x80, 0x4B, 0x5D), Rgb::new(0x69, 0x3E, 0x4B), Rgb::new(0x4A, 0x25, 0x35),
    Rgb::new(0xDC, 0xDC, 0xDC), Rgb::new(0xDC, 0xD9, 0xD3), Rgb::new(0xAB, 0xAB, 0xAB), Rgb::new(0x90, 0x90, 0x90),
    Rgb::new(0x84, 0x84, 0x84), Rgb::new(0x60, 0x60, 0x60), Rgb::new(0x56, 0x56, 0x56), Rgb::new(0x4B, 0x4F, 0x4F),
    Rgb::new(0x41, 0x41, 0x41), Rgb::new(0x15, 0x15, 0x15), Rgb::new(0x1F, 0x12, 0x0D), Rgb::new(0x31, 0x23, 0x1E),
    Rgb::new(0x41, 0x2B, 0x1E),
];
