//! 8-bit RGB color type
//!
//! `Rgb` is the storage and output color space of the crate. Palette entries,
//! pixel buffers, and dithered output are all 8-bit RGB triples; the
//! perceptual [`Lab`](super::Lab) representation exists only for distance
//! comparisons.

use std::fmt;
use std::str::FromStr;

use super::ParseColorError;

/// A color as an 8-bit RGB triple.
///
/// Values are always in `0..=255` per channel. Any computation that could
/// leave that range (error diffusion, swatch math) must clamp before
/// constructing an `Rgb`; use [`Rgb::from_f32_clamped`] for float sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Pure black, used as the canvas fill for tile centering.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white, used as the swatch-grid background.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from per-channel floats in the 0..=255 domain.
    ///
    /// Each channel is rounded to the nearest integer and clamped into
    /// `0..=255`. This is the single entry point from the floating-point
    /// working buffer back into the 8-bit domain.
    ///
    /// # Example
    ///
    /// ```
    /// use mapart_dither::Rgb;
    ///
    /// let c = Rgb::from_f32_clamped([255.7, -3.0, 127.5]);
    /// assert_eq!(c, Rgb::new(255, 0, 128));
    /// ```
    #[inline]
    pub fn from_f32_clamped(channels: [f32; 3]) -> Self {
        Self {
            r: channels[0].round().clamp(0.0, 255.0) as u8,
            g: channels[1].round().clamp(0.0, 255.0) as u8,
            b: channels[2].round().clamp(0.0, 255.0) as u8,
        }
    }

    /// The channels as a `[f32; 3]` array in the 0..=255 domain.
    ///
    /// Used to seed the dithering working buffer and to compute signed
    /// quantization error.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [self.r as f32, self.g as f32, self.b as f32]
    }

    /// The channels as a `[u8; 3]` array.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    /// Formats as an uppercase hex color, e.g. `#DC0000`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB`, and `RGB`.
    ///
    /// # Example
    ///
    /// ```
    /// use mapart_dither::Rgb;
    ///
    /// let red: Rgb = "#DC0000".parse().unwrap();
    /// assert_eq!(red, Rgb::new(220, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // Byte-slicing below requires single-byte chars; hex digits are
        // ASCII, so anything else cannot be a valid color anyway.
        if !hex.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)?;
                let g = u8::from_str_radix(&hex[2..4], 16)?;
                let b = u8::from_str_radix(&hex[4..6], 16)?;
                Ok(Rgb::new(r, g, b))
            }
            3 => {
                // Shorthand: each digit doubles, #F80 -> #FF8800
                let r = u8::from_str_radix(&hex[0..1], 16)?;
                let g = u8::from_str_radix(&hex[1..2], 16)?;
                let b = u8::from_str_radix(&hex[2..3], 16)?;
                Ok(Rgb::new(r * 17, g * 17, b * 17))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
