//! CIELAB perceptual color space
//!
//! CIELAB is a perceptually uniform color space: Euclidean distance between
//! two Lab values approximates the perceived difference between the colors
//! far better than distance in raw RGB, which systematically over- and
//! under-weights hues. Palette matching therefore runs in Lab by default.
//!
//! The conversion is sRGB (D65) -> linear RGB -> XYZ -> Lab. It is fixed and
//! deterministic; Lab values are derived from [`Rgb`] once and cached, never
//! displayed directly.

use super::rgb::Rgb;

// CIE constants for the Lab transfer function.
const EPSILON: f32 = 0.008856;
const KAPPA_INV: f32 = 7.787;

// D65 reference white.
const WHITE_X: f32 = 0.95047;
const WHITE_Y: f32 = 1.0;
const WHITE_Z: f32 = 1.08883;

/// A color in CIELAB space.
///
/// # Components
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green-red axis, roughly -128..=127
/// - `b`: blue-yellow axis, roughly -128..=127
///
/// Values are not clamped; they are only ever used for distance comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f32,
    /// Green-red axis
    pub a: f32,
    /// Blue-yellow axis
    pub b: f32,
}

impl Lab {
    /// Create a Lab color from raw components.
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance to another Lab color.
    ///
    /// This is the perceptual distance metric used for palette matching.
    ///
    /// # Example
    ///
    /// ```
    /// use mapart_dither::{Lab, Rgb};
    ///
    /// let grey = Lab::from(Rgb::new(128, 128, 128));
    /// let black = Lab::from(Rgb::BLACK);
    /// let white = Lab::from(Rgb::WHITE);
    ///
    /// // Mid-grey sits perceptually closer to white than to black
    /// assert!(grey.distance(white) < grey.distance(black));
    /// ```
    #[inline]
    pub fn distance(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// sRGB gamma decode for a single channel normalized to [0, 1].
#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// CIE Lab transfer function.
#[inline]
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_INV * t + 16.0 / 116.0
    }
}

impl From<Rgb> for Lab {
    /// Convert an 8-bit RGB color to CIELAB.
    ///
    /// Channels are normalized to [0, 1], gamma-decoded to linear RGB,
    /// transformed to XYZ with the D65 white point, then mapped to Lab.
    fn from(rgb: Rgb) -> Self {
        let r = srgb_to_linear(rgb.r as f32 / 255.0);
        let g = srgb_to_linear(rgb.g as f32 / 255.0);
        let b = srgb_to_linear(rgb.b as f32 / 255.0);

        // sRGB -> XYZ, D65
        let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
        let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
        let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}
