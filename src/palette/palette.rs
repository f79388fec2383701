//! Palette storage and nearest-color matching.

use std::str::FromStr;

use tracing::debug;

use super::carpet::CARPET_COLORS;
use super::error::PaletteError;
use crate::buffer::PixelBuffer;
use crate::color::{Lab, Rgb};

/// Distance metric for palette color matching.
///
/// Production dithering always uses [`Metric::Lab`]; raw RGB distance is kept
/// for comparison and testing, because Euclidean distance in RGB weights hues
/// inconsistently with human perception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Euclidean distance in CIELAB space (perceptual, default).
    #[default]
    Lab,
    /// Euclidean distance in raw RGB space.
    Rgb,
}

/// Result of a nearest-color query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest {
    /// Index of the winning palette entry.
    pub index: usize,
    /// The winning entry's color.
    pub color: Rgb,
    /// Distance from the target to the winning entry, in the query's metric.
    pub distance: f32,
}

/// An ordered, non-empty set of allowed output colors.
///
/// Each entry's CIELAB representation is computed once at construction and
/// cached; the palette is read-only for its entire lifetime, so it can be
/// shared freely across concurrent dithering runs.
///
/// Duplicate entries are legal and are not deduplicated; deduplication, if
/// wanted, is a caller concern. With duplicates present, [`nearest`] always
/// reports the lower index (first-minimum tie-break).
///
/// [`nearest`]: Palette::nearest
///
/// # Example
///
/// ```
/// use mapart_dither::{Metric, Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
/// let hit = palette.nearest(Rgb::new(30, 30, 30), Metric::Lab);
/// assert_eq!(hit.index, 0);
/// assert_eq!(hit.color, Rgb::BLACK);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
    lab: Vec<Lab>,
}

impl Palette {
    /// Create a palette from an ordered color sequence.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self::precompute(colors.to_vec()))
    }

    /// Create a palette from hex color strings like `"#DC0000"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] for an empty list or
    /// [`PaletteError::ParseColor`] for an invalid hex string.
    ///
    /// # Example
    ///
    /// ```
    /// use mapart_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF"]).unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::precompute(parsed))
    }

    /// The built-in 61-color carpet palette.
    pub fn carpet() -> Self {
        Self::precompute(CARPET_COLORS.to_vec())
    }

    /// Internal constructor for already-validated color lists.
    fn precompute(colors: Vec<Rgb>) -> Self {
        let lab: Vec<Lab> = colors.iter().map(|&c| Lab::from(c)).collect();
        debug!(colors = colors.len(), "palette constructed");
        Self { colors, lab }
    }

    /// Number of colors in the palette. Always at least 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The color at the given index.
    #[inline]
    pub fn color(&self, index: usize) -> Rgb {
        self.colors[index]
    }

    /// The cached CIELAB value at the given index.
    #[inline]
    pub fn lab(&self, index: usize) -> Lab {
        self.lab[index]
    }

    /// The palette colors, in order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Find the palette entry nearest to `target` under the chosen metric.
    ///
    /// Linear scan over the palette; ties resolve to the first entry that
    /// achieves the minimum (strict `<` comparison), so results are
    /// deterministic even with duplicate colors.
    pub fn nearest(&self, target: Rgb, metric: Metric) -> Nearest {
        let mut best_index = 0;
        let mut best_dist = f32::MAX;

        match metric {
            Metric::Lab => {
                let target_lab = Lab::from(target);
                for (i, &entry) in self.lab.iter().enumerate() {
                    let dist = target_lab.distance(entry);
                    if dist < best_dist {
                        best_dist = dist;
                        best_index = i;
                    }
                }
            }
            Metric::Rgb => {
                for (i, &entry) in self.colors.iter().enumerate() {
                    let dist = rgb_distance(target, entry);
                    if dist < best_dist {
                        best_dist = dist;
                        best_index = i;
                    }
                }
            }
        }

        Nearest {
            index: best_index,
            color: self.colors[best_index],
            distance: best_dist,
        }
    }

    /// Distance between two arbitrary colors under the chosen metric.
    ///
    /// Uses the same conversion rules as [`nearest`](Palette::nearest);
    /// exposed standalone for testing and telemetry.
    pub fn distance(a: Rgb, b: Rgb, metric: Metric) -> f32 {
        match metric {
            Metric::Lab => Lab::from(a).distance(Lab::from(b)),
            Metric::Rgb => rgb_distance(a, b),
        }
    }

    /// Render the palette as a swatch grid, one fixed-size cell per entry.
    ///
    /// Entries fill the grid row by row, `columns` cells per row; trailing
    /// cells in the last row stay white. This is a preview helper, not part
    /// of the dithering hot path.
    pub fn swatch_grid(&self, cell_size: u32, columns: u32) -> PixelBuffer {
        let cell = cell_size.max(1);
        let columns = columns.max(1);
        let rows = (self.colors.len() as u32).div_ceil(columns);

        let mut preview = PixelBuffer::filled(columns * cell, rows * cell, Rgb::WHITE);
        for (i, &color) in self.colors.iter().enumerate() {
            let col = i as u32 % columns;
            let row = i as u32 / columns;
            for dy in 0..cell {
                for dx in 0..cell {
                    preview.set(col * cell + dx, row * cell + dy, color);
                }
            }
        }
        preview
    }
}

#[inline]
fn rgb_distance(a: Rgb, b: Rgb) -> f32 {
    let dr = a.r as f32 - b.r as f32;
    let dg = a.g as f32 - b.g as f32;
    let db = a.b as f32 - b.b as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}
