//! Dithering run configuration.

use crate::tile::TileGrid;

/// Default progress reporting granularity, in pixels.
pub const DEFAULT_PROGRESS_BATCH: usize = 1000;

/// Configuration for a single dithering run.
///
/// # Defaults
///
/// - Resize to a single 128x128 tile (the standard map size)
/// - Progress reported every 1000 pixels
///
/// # Example
///
/// ```
/// use mapart_dither::{DitherOptions, TileGrid};
///
/// // Standard single-tile output
/// let options = DitherOptions::new();
///
/// // 2x1 tile canvas, chattier progress
/// let options = DitherOptions::new()
///     .grid(TileGrid::new(2, 1).unwrap())
///     .progress_batch(250);
///
/// // Process at the source's own size
/// let options = DitherOptions::new().no_resize();
/// ```
#[derive(Debug, Clone)]
pub struct DitherOptions {
    /// Target tile grid, or `None` to process the source at its own size.
    pub resize_to_grid: Option<TileGrid>,

    /// Progress reporting granularity in pixels. Values below 1 behave as 1.
    pub progress_batch: usize,
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self {
            resize_to_grid: Some(TileGrid::single()),
            progress_batch: DEFAULT_PROGRESS_BATCH,
        }
    }
}

impl DitherOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize and center the source onto the given tile grid's canvas.
    #[inline]
    pub fn grid(mut self, grid: TileGrid) -> Self {
        self.resize_to_grid = Some(grid);
        self
    }

    /// Process the source at its own size, skipping resize and centering.
    #[inline]
    pub fn no_resize(mut self) -> Self {
        self.resize_to_grid = None;
        self
    }

    /// Set the progress reporting granularity, in pixels.
    #[inline]
    pub fn progress_batch(mut self, batch: usize) -> Self {
        self.progress_batch = batch;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DitherOptions::default();
        assert_eq!(opts.resize_to_grid, Some(TileGrid::single()));
        assert_eq!(opts.progress_batch, 1000);
    }

    #[test]
    fn test_builder_chain() {
        let grid = TileGrid::new(3, 2).unwrap();
        let opts = DitherOptions::new().grid(grid).progress_batch(10);
        assert_eq!(opts.resize_to_grid, Some(grid));
        assert_eq!(opts.progress_batch, 10);

        let opts = opts.no_resize();
        assert_eq!(opts.resize_to_grid, None);
    }
}
