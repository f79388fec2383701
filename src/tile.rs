//! Tile grid geometry.
//!
//! Output canvases are built from fixed-size 128x128 square tiles arranged
//! in an N x M grid. [`TileGrid`] validates the grid bounds at construction,
//! so every instance reachable by the ditherer describes a legal canvas.

use std::fmt;

use crate::error::{DimensionError, DitherError};

/// Edge length of a single square tile, in pixels.
pub const TILE_SIZE: u32 = 128;

/// Inclusive lower bound for tiles per axis.
pub const MIN_TILES: u32 = 1;

/// Inclusive upper bound for tiles per axis.
pub const MAX_TILES: u32 = 8;

/// Which grid axis a [`DimensionError::GridAxisOutOfRange`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Horizontal tile count.
    Width,
    /// Vertical tile count.
    Height,
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAxis::Width => write!(f, "width"),
            GridAxis::Height => write!(f, "height"),
        }
    }
}

/// A validated N x M arrangement of 128x128 tiles.
///
/// # Example
///
/// ```
/// use mapart_dither::{TileGrid, TILE_SIZE};
///
/// let grid = TileGrid::new(2, 1).unwrap();
/// assert_eq!(grid.canvas_width(), 2 * TILE_SIZE);
/// assert_eq!(grid.canvas_height(), TILE_SIZE);
///
/// assert!(TileGrid::new(9, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width_tiles: u32,
    height_tiles: u32,
}

impl TileGrid {
    /// Create a grid, validating both axes against `1..=8`.
    ///
    /// # Errors
    ///
    /// Returns [`DitherError::InvalidDimensions`] naming the offending axis
    /// and bound when either count is outside the range.
    pub fn new(width_tiles: u32, height_tiles: u32) -> Result<Self, DitherError> {
        let check = |axis: GridAxis, value: u32| {
            if value < MIN_TILES || value > MAX_TILES {
                Err(DimensionError::GridAxisOutOfRange {
                    axis,
                    value,
                    min: MIN_TILES,
                    max: MAX_TILES,
                })
            } else {
                Ok(())
            }
        };
        check(GridAxis::Width, width_tiles)?;
        check(GridAxis::Height, height_tiles)?;
        Ok(Self {
            width_tiles,
            height_tiles,
        })
    }

    /// The 1x1 grid: a single standard map tile.
    pub fn single() -> Self {
        Self {
            width_tiles: 1,
            height_tiles: 1,
        }
    }

    /// Horizontal tile count.
    #[inline]
    pub fn width_tiles(&self) -> u32 {
        self.width_tiles
    }

    /// Vertical tile count.
    #[inline]
    pub fn height_tiles(&self) -> u32 {
        self.height_tiles
    }

    /// Total number of tiles in the grid.
    #[inline]
    pub fn tile_count(&self) -> u32 {
        self.width_tiles * self.height_tiles
    }

    /// Canvas width in pixels (`N * 128`).
    #[inline]
    pub fn canvas_width(&self) -> u32 {
        self.width_tiles * TILE_SIZE
    }

    /// Canvas height in pixels (`M * 128`).
    #[inline]
    pub fn canvas_height(&self) -> u32 {
        self.height_tiles * TILE_SIZE
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::single()
    }
}
