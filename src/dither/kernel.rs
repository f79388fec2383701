//! Error diffusion kernel definition.
//!
//! A kernel specifies how quantization error is distributed to neighboring
//! pixels that have not been processed yet. Only forward neighbors appear
//! (right of the current pixel, or on the next row), so a single row-major
//! sweep never revisits a finished pixel.

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: horizontal offset, vertical offset
/// (always toward unprocessed rows), and the weight numerator. A neighbor
/// receives `error * weight / divisor`.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],
    /// Total divisor for normalizing weights.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of total error the kernel propagates (1.0 = all of it).
    pub fn propagation(&self) -> f32 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        sum as f32 / self.divisor as f32
    }
}

/// The Floyd-Steinberg kernel.
///
/// Distributes 100% of the quantization error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// All diffused error is conserved; neighbors outside the image are skipped
/// and their share is dropped (a known boundary artifact).
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floyd_steinberg_conserves_all_error() {
        let sum: u8 = FLOYD_STEINBERG.entries.iter().map(|&(_, _, w)| w).sum();
        assert_eq!(sum, 16, "weights should sum to the divisor");
        assert_eq!(FLOYD_STEINBERG.divisor, 16);
        assert!(
            (FLOYD_STEINBERG.propagation() - 1.0).abs() < f32::EPSILON,
            "Floyd-Steinberg propagates 100% of error"
        );
    }

    #[test]
    fn test_entries_are_forward_only() {
        for &(dx, dy, _) in FLOYD_STEINBERG.entries {
            assert!(
                dy > 0 || (dy == 0 && dx > 0),
                "entry ({}, {}) would touch an already-processed pixel",
                dx,
                dy
            );
        }
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(FLOYD_STEINBERG.entries.len(), 4);
    }
}
