//! Progress notification contract.
//!
//! The ditherer reports `(processed, total)` pixel counts to a
//! caller-supplied observer: once per batch during the sweep, and
//! unconditionally after the final pixel. Observers are expected to be
//! cheap; they run synchronously inside the sweep. They are caller-trusted:
//! a panicking observer aborts the run, which is acceptable by contract.

/// Receiver for dithering progress updates.
///
/// Implemented for any `FnMut(usize, usize)`, so closures work directly:
///
/// ```
/// use mapart_dither::{Ditherer, DitherOptions, Palette, PixelBuffer, Rgb};
///
/// let palette = Palette::new(&[Rgb::BLACK, Rgb::WHITE]).unwrap();
/// let ditherer = Ditherer::new(palette);
/// let image = PixelBuffer::filled(8, 8, Rgb::new(128, 128, 128));
///
/// let mut updates = Vec::new();
/// let options = DitherOptions::new().no_resize();
/// ditherer
///     .dither_observed(&image, &options, &mut |done: usize, total: usize| {
///         updates.push((done, total));
///     })
///     .unwrap();
///
/// assert_eq!(updates.last(), Some(&(64, 64)));
/// ```
pub trait ProgressObserver {
    /// Called with the processed and total pixel counts.
    ///
    /// `processed` is monotonically non-decreasing within a run and equals
    /// `total` on the final call.
    fn on_progress(&mut self, processed: usize, total: usize);
}

impl<F: FnMut(usize, usize)> ProgressObserver for F {
    fn on_progress(&mut self, processed: usize, total: usize) {
        self(processed, total)
    }
}

/// Tracks the per-run progress counters and batching.
pub(crate) struct ProgressTracker<'a> {
    processed: usize,
    total: usize,
    batch: usize,
    observer: Option<&'a mut dyn ProgressObserver>,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(
        total: usize,
        batch: usize,
        observer: Option<&'a mut dyn ProgressObserver>,
    ) -> Self {
        Self {
            processed: 0,
            total,
            batch: batch.max(1),
            observer,
        }
    }

    /// Count one processed pixel, notifying at batch boundaries.
    pub(crate) fn advance(&mut self) {
        self.processed += 1;
        if self.processed % self.batch == 0 {
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.on_progress(self.processed, self.total);
            }
        }
    }

    /// Final unconditional notification after the last pixel.
    pub(crate) fn finish(&mut self) {
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.on_progress(self.processed, self.total);
        }
    }
}
