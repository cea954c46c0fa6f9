// src/core/analysis/periodogram.rs
//
// Per-frame magnitude periodogram of a framed waveform.

use crate::core::dsp::{FftProcessor, FramedSignal};
use crate::core::matrix::Matrix;

/// Compute the periodogram matrix, `n_frames × (fft_size / 2 + 1)`.
///
/// Row `i` is the windowed, frame-normalised one-sided magnitude spectrum of
/// frame `i`. Frames are independent, so with `parallel` each row is filled
/// on the rayon pool.
pub fn compute_periodogram(signal: &FramedSignal, processor: &FftProcessor, parallel: bool) -> Matrix {
    let mut periodogram = Matrix::zeros(signal.n_frames(), processor.n_bins());
    periodogram.fill_rows(parallel, |frame, row| {
        processor.magnitude_spectrum_into(signal.frame(frame), row);
    });
    periodogram
}
