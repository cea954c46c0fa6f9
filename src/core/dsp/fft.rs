//! FFT processing with windowing

use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use super::windows::WindowFunction;

/// Windowed FFT producing the one-sided, frame-normalised magnitude spectrum.
///
/// The FFT plan and the window are computed once; `&self` methods are
/// thread-safe so a single processor can serve every frame of a waveform
/// from a parallel iterator.
#[derive(Clone)]
pub struct FftProcessor {
    fft: Arc<dyn Fft<f64>>,
    window: Vec<f64>,
    fft_size: usize,
}

impl std::fmt::Debug for FftProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FftProcessor")
            .field("window", &self.window)
            .field("fft_size", &self.fft_size)
            .finish_non_exhaustive()
    }
}

impl FftProcessor {
    /// `frame_len` sets both the window length and the magnitude normaliser.
    /// `fft_size` must be even.
    pub fn new(fft_size: usize, frame_len: usize, window_fn: WindowFunction) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        Self {
            fft: planner.plan_fft_forward(fft_size),
            window: window_fn.generate(frame_len),
            fft_size,
        }
    }

    /// Number of one-sided bins, `fft_size / 2 + 1`
    pub fn n_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    pub fn frame_len(&self) -> usize {
        self.window.len()
    }

    /// Compute the one-sided magnitude spectrum of a frame
    pub fn magnitude_spectrum(&self, frame: &[f64]) -> Vec<f64> {
        let mut out = vec![0.0; self.n_bins()];
        self.magnitude_spectrum_into(frame, &mut out);
        out
    }

    /// Same as [`magnitude_spectrum`](Self::magnitude_spectrum), writing into
    /// a caller-provided row of `n_bins` values.
    ///
    /// The spectrum is zero-frequency shifted and read from shifted index
    /// `fft_size / 2 - 1` onwards, so the row holds bin 1, DC, then bins
    /// `1..fft_size / 2`. Frames longer than the FFT are truncated.
    pub fn magnitude_spectrum_into(&self, frame: &[f64], out: &mut [f64]) {
        debug_assert_eq!(out.len(), self.n_bins());

        // Apply window and convert to complex
        let mut buffer: Vec<Complex<f64>> = frame
            .iter()
            .zip(self.window.iter())
            .take(self.fft_size)
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();

        // Zero-pad if necessary
        buffer.resize(self.fft_size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        // fftshift for an even length is a half rotation
        buffer.rotate_left(self.fft_size / 2);

        let norm = self.window.len().max(1) as f64;
        for (dst, c) in out.iter_mut().zip(&buffer[self.fft_size / 2 - 1..]) {
            *dst = c.norm() / norm;
        }
    }
}
