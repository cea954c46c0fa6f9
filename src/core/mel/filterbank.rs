// src/core/mel/filterbank.rs
//
// Triangular mel filterbank aligned to one-sided FFT bins.

use log::{debug, warn};

use super::scale::mel_points_hz;
use crate::config::{DEFAULT_HIGH_FREQ_HZ, DEFAULT_LOW_FREQ_HZ};
use crate::core::matrix::Matrix;
use crate::error::{MfccError, Result};

/// Bank of overlapping triangular filters evenly spaced on the mel scale.
///
/// The weights are stored as a `(fft_size / 2 + 1) × n_filters` matrix, one
/// column per filter. A filterbank depends only on its construction
/// parameters, so one instance can be shared by every frame of every
/// waveform recorded at the same rate.
#[derive(Debug, Clone)]
pub struct MelFilterbank {
    weights: Matrix,
    boundaries: Vec<usize>,
    fft_size: usize,
    sample_rate: u32,
    low_freq_hz: f64,
    high_freq_hz: f64,
}

impl MelFilterbank {
    pub fn new(
        fft_size: usize,
        n_filters: usize,
        sample_rate: u32,
        low_freq_hz: f64,
        high_freq_hz: f64,
    ) -> Result<Self> {
        if sample_rate == 0 {
            return Err(MfccError::InvalidSampleRate(sample_rate));
        }
        if fft_size == 0 || fft_size % 2 != 0 {
            return Err(MfccError::InvalidFftSize(fft_size));
        }
        if n_filters == 0 {
            return Err(MfccError::NoFilters);
        }
        if !low_freq_hz.is_finite()
            || !high_freq_hz.is_finite()
            || low_freq_hz < 0.0
            || low_freq_hz >= high_freq_hz
        {
            return Err(MfccError::InvalidBandLimits {
                low_hz: low_freq_hz,
                high_hz: high_freq_hz,
            });
        }

        let n_bins = fft_size / 2 + 1;
        if n_bins < n_filters + 2 {
            return Err(MfccError::FftTooSmall {
                fft_size,
                bins: n_bins,
                n_filters,
            });
        }

        let nyquist = sample_rate as f64 / 2.0;
        if high_freq_hz > nyquist {
            warn!(
                "Mel band upper limit {:.0} Hz exceeds Nyquist ({:.0} Hz); upper filters will be clipped",
                high_freq_hz, nyquist
            );
        }

        let boundaries: Vec<usize> = mel_points_hz(low_freq_hz, high_freq_hz, n_filters + 2)
            .into_iter()
            .map(|hz| hertz_to_bin(hz, n_bins, sample_rate))
            .collect();

        for (filter, edges) in boundaries.windows(3).enumerate() {
            if edges[0] == edges[1] {
                return Err(MfccError::DegenerateFilter { filter, bin: edges[0] });
            }
            if edges[1] == edges[2] {
                return Err(MfccError::DegenerateFilter { filter, bin: edges[1] });
            }
        }

        let mut weights = Matrix::zeros(n_bins, n_filters);
        for (filter, edges) in boundaries.windows(3).enumerate() {
            for bin in edges[0]..=edges[2].min(n_bins - 1) {
                weights.set(bin, filter, triangle(bin, edges[0], edges[1], edges[2]));
            }
        }

        debug!(
            "Built mel filterbank: {} filters over {} bins ({:.0}-{:.0} Hz, fs={} Hz)",
            n_filters, n_bins, low_freq_hz, high_freq_hz, sample_rate
        );

        Ok(Self {
            weights,
            boundaries,
            fft_size,
            sample_rate,
            low_freq_hz,
            high_freq_hz,
        })
    }

    /// Filterbank with the default 200-7000 Hz speech band
    pub fn with_default_band(fft_size: usize, n_filters: usize, sample_rate: u32) -> Result<Self> {
        Self::new(
            fft_size,
            n_filters,
            sample_rate,
            DEFAULT_LOW_FREQ_HZ,
            DEFAULT_HIGH_FREQ_HZ,
        )
    }

    /// Weight matrix, `n_bins × n_filters`
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    pub fn into_matrix(self) -> Matrix {
        self.weights
    }

    pub fn n_filters(&self) -> usize {
        self.weights.cols()
    }

    pub fn n_bins(&self) -> usize {
        self.weights.rows()
    }

    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// `(low, high)` band limits in Hz
    pub fn band_limits(&self) -> (f64, f64) {
        (self.low_freq_hz, self.high_freq_hz)
    }

    /// The `n_filters + 2` bin boundaries, non-decreasing
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// Bin where filter `filter` peaks, `None` past the last filter
    pub fn center_bin(&self, filter: usize) -> Option<usize> {
        if filter < self.n_filters() {
            self.boundaries.get(filter + 1).copied()
        } else {
            None
        }
    }

    /// Weighted sum of a one-sided spectrum under every filter.
    ///
    /// Returns one energy per filter.
    ///
    /// # Panics
    ///
    /// Panics if `spectrum` does not hold exactly `n_bins` values.
    pub fn apply(&self, spectrum: &[f64]) -> Vec<f64> {
        assert_eq!(
            spectrum.len(),
            self.n_bins(),
            "spectrum length does not match the filterbank bin count"
        );
        let mut energies = vec![0.0; self.n_filters()];
        for (&power, weights) in spectrum.iter().zip(self.weights.iter_rows()) {
            for (energy, &w) in energies.iter_mut().zip(weights) {
                *energy += power * w;
            }
        }
        energies
    }
}

/// Build the default-band filterbank matrix, `(fft_size / 2 + 1) × n_filters`
pub fn build_mel_filterbank(fft_size: usize, n_filters: usize, sample_rate: u32) -> Result<Matrix> {
    MelFilterbank::with_default_band(fft_size, n_filters, sample_rate).map(MelFilterbank::into_matrix)
}

/// Map a frequency to a filterbank bin: `round(f * n_bins / fs)`
fn hertz_to_bin(freq_hz: f64, n_bins: usize, sample_rate: u32) -> usize {
    (freq_hz * n_bins as f64 / sample_rate as f64).round() as usize
}

/// Triangular response at `bin` for the boundary triple `(left, center, right)`.
///
/// Boundaries must be strictly increasing.
fn triangle(bin: usize, left: usize, center: usize, right: usize) -> f64 {
    if bin < left || bin > right {
        0.0
    } else if bin < center {
        (bin - left) as f64 / (center - left) as f64
    } else {
        (right - bin) as f64 / (right - center) as f64
    }
}
