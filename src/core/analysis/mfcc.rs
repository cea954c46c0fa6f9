// src/core/analysis/mfcc.rs
//
// MFCC extraction: framing, periodogram, mel energies, log and DCT

use std::borrow::Cow;

use log::{debug, warn};

use super::cepstrum::{cepstral_coefficients, log_compress, mel_energies, Dct2};
use super::periodogram::compute_periodogram;
use crate::config::MfccConfig;
use crate::core::dsp::{pre_emphasis, FftProcessor, FrameLayout, FramedSignal};
use crate::core::matrix::Matrix;
use crate::core::mel::MelFilterbank;
use crate::error::{MfccError, Result};

/// Reusable MFCC extractor bound to one sample rate and configuration.
///
/// Building the extractor validates the configuration and precomputes the
/// filterbank, the FFT plan, the window and the DCT table. Extraction takes
/// `&self`, so one extractor can serve many waveforms, from many threads.
#[derive(Debug, Clone)]
pub struct MfccExtractor {
    config: MfccConfig,
    sample_rate: u32,
    layout: FrameLayout,
    filterbank: MelFilterbank,
    fft: FftProcessor,
    dct: Dct2,
}

impl MfccExtractor {
    pub fn new(sample_rate: u32, config: MfccConfig) -> Result<Self> {
        if sample_rate == 0 {
            return Err(MfccError::InvalidSampleRate(sample_rate));
        }
        config.validate()?;

        let layout = config.frame_layout(sample_rate)?;
        let filterbank = MelFilterbank::new(
            config.fft_size,
            config.n_filters,
            sample_rate,
            config.low_freq_hz,
            config.high_freq_hz,
        )?;

        if layout.frame_len > config.fft_size {
            warn!(
                "Frame length {} exceeds FFT size {}; frames will be truncated",
                layout.frame_len, config.fft_size
            );
        }

        debug!(
            "MFCC extractor: fs={} Hz, frame={} hop={} samples, nfft={}, {} filters, {:?} window",
            sample_rate,
            layout.frame_len,
            layout.hop,
            config.fft_size,
            config.n_filters,
            config.window
        );

        Ok(Self {
            fft: FftProcessor::new(config.fft_size, layout.frame_len, config.window),
            dct: Dct2::new(config.n_filters),
            config,
            sample_rate,
            layout,
            filterbank,
        })
    }

    /// Default configuration with a custom filter count
    pub fn with_filters(sample_rate: u32, n_filters: usize) -> Result<Self> {
        let config = MfccConfig {
            n_filters,
            ..MfccConfig::default()
        };
        Self::new(sample_rate, config)
    }

    pub fn config(&self) -> &MfccConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    pub fn filterbank(&self) -> &MelFilterbank {
        &self.filterbank
    }

    /// Number of frames (output columns) for a waveform of `n_samples`
    pub fn frame_count(&self, n_samples: usize) -> usize {
        self.layout.frame_count(n_samples)
    }

    /// Periodogram matrix, `n_frames × (fft_size / 2 + 1)`
    pub fn periodogram(&self, samples: &[f64]) -> Matrix {
        let emphasized = self.emphasize(samples);
        let signal = FramedSignal::new(&emphasized, self.layout);
        debug!(
            "Framing {} samples into {} frames of {} samples",
            samples.len(),
            signal.n_frames(),
            self.layout.frame_len
        );
        compute_periodogram(&signal, &self.fft, self.config.parallel)
    }

    /// Mel-energy matrix, `n_filters × n_frames`
    pub fn mel_energies(&self, samples: &[f64]) -> Matrix {
        let periodogram = self.periodogram(samples);
        mel_energies(&periodogram, &self.filterbank, self.config.parallel)
    }

    /// Coefficient matrix, `n_filters × n_frames`, with row 0 zeroed
    pub fn extract(&self, samples: &[f64]) -> Matrix {
        let energies = self.mel_energies(samples);

        let (log_mel, clamped) = log_compress(&energies, self.config.log_floor);
        if clamped > 0 {
            debug!(
                "Floored {} of {} mel energies to {:e} before log10",
                clamped,
                energies.as_slice().len(),
                self.config.log_floor
            );
        }

        cepstral_coefficients(&log_mel, &self.dct, self.config.parallel)
    }

    /// [`extract`](Self::extract) for `f32` sample buffers
    pub fn extract_f32(&self, samples: &[f32]) -> Matrix {
        let samples: Vec<f64> = samples.iter().map(|&s| s as f64).collect();
        self.extract(&samples)
    }

    fn emphasize<'a>(&self, samples: &'a [f64]) -> Cow<'a, [f64]> {
        match self.config.pre_emphasis {
            Some(coefficient) => Cow::Owned(pre_emphasis(samples, coefficient)),
            None => Cow::Borrowed(samples),
        }
    }
}

/// Compute MFCCs with the default configuration.
///
/// Returns an `n_filters × ceil(len / hop)` matrix whose first row is zero.
pub fn compute_mfcc(samples: &[f64], sample_rate: u32, n_filters: usize) -> Result<Matrix> {
    Ok(MfccExtractor::with_filters(sample_rate, n_filters)?.extract(samples))
}
