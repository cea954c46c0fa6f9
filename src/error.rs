// src/error.rs
//
// Error types for filterbank construction and MFCC extraction.

use thiserror::Error;

/// Errors reported while configuring the MFCC pipeline.
///
/// Every variant is a configuration problem detected before any frame is
/// processed. Numeric issues inside the pipeline (zero mel energy entering
/// the logarithm) are floored inline and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MfccError {
    #[error("Sample rate must be positive, got {0} Hz")]
    InvalidSampleRate(u32),

    #[error("FFT size must be a non-zero even number, got {0}")]
    InvalidFftSize(usize),

    #[error("Filter count must be at least 1")]
    NoFilters,

    #[error("FFT size {fft_size} gives {bins} bins, too few for {n_filters} filters")]
    FftTooSmall {
        fft_size: usize,
        bins: usize,
        n_filters: usize,
    },

    #[error("Invalid mel band limits: low {low_hz} Hz, high {high_hz} Hz")]
    InvalidBandLimits { low_hz: f64, high_hz: f64 },

    #[error("Filter {filter} has zero width: boundaries collapse at bin {bin}")]
    DegenerateFilter { filter: usize, bin: usize },

    #[error("Invalid frame timing: {0}")]
    InvalidFraming(String),

    #[error("Invalid log floor {0}: must be finite and positive")]
    InvalidLogFloor(f64),

    #[error("Invalid pre-emphasis coefficient {0}: expected a value in [0, 1)")]
    InvalidPreEmphasis(f64),
}

pub type Result<T> = std::result::Result<T, MfccError>;
