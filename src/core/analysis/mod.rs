//! Spectral and cepstral analysis stages
//!
//! - Periodogram: per-frame one-sided magnitude spectra
//! - Cepstrum: mel energies, log compression, DCT-II
//! - MFCC: the complete pipeline behind a reusable extractor

mod cepstrum;
mod mfcc;
mod periodogram;

pub use cepstrum::{cepstral_coefficients, log_compress, mel_energies, Dct2};
pub use mfcc::{compute_mfcc, MfccExtractor};
pub use periodogram::compute_periodogram;
