//! mfccr - Mel-frequency cepstral coefficients for speech front-ends
//!
//! Turns a decoded, single-channel waveform into a dense matrix of MFCCs:
//! overlapping Hamming-windowed frames, an FFT magnitude periodogram, a
//! triangular mel filterbank, `log10` compression and a DCT-II across the
//! mel bands. The zeroth cepstral row is zeroed.
//!
//! ## Module Structure
//!
//! - `core` - Scale conversion, filterbank, framing/FFT and cepstral stages
//! - `config` - Extraction parameters and preset profiles
//! - `error` - Configuration error types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mfccr::{compute_mfcc, MfccConfig, MfccExtractor, ProfilePreset};
//!
//! // One-shot with defaults (25 ms frames, 10 ms hop, 200-7000 Hz, nfft 1024)
//! let mfcc = compute_mfcc(&samples, 16000, 20)?;
//! assert_eq!(mfcc.rows(), 20);
//!
//! // Reuse the filterbank and FFT plan across utterances
//! let extractor = MfccExtractor::new(8000, MfccConfig::from_preset(ProfilePreset::Telephone))?;
//! for utterance in &utterances {
//!     let coefficients = extractor.extract(utterance);
//! }
//! ```
//!
//! ## Profiles
//!
//! | Profile   | Band           | FFT  | Filters |
//! |-----------|----------------|------|---------|
//! | Speech    | 200-7000 Hz    | 1024 | 20      |
//! | Telephone | 300-3400 Hz    | 512  | 20      |
//! | Wideband  | 133-7600 Hz    | 2048 | 26      |
//!
//! Silent frames are expected input: mel energies are floored to
//! `log_floor` before the logarithm so the output is always finite.

// Core analysis functionality
pub mod core;

// Configuration and profiles
pub mod config;

// Error types
pub mod error;

// Re-export commonly used types at crate root for convenience
pub use config::{MfccConfig, MfccConfigBuilder, ProfilePreset};
pub use crate::core::{
    build_mel_filterbank, compute_mfcc, hertz_to_mel, mel_to_hertz, FrameLayout, Matrix,
    MelFilterbank, MfccExtractor, WindowFunction,
};
pub use error::{MfccError, Result};
