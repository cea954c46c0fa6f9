//! Mel scale conversion and filterbank construction

pub mod filterbank;
pub mod scale;

pub use filterbank::{build_mel_filterbank, MelFilterbank};
pub use scale::{hertz_to_mel, mel_to_hertz};
