//! Core analysis modules

pub mod analysis;
pub mod dsp;
pub mod matrix;
pub mod mel;

pub use analysis::{compute_mfcc, MfccExtractor};
pub use dsp::{FrameLayout, WindowFunction};
pub use matrix::Matrix;
pub use mel::{build_mel_filterbank, hertz_to_mel, mel_to_hertz, MelFilterbank};
