//! Configuration module for mfccr

mod profiles;

pub use profiles::{
    MfccConfig, MfccConfigBuilder, ProfilePreset, DEFAULT_FFT_SIZE, DEFAULT_FRAME_DURATION,
    DEFAULT_HIGH_FREQ_HZ, DEFAULT_HOP_DURATION, DEFAULT_LOG_FLOOR, DEFAULT_LOW_FREQ_HZ,
    DEFAULT_N_FILTERS,
};
