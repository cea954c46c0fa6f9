// src/config/profiles.rs
//
// Extraction parameters and preset profiles for common recording setups

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::dsp::{FrameLayout, WindowFunction};
use crate::error::MfccError;

/// Default FFT length
pub const DEFAULT_FFT_SIZE: usize = 1024;
/// Default number of triangular mel filters
pub const DEFAULT_N_FILTERS: usize = 20;
/// Default frame duration in seconds (25 ms)
pub const DEFAULT_FRAME_DURATION: f64 = 0.025;
/// Default hop between frame starts in seconds (10 ms)
pub const DEFAULT_HOP_DURATION: f64 = 0.010;
/// Lower edge of the mel band in Hz
pub const DEFAULT_LOW_FREQ_HZ: f64 = 200.0;
/// Upper edge of the mel band in Hz
pub const DEFAULT_HIGH_FREQ_HZ: f64 = 7000.0;
/// Floor applied to mel energies before `log10`
pub const DEFAULT_LOG_FLOOR: f64 = 1e-10;

/// Preset profiles for common use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProfilePreset {
    /// Speech sampled at 16 kHz or more, 200-7000 Hz band
    Speech,
    /// Narrowband telephone audio, 300-3400 Hz band
    Telephone,
    /// Wideband speech with finer frequency resolution
    Wideband,
    /// User-defined settings
    Custom,
}

impl ProfilePreset {
    pub fn all() -> Vec<Self> {
        vec![Self::Speech, Self::Telephone, Self::Wideband]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "speech" | "standard" | "default" => Some(Self::Speech),
            "telephone" | "phone" | "narrowband" => Some(Self::Telephone),
            "wideband" | "wide" => Some(Self::Wideband),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Complete MFCC extraction configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MfccConfig {
    /// Preset this configuration was derived from
    pub preset: ProfilePreset,
    /// FFT length; frames shorter than this are zero-padded
    pub fft_size: usize,
    /// Number of triangular mel filters (and cepstral rows)
    pub n_filters: usize,
    /// Frame duration in seconds
    pub frame_duration: f64,
    /// Hop between consecutive frame starts in seconds
    pub hop_duration: f64,
    /// Overlap between consecutive frames in seconds. When set, the hop is
    /// `round(frame * fs) - round(overlap * fs)` and `hop_duration` is ignored.
    pub overlap_duration: Option<f64>,
    /// Lower edge of the mel band in Hz
    pub low_freq_hz: f64,
    /// Upper edge of the mel band in Hz, should not exceed Nyquist
    pub high_freq_hz: f64,
    /// Taper applied to each frame
    pub window: WindowFunction,
    /// Mel energies below this are raised to it before `log10`
    pub log_floor: f64,
    /// Optional pre-emphasis coefficient applied before framing
    pub pre_emphasis: Option<f64>,
    /// Spread per-frame work over the rayon thread pool
    pub parallel: bool,
}

impl Default for MfccConfig {
    fn default() -> Self {
        Self::from_preset(ProfilePreset::Speech)
    }
}

impl MfccConfig {
    /// Create configuration from preset
    pub fn from_preset(preset: ProfilePreset) -> Self {
        match preset {
            ProfilePreset::Speech => Self::speech(),
            ProfilePreset::Telephone => Self::telephone(),
            ProfilePreset::Wideband => Self::wideband(),
            ProfilePreset::Custom => Self {
                preset: ProfilePreset::Custom,
                ..Self::speech()
            },
        }
    }

    fn speech() -> Self {
        Self {
            preset: ProfilePreset::Speech,
            fft_size: DEFAULT_FFT_SIZE,
            n_filters: DEFAULT_N_FILTERS,
            frame_duration: DEFAULT_FRAME_DURATION,
            hop_duration: DEFAULT_HOP_DURATION,
            overlap_duration: None,
            low_freq_hz: DEFAULT_LOW_FREQ_HZ,
            high_freq_hz: DEFAULT_HIGH_FREQ_HZ,
            window: WindowFunction::Hamming,
            log_floor: DEFAULT_LOG_FLOOR,
            pre_emphasis: None,
            parallel: true,
        }
    }

    fn telephone() -> Self {
        Self {
            preset: ProfilePreset::Telephone,
            fft_size: 512,
            low_freq_hz: 300.0,
            high_freq_hz: 3400.0,
            ..Self::speech()
        }
    }

    fn wideband() -> Self {
        Self {
            preset: ProfilePreset::Wideband,
            fft_size: 2048,
            n_filters: 26,
            low_freq_hz: 133.0,
            high_freq_hz: 7600.0,
            ..Self::speech()
        }
    }

    /// Start a builder from the default configuration
    pub fn builder() -> MfccConfigBuilder {
        MfccConfigBuilder::new()
    }

    /// Frame geometry in samples at `sample_rate`
    pub fn frame_layout(&self, sample_rate: u32) -> std::result::Result<FrameLayout, MfccError> {
        match self.overlap_duration {
            Some(overlap) => FrameLayout::from_overlap(sample_rate, self.frame_duration, overlap),
            None => FrameLayout::from_durations(sample_rate, self.frame_duration, self.hop_duration),
        }
    }

    /// Check every parameter that does not depend on the sample rate
    pub fn validate(&self) -> std::result::Result<(), MfccError> {
        if self.fft_size == 0 || self.fft_size % 2 != 0 {
            return Err(MfccError::InvalidFftSize(self.fft_size));
        }
        if self.n_filters == 0 {
            return Err(MfccError::NoFilters);
        }
        let bins = self.fft_size / 2 + 1;
        if bins < self.n_filters + 2 {
            return Err(MfccError::FftTooSmall {
                fft_size: self.fft_size,
                bins,
                n_filters: self.n_filters,
            });
        }
        if !self.low_freq_hz.is_finite()
            || !self.high_freq_hz.is_finite()
            || self.low_freq_hz < 0.0
            || self.low_freq_hz >= self.high_freq_hz
        {
            return Err(MfccError::InvalidBandLimits {
                low_hz: self.low_freq_hz,
                high_hz: self.high_freq_hz,
            });
        }
        if !(self.frame_duration.is_finite() && self.frame_duration > 0.0) {
            return Err(MfccError::InvalidFraming(format!(
                "frame duration must be positive, got {}s",
                self.frame_duration
            )));
        }
        match self.overlap_duration {
            Some(overlap) => {
                if !(overlap.is_finite() && overlap >= 0.0 && overlap < self.frame_duration) {
                    return Err(MfccError::InvalidFraming(format!(
                        "overlap duration must be in [0, {}s), got {}s",
                        self.frame_duration, overlap
                    )));
                }
            }
            None => {
                if !(self.hop_duration.is_finite() && self.hop_duration > 0.0) {
                    return Err(MfccError::InvalidFraming(format!(
                        "hop duration must be positive, got {}s",
                        self.hop_duration
                    )));
                }
                if self.hop_duration > self.frame_duration {
                    return Err(MfccError::InvalidFraming(format!(
                        "hop duration {}s exceeds frame duration {}s",
                        self.hop_duration, self.frame_duration
                    )));
                }
            }
        }
        if !(self.log_floor.is_finite() && self.log_floor > 0.0) {
            return Err(MfccError::InvalidLogFloor(self.log_floor));
        }
        if let Some(coefficient) = self.pre_emphasis {
            if !(0.0..1.0).contains(&coefficient) {
                return Err(MfccError::InvalidPreEmphasis(coefficient));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse MFCC config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize MFCC config")
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Save configuration as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Builder for custom configurations
pub struct MfccConfigBuilder {
    config: MfccConfig,
}

impl MfccConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: MfccConfig::default(),
        }
    }

    pub fn from_preset(preset: ProfilePreset) -> Self {
        Self {
            config: MfccConfig::from_preset(preset),
        }
    }

    pub fn fft_size(mut self, fft_size: usize) -> Self {
        self.config.fft_size = fft_size;
        self
    }

    pub fn n_filters(mut self, n_filters: usize) -> Self {
        self.config.n_filters = n_filters;
        self
    }

    pub fn frame_duration(mut self, secs: f64) -> Self {
        self.config.frame_duration = secs;
        self
    }

    /// Frame by hop; clears any overlap set earlier
    pub fn hop_duration(mut self, secs: f64) -> Self {
        self.config.hop_duration = secs;
        self.config.overlap_duration = None;
        self
    }

    /// Frame by overlap; the hop becomes frame length minus overlap in samples
    pub fn overlap_duration(mut self, secs: f64) -> Self {
        self.config.overlap_duration = Some(secs);
        self
    }

    pub fn band(mut self, low_hz: f64, high_hz: f64) -> Self {
        self.config.low_freq_hz = low_hz;
        self.config.high_freq_hz = high_hz;
        self
    }

    pub fn window(mut self, window: WindowFunction) -> Self {
        self.config.window = window;
        self
    }

    pub fn log_floor(mut self, floor: f64) -> Self {
        self.config.log_floor = floor;
        self
    }

    pub fn pre_emphasis(mut self, coefficient: f64) -> Self {
        self.config.pre_emphasis = Some(coefficient);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Validate and return the configuration
    pub fn build(mut self) -> std::result::Result<MfccConfig, MfccError> {
        self.config.preset = ProfilePreset::Custom;
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for MfccConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
