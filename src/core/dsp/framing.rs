// src/core/dsp/framing.rs
//
// Overlapping fixed-length frame segmentation with tail zero-padding.

use crate::error::{MfccError, Result};

/// Frame geometry in samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Samples per frame
    pub frame_len: usize,
    /// Distance between consecutive frame starts
    pub hop: usize,
}

impl FrameLayout {
    pub fn new(frame_len: usize, hop: usize) -> Result<Self> {
        if frame_len == 0 {
            return Err(MfccError::InvalidFraming("frame length is zero samples".into()));
        }
        if hop == 0 {
            return Err(MfccError::InvalidFraming("hop is zero samples".into()));
        }
        if hop > frame_len {
            return Err(MfccError::InvalidFraming(format!(
                "hop ({} samples) exceeds frame length ({} samples)",
                hop, frame_len
            )));
        }
        Ok(Self { frame_len, hop })
    }

    /// Derive the layout from durations in seconds, rounding to whole samples
    pub fn from_durations(sample_rate: u32, frame_secs: f64, hop_secs: f64) -> Result<Self> {
        if sample_rate == 0 {
            return Err(MfccError::InvalidSampleRate(sample_rate));
        }
        if !(frame_secs.is_finite() && hop_secs.is_finite()) || frame_secs <= 0.0 || hop_secs <= 0.0 {
            return Err(MfccError::InvalidFraming(format!(
                "durations must be positive, got frame {}s, hop {}s",
                frame_secs, hop_secs
            )));
        }
        let frame_len = (frame_secs * sample_rate as f64).round() as usize;
        let hop = (hop_secs * sample_rate as f64).round() as usize;
        Self::new(frame_len, hop)
    }

    /// Derive the layout from a frame duration and the overlap between
    /// consecutive frames.
    ///
    /// Frame length and overlap are rounded to samples separately and the hop
    /// is their difference, so it can differ by one sample from rounding
    /// `frame_secs - overlap_secs` directly.
    pub fn from_overlap(sample_rate: u32, frame_secs: f64, overlap_secs: f64) -> Result<Self> {
        if sample_rate == 0 {
            return Err(MfccError::InvalidSampleRate(sample_rate));
        }
        if !(frame_secs.is_finite() && overlap_secs.is_finite())
            || frame_secs <= 0.0
            || overlap_secs < 0.0
        {
            return Err(MfccError::InvalidFraming(format!(
                "invalid durations: frame {}s, overlap {}s",
                frame_secs, overlap_secs
            )));
        }
        let frame_len = (frame_secs * sample_rate as f64).round() as usize;
        let overlap = (overlap_secs * sample_rate as f64).round() as usize;
        if overlap >= frame_len {
            return Err(MfccError::InvalidFraming(format!(
                "overlap ({} samples) leaves no hop within a {} sample frame",
                overlap, frame_len
            )));
        }
        Self::new(frame_len, frame_len - overlap)
    }

    /// Samples shared by consecutive frames
    pub fn overlap(&self) -> usize {
        self.frame_len - self.hop
    }

    /// `ceil(n_samples / hop)`
    pub fn frame_count(&self, n_samples: usize) -> usize {
        n_samples.div_ceil(self.hop)
    }

    /// Length of the zero-padded signal: `hop * n_frames + overlap`
    pub fn padded_len(&self, n_samples: usize) -> usize {
        match self.frame_count(n_samples) {
            0 => 0,
            n => self.hop * n + self.overlap(),
        }
    }

    /// Start offset of frame `index`
    pub fn frame_start(&self, index: usize) -> usize {
        index * self.hop
    }
}

/// Waveform zero-padded at the tail so that every frame is fully populated
#[derive(Debug, Clone)]
pub struct FramedSignal {
    layout: FrameLayout,
    padded: Vec<f64>,
    n_frames: usize,
}

impl FramedSignal {
    pub fn new(samples: &[f64], layout: FrameLayout) -> Self {
        let n_frames = layout.frame_count(samples.len());
        let padded_len = layout.padded_len(samples.len());
        let mut padded = Vec::with_capacity(padded_len);
        padded.extend_from_slice(samples);
        padded.resize(padded_len, 0.0);
        Self {
            layout,
            padded,
            n_frames,
        }
    }

    pub fn n_frames(&self) -> usize {
        self.n_frames
    }

    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    /// Samples of frame `index`
    pub fn frame(&self, index: usize) -> &[f64] {
        let start = self.layout.frame_start(index);
        &self.padded[start..start + self.layout.frame_len]
    }

    pub fn frames(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.n_frames).map(move |i| self.frame(i))
    }
}
