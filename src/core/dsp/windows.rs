//! Window function implementations

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tapering windows applied to each frame before the FFT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowFunction {
    Rectangular,
    Hann,
    #[default]
    Hamming,
}

impl WindowFunction {
    /// Generate symmetric window coefficients
    pub fn generate(&self, size: usize) -> Vec<f64> {
        // symmetric windows divide by size - 1, which leaves nothing to taper for one sample
        if size <= 1 {
            return vec![1.0; size];
        }
        match self {
            WindowFunction::Rectangular => vec![1.0; size],
            WindowFunction::Hann => Self::hann(size),
            WindowFunction::Hamming => Self::hamming(size),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "rectangular" | "rect" | "none" => Some(Self::Rectangular),
            "hann" | "hanning" => Some(Self::Hann),
            "hamming" => Some(Self::Hamming),
            _ => None,
        }
    }

    fn hann(size: usize) -> Vec<f64> {
        (0..size)
            .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / (size - 1) as f64).cos()))
            .collect()
    }

    fn hamming(size: usize) -> Vec<f64> {
        (0..size)
            .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / (size - 1) as f64).cos())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hamming_window() {
        let window = WindowFunction::Hamming.generate(400);
        assert_eq!(window.len(), 400);
        // non-zero endpoints
        assert!((window[0] - 0.08).abs() < 1e-12);
        assert!((window[399] - 0.08).abs() < 1e-12);
        // symmetric
        for i in 0..200 {
            assert!((window[i] - window[399 - i]).abs() < 1e-12);
        }
        let odd = WindowFunction::Hamming.generate(5);
        assert!((odd[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hann_window() {
        let window = WindowFunction::Hann.generate(5);
        assert!(window[0].abs() < 1e-12);
        assert!((window[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_windows() {
        assert!(WindowFunction::Hamming.generate(0).is_empty());
        assert_eq!(WindowFunction::Hamming.generate(1), vec![1.0]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(WindowFunction::from_name("Hamming"), Some(WindowFunction::Hamming));
        assert_eq!(WindowFunction::from_name("hanning"), Some(WindowFunction::Hann));
        assert_eq!(WindowFunction::from_name("kaiser"), None);
        assert_eq!(WindowFunction::default(), WindowFunction::Hamming);
    }
}
