// Shared signal generators and assertions for integration tests.
#![allow(dead_code)]

use std::f64::consts::PI;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// All-zero buffer
pub fn silence(len: usize) -> Vec<f64> {
    vec![0.0; len]
}

/// Sine wave at `freq` Hz with the given peak amplitude
pub fn sine(freq: f64, amplitude: f64, sample_rate: u32, len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * freq * i as f64 / sample_rate as f64).sin())
        .collect()
}

/// Deterministic pseudo-random noise in [-amplitude, amplitude]
pub fn noise(amplitude: f64, len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            amplitude * (2.0 * unit - 1.0)
        })
        .collect()
}

/// Frequency of an FFT bin
pub fn bin_frequency(bin: usize, fft_size: usize, sample_rate: u32) -> f64 {
    bin as f64 * sample_rate as f64 / fft_size as f64
}

/// Index of the largest value
pub fn argmax(values: &[f64]) -> usize {
    values
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, &v)| if v > best.1 { (i, v) } else { best })
        .0
}
