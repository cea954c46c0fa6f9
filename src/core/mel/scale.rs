//! Hertz / mel scale conversion

/// Mel scale multiplier
pub const MEL_SCALE: f64 = 1125.0;

/// Corner frequency of the mel scale in Hz
pub const MEL_CORNER_HZ: f64 = 700.0;

/// Convert a frequency in Hz to mels: `1125 * ln(1 + f / 700)`
pub fn hertz_to_mel(freq_hz: f64) -> f64 {
    MEL_SCALE * (1.0 + freq_hz / MEL_CORNER_HZ).ln()
}

/// Convert mels back to Hz: `700 * (e^(m / 1125) - 1)`
pub fn mel_to_hertz(mel: f64) -> f64 {
    MEL_CORNER_HZ * ((mel / MEL_SCALE).exp() - 1.0)
}

/// `count` points evenly spaced on the mel scale between two frequencies
/// (both inclusive), returned in Hz
pub fn mel_points_hz(low_hz: f64, high_hz: f64, count: usize) -> Vec<f64> {
    let low_mel = hertz_to_mel(low_hz);
    let high_mel = hertz_to_mel(high_hz);

    match count {
        0 => vec![],
        1 => vec![low_hz],
        _ => {
            let step = (high_mel - low_mel) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    // pin the last point so it maps back to exactly high_hz
                    if i == count - 1 {
                        high_hz
                    } else {
                        mel_to_hertz(low_mel + step * i as f64)
                    }
                })
                .collect()
        }
    }
}
