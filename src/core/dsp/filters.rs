//! Time-domain filtering applied before framing

/// Apply a first-order pre-emphasis filter: `y[n] = x[n] - a * x[n - 1]`.
///
/// Boosts high frequencies so the upper mel bands are not swamped by the
/// low-frequency energy of voiced speech.
pub fn pre_emphasis(samples: &[f64], coefficient: f64) -> Vec<f64> {
    if samples.is_empty() {
        return vec![];
    }

    let mut output = Vec::with_capacity(samples.len());
    output.push(samples[0]);

    for pair in samples.windows(2) {
        output.push(pair[1] - coefficient * pair[0]);
    }

    output
}
