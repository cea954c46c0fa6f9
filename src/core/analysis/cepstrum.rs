// src/core/analysis/cepstrum.rs
//
// Mel-band energy aggregation, log compression and cepstral decorrelation.

use std::f64::consts::PI;

use crate::core::matrix::Matrix;
use crate::core::mel::MelFilterbank;

/// Project every periodogram row onto the filterbank.
///
/// Returns the mel-energy matrix, `n_filters × n_frames`: entry `(i, k)` is
/// the dot product of periodogram row `k` with filter column `i`.
pub fn mel_energies(periodogram: &Matrix, filterbank: &MelFilterbank, parallel: bool) -> Matrix {
    debug_assert_eq!(periodogram.cols(), filterbank.n_bins());
    let mut per_frame = Matrix::zeros(periodogram.rows(), filterbank.n_filters());
    per_frame.fill_rows(parallel, |frame, row| {
        row.copy_from_slice(&filterbank.apply(periodogram.row(frame)));
    });
    per_frame.transpose()
}

/// Elementwise `log10`, raising entries below `floor` to `floor` first.
///
/// Returns the compressed matrix and how many entries were floored. Silent
/// frames and filters with no signal energy are expected input, so flooring
/// is not an error.
pub fn log_compress(energies: &Matrix, floor: f64) -> (Matrix, usize) {
    let mut clamped = 0;
    let compressed = energies.map(|e| {
        if e < floor {
            clamped += 1;
            floor.log10()
        } else {
            e.log10()
        }
    });
    (compressed, clamped)
}

/// Unnormalised type-II DCT with a precomputed cosine table:
/// `y[k] = 2 * Σ x[n] * cos(π k (2n + 1) / 2N)`
#[derive(Debug, Clone)]
pub struct Dct2 {
    len: usize,
    table: Vec<f64>,
}

impl Dct2 {
    pub fn new(len: usize) -> Self {
        let mut table = Vec::with_capacity(len * len);
        for k in 0..len {
            for n in 0..len {
                table.push((PI * k as f64 * (2 * n + 1) as f64 / (2 * len) as f64).cos());
            }
        }
        Self { len, table }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Transform `input` into `output`; both must hold `len` values
    pub fn transform(&self, input: &[f64], output: &mut [f64]) {
        debug_assert_eq!(input.len(), self.len);
        debug_assert_eq!(output.len(), self.len);
        if self.len == 0 {
            return;
        }
        for (out, basis) in output.iter_mut().zip(self.table.chunks_exact(self.len)) {
            *out = 2.0 * input.iter().zip(basis).map(|(x, c)| x * c).sum::<f64>();
        }
    }
}

/// DCT each column (the mel-band axis) of a log-mel matrix and zero row 0.
///
/// The input is `n_filters × n_frames`; the output has the same shape with
/// rows indexed by cepstral coefficient. Row 0 carries overall log-energy
/// and is discarded.
pub fn cepstral_coefficients(log_mel: &Matrix, dct: &Dct2, parallel: bool) -> Matrix {
    debug_assert_eq!(log_mel.rows(), dct.len());
    let per_frame_input = log_mel.transpose();
    let mut per_frame = Matrix::zeros(per_frame_input.rows(), per_frame_input.cols());
    per_frame.fill_rows(parallel, |frame, row| {
        dct.transform(per_frame_input.row(frame), row);
    });

    let mut coefficients = per_frame.transpose();
    if coefficients.rows() > 0 {
        coefficients.row_mut(0).fill(0.0);
    }
    coefficients
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dct_matches_reference_definition() {
        let dct = Dct2::new(4);
        let input = [1.0, 2.0, 3.0, 4.0];
        let mut output = [0.0; 4];
        dct.transform(&input, &mut output);

        // unnormalised type II of [1, 2, 3, 4]
        let expected = [20.0, -6.308644059797899, 0.0, -0.44834152916796836];
        for (value, target) in output.iter().zip(expected.iter()) {
            assert!((value - target).abs() < 1e-9, "{} vs {}", value, target);
        }
    }

    #[test]
    fn test_dct_of_constant_is_dc_only() {
        let dct = Dct2::new(20);
        let input = [-10.0; 20];
        let mut output = [0.0; 20];
        dct.transform(&input, &mut output);
        assert!((output[0] + 400.0).abs() < 1e-9);
        assert!(output[1..].iter().all(|v| v.abs() < 1e-9));
    }

    #[test]
    fn test_log_compress_floors_zeros() {
        let energies = Matrix::from_row_major(2, 2, vec![0.0, 100.0, 1e-20, 1.0]).unwrap();
        let (compressed, clamped) = log_compress(&energies, 1e-10);
        assert_eq!(clamped, 2);
        assert!((compressed.get(0, 0) + 10.0).abs() < 1e-12);
        assert!((compressed.get(0, 1) - 2.0).abs() < 1e-12);
        assert!((compressed.get(1, 0) + 10.0).abs() < 1e-12);
        assert_eq!(compressed.get(1, 1), 0.0);
        assert!(compressed.as_slice().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_mel_energies_shape_and_values() {
        let filterbank = MelFilterbank::with_default_band(1024, 20, 16000).unwrap();
        let mut periodogram = Matrix::zeros(3, filterbank.n_bins());
        let center = filterbank.center_bin(5).unwrap();
        periodogram.set(1, center, 2.0);

        let energies = mel_energies(&periodogram, &filterbank, false);
        assert_eq!(energies.shape(), (20, 3));
        assert_eq!(energies.get(5, 1), 2.0);
        assert_eq!(energies.get(5, 0), 0.0);
        // only the neighbours share bins with the centre of filter 5
        assert_eq!(energies.get(7, 1), 0.0);
    }

    #[test]
    fn test_cepstral_row_zero_is_cleared() {
        let log_mel = Matrix::from_row_major(3, 2, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        let dct = Dct2::new(3);
        let coefficients = cepstral_coefficients(&log_mel, &dct, true);
        assert_eq!(coefficients.shape(), (3, 2));
        assert_eq!(coefficients.row(0), &[0.0, 0.0]);

        let mut expected = [0.0; 3];
        dct.transform(&[4.0, 5.0, 6.0], &mut expected);
        assert!((coefficients.get(1, 1) - expected[1]).abs() < 1e-12);
        assert!((coefficients.get(2, 1) - expected[2]).abs() < 1e-12);
    }
}
