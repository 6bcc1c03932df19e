//! Frequency-axis construction for real-valued transform layouts.
//!
//! A real-valued discrete Fourier transform with uncertainty bookkeeping
//! stores its cosine and sine coefficient halves back to back, so the
//! matching frequency axis repeats its positive half once per coefficient
//! block. [`frequency_scale`] builds that axis from the time axis of the
//! underlying measurement.

use crate::error::{Error, Result};

/// Layout of the frequency axis returned by [`frequency_scale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// Positive half-axis followed by a positive copy, matching the
    /// cosine/sine coefficient layout of a real-valued transform.
    Dual,
    /// Only the first `N/2 + 1` (integer division) positive frequencies.
    Half,
    /// Positive half-axis followed by a negated copy; convenient for
    /// plotting both coefficient blocks on one axis.
    DualNegated,
}

/// Build the frequency axis consistent with an equidistant time axis.
///
/// The time span is stretched by `N/(N-1)` before inversion (the last
/// sample sits one step short of a full period), which puts the maximum
/// representable frequency at `(N-1)/span` and the bin spacing at
/// `1/(N*dt)` for a uniform axis with step `dt`.
///
/// Fails with [`Error::InvalidInput`] when fewer than two time samples are
/// given, since no span can be formed.
pub fn frequency_scale(time: &[f64], mode: AxisMode) -> Result<Vec<f64>> {
    let n = time.len();
    if n < 2 {
        return Err(Error::InvalidInput(format!(
            "frequency scale needs at least 2 time samples, got {n}"
        )));
    }

    let (t_min, t_max) = time
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        });

    let span = (t_max - t_min) * n as f64 / (n - 1) as f64;
    let f_max = (n - 1) as f64 / span;
    let step = f_max / (n - 1) as f64;

    let half: Vec<f64> = (0..n / 2 + 1).map(|i| i as f64 * step).collect();

    match mode {
        AxisMode::Half => Ok(half),
        AxisMode::Dual | AxisMode::DualNegated => {
            let sign = if mode == AxisMode::DualNegated {
                -1.0
            } else {
                1.0
            };
            let mut axis = Vec::with_capacity(2 * half.len());
            axis.extend_from_slice(&half);
            axis.extend(half.iter().map(|&f| sign * f));
            Ok(axis)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_time(n: usize, dt: f64) -> Vec<f64> {
        (0..n).map(|i| i as f64 * dt).collect()
    }

    #[test]
    fn half_axis_has_expected_length_and_start() {
        for n in [2, 3, 16, 17, 100] {
            let f = frequency_scale(&uniform_time(n, 1e-8), AxisMode::Half).unwrap();
            assert_eq!(f.len(), n / 2 + 1, "n = {n}");
            assert_eq!(f[0], 0.0);
        }
    }

    #[test]
    fn bin_spacing_is_reciprocal_of_record_length() {
        let n = 1000;
        let dt = 2e-9;
        let f = frequency_scale(&uniform_time(n, dt), AxisMode::Half).unwrap();
        let df = f[1] - f[0];
        let expected = 1.0 / (n as f64 * dt);
        assert!(
            (df - expected).abs() < expected * 1e-12,
            "df {df} should be {expected}"
        );
    }

    #[test]
    fn dual_axis_repeats_positive_half() {
        let f = frequency_scale(&uniform_time(8, 0.5), AxisMode::Dual).unwrap();
        let half_len = 8 / 2 + 1;
        assert_eq!(f.len(), 2 * half_len);
        assert_eq!(&f[..half_len], &f[half_len..]);
    }

    #[test]
    fn negated_axis_mirrors_second_half() {
        let f = frequency_scale(&uniform_time(8, 0.5), AxisMode::DualNegated).unwrap();
        let half_len = 8 / 2 + 1;
        for i in 0..half_len {
            assert_eq!(f[half_len + i], -f[i]);
        }
    }

    #[test]
    fn monotone_half_axis() {
        let f = frequency_scale(&uniform_time(33, 1e-7), AxisMode::Half).unwrap();
        for pair in f.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn rejects_single_sample() {
        let err = frequency_scale(&[0.0], AxisMode::Half).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_empty_axis() {
        assert!(frequency_scale(&[], AxisMode::Dual).is_err());
    }
}
