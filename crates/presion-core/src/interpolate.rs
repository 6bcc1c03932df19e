//! Interpolation of calibration data with first-order uncertainty
//! propagation.
//!
//! The interpolation is piecewise linear, but unlike a plain resampler it
//! also returns the sensitivity (Jacobian) matrix of the operation: the
//! weights that map each source sample to each output point. Variances and
//! the per-bin real/imaginary cross-covariance propagate through those
//! matrices, so downstream consumers keep a defensible uncertainty budget
//! instead of a guess.

use crate::calibration::CalibrationData;
use crate::error::{Error, Result};

/// Dense row-major sensitivity matrix of an interpolation.
///
/// Row `r` holds the weights of output point `r` over all source samples;
/// for piecewise-linear interpolation at most two entries per row are
/// non-zero. Dense storage keeps the covariance recombination a plain
/// matrix product at O(N*M) cost, which is acceptable at calibration grid
/// sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl SensitivityMatrix {
    fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Number of output (interpolated) points.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of source samples.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Weight of source sample `c` in output point `r`.
    pub fn at(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.cols + c]
    }

    fn set(&mut self, r: usize, c: usize, value: f64) {
        self.data[r * self.cols + c] = value;
    }

    /// All source weights of output point `r`.
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }
}

/// Piecewise-linear interpolation of `(x, y)` onto `x_new`, propagating
/// per-sample variances and returning the sensitivity matrix.
///
/// Output points beyond either end of `x` are linearly extrapolated from
/// the outermost segment, value and variance both. That is flagged
/// behavior, not an error: extrapolated results carry no documented
/// confidence and the caller decides how far to trust them.
///
/// Variances propagate first-order: with sensitivity `C`, the output
/// variance is the diagonal of `C * diag(var) * C^T`.
///
/// `x` must be strictly increasing. Fails with [`Error::InvalidInput`]
/// when the source arrays disagree in length or hold fewer than two
/// points.
pub fn interp1d_with_uncertainty(
    x_new: &[f64],
    x: &[f64],
    y: &[f64],
    var: &[f64],
) -> Result<(Vec<f64>, Vec<f64>, SensitivityMatrix)> {
    if x.len() != y.len() || x.len() != var.len() {
        return Err(Error::InvalidInput(format!(
            "interpolation source arrays disagree: x {}, y {}, var {}",
            x.len(),
            y.len(),
            var.len()
        )));
    }
    if x.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "interpolation needs at least 2 source points, got {}",
            x.len()
        )));
    }

    let mut values = Vec::with_capacity(x_new.len());
    let mut variances = Vec::with_capacity(x_new.len());
    let mut sensitivity = SensitivityMatrix::zeros(x_new.len(), x.len());

    for (row, &xi) in x_new.iter().enumerate() {
        let seg = segment_index(x, xi);
        let t = (xi - x[seg]) / (x[seg + 1] - x[seg]);
        let (w0, w1) = (1.0 - t, t);

        values.push(w0 * y[seg] + w1 * y[seg + 1]);
        variances.push(w0 * w0 * var[seg] + w1 * w1 * var[seg + 1]);
        sensitivity.set(row, seg, w0);
        sensitivity.set(row, seg + 1, w1);
    }

    Ok((values, variances, sensitivity))
}

/// Index of the segment used for `target`: the bracketing segment inside
/// the grid, or the outermost segment when extrapolating.
fn segment_index(x: &[f64], target: f64) -> usize {
    if target <= x[0] {
        return 0;
    }
    if target >= x[x.len() - 1] {
        return x.len() - 2;
    }
    let mut lo = 0;
    let mut hi = x.len() - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if x[mid] <= target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Calibration data interpolated onto a target grid, together with the
/// propagation matrices that produced it.
#[derive(Debug, Clone)]
pub struct InterpolationResult {
    /// Positive-frequency half of the target grid (length N).
    pub frequency: Vec<f64>,
    /// Interpolated real part.
    pub real: Vec<f64>,
    /// Interpolated imaginary part; exactly zero at the first and last bin.
    pub imag: Vec<f64>,
    /// Propagated variance of the real part.
    pub var_real: Vec<f64>,
    /// Propagated variance of the imaginary part; exactly zero at the
    /// first and last bin.
    pub var_imag: Vec<f64>,
    /// Recombined per-bin real/imaginary cross-covariance.
    pub covariance: Vec<f64>,
    /// Sensitivity of the real channel to the source samples.
    pub sensitivity_real: SensitivityMatrix,
    /// Sensitivity of the imaginary channel to the source samples.
    pub sensitivity_imag: SensitivityMatrix,
}

/// Interpolate a calibration dataset onto the positive half of a
/// dual-layout target grid.
///
/// `target` uses the layout of [`crate::freq_axis::AxisMode::Dual`]: its
/// first `target.len() / 2` entries are the positive frequencies, and only
/// those are interpolated onto. Real and imaginary channels are
/// interpolated independently, each with its own sensitivity matrix.
///
/// Two domain corrections follow the raw interpolation:
///
/// - the imaginary value and variance at the first and last target bin are
///   forced to exactly zero: the sensitivity of a real time-domain signal
///   has no phase at 0 Hz and Nyquist by construction;
/// - the per-bin cross-covariance is recombined as the diagonal of
///   `C_re * diag(cov) * C_im^T`. Treating the scalar per-bin covariance as a
///   diagonal joint matrix between the two channels is a first-order
///   approximation, reproduced here for compatibility with the original
///   calibration procedure rather than an exact joint propagation.
pub fn interpolate_calibration(
    data: &CalibrationData,
    target: &[f64],
) -> Result<InterpolationResult> {
    let n = target.len() / 2;
    if n == 0 {
        return Err(Error::InvalidInput(
            "target frequency grid is empty".to_string(),
        ));
    }
    let half = &target[..n];

    let (real, var_real, sensitivity_real) =
        interp1d_with_uncertainty(half, &data.frequency, &data.real, &data.var_real)?;
    let (mut imag, mut var_imag, sensitivity_imag) =
        interp1d_with_uncertainty(half, &data.frequency, &data.imag, &data.var_imag)?;

    // Zero phase at DC and Nyquist, by definition of a real signal.
    imag[0] = 0.0;
    imag[n - 1] = 0.0;
    var_imag[0] = 0.0;
    var_imag[n - 1] = 0.0;

    let covariance =
        recombined_covariance(&sensitivity_real, &sensitivity_imag, &data.covariance);

    Ok(InterpolationResult {
        frequency: half.to_vec(),
        real,
        imag,
        var_real,
        var_imag,
        covariance,
        sensitivity_real,
        sensitivity_imag,
    })
}

/// Diagonal of `C_re * diag(cov) * C_im^T`.
fn recombined_covariance(
    c_re: &SensitivityMatrix,
    c_im: &SensitivityMatrix,
    cov: &[f64],
) -> Vec<f64> {
    (0..c_re.rows())
        .map(|i| {
            c_re.row(i)
                .iter()
                .zip(c_im.row(i))
                .zip(cov)
                .map(|((&a, &b), &c)| a * c * b)
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_midpoints_linearly() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 10.0, 20.0];
        let var = [1.0, 1.0, 1.0];
        let (values, variances, c) =
            interp1d_with_uncertainty(&[0.5, 1.5], &x, &y, &var).unwrap();
        assert_eq!(values, vec![5.0, 15.0]);
        // Both weights 0.5: variance 0.25 + 0.25.
        assert_eq!(variances, vec![0.5, 0.5]);
        assert_eq!(c.at(0, 0), 0.5);
        assert_eq!(c.at(0, 1), 0.5);
        assert_eq!(c.at(0, 2), 0.0);
    }

    #[test]
    fn reproduces_source_points_exactly() {
        let x = [1.0, 2.0, 4.0, 8.0];
        let y = [3.0, -1.0, 0.5, 2.0];
        let var = [0.1, 0.2, 0.3, 0.4];
        let (values, variances, _) = interp1d_with_uncertainty(&x, &x, &y, &var).unwrap();
        for i in 0..x.len() {
            assert!((values[i] - y[i]).abs() < 1e-12);
            assert!((variances[i] - var[i]).abs() < 1e-12);
        }
    }

    #[test]
    fn extrapolates_beyond_both_ends() {
        let x = [1.0, 2.0];
        let y = [1.0, 3.0];
        let var = [0.0, 0.0];
        let (values, _, c) = interp1d_with_uncertainty(&[0.0, 3.0], &x, &y, &var).unwrap();
        // Slope 2 through (1,1): y(0) = -1, y(3) = 5.
        assert!((values[0] - -1.0).abs() < 1e-12);
        assert!((values[1] - 5.0).abs() < 1e-12);
        // Extrapolation weights go outside [0, 1] but still sum to 1.
        assert!((c.row(0).iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_short_source() {
        let err = interp1d_with_uncertainty(&[0.5], &[1.0], &[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn rejects_mismatched_source() {
        let err =
            interp1d_with_uncertainty(&[0.5], &[1.0, 2.0], &[1.0], &[1.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    fn ramp_calibration(n: usize) -> CalibrationData {
        let frequency: Vec<f64> = (0..n).map(|i| 1e6 * (i + 1) as f64).collect();
        CalibrationData::new(
            frequency.clone(),
            frequency.iter().map(|f| f * 1e-8).collect(),
            frequency.iter().map(|f| f * -2e-9).collect(),
            vec![0.04; n],
            vec![0.09; n],
            vec![0.005; n],
        )
        .unwrap()
    }

    #[test]
    fn imaginary_boundaries_forced_to_zero() {
        let data = ramp_calibration(20);
        // Dual-layout target: positive half then a copy.
        let half: Vec<f64> = (0..10).map(|i| 2e6 + i as f64 * 1.5e6).collect();
        let mut target = half.clone();
        target.extend_from_slice(&half);

        let result = interpolate_calibration(&data, &target).unwrap();
        assert_eq!(result.imag[0], 0.0);
        assert_eq!(result.imag[result.imag.len() - 1], 0.0);
        assert_eq!(result.var_imag[0], 0.0);
        assert_eq!(result.var_imag[result.var_imag.len() - 1], 0.0);
        // Interior points keep their interpolated values.
        assert!(result.imag[4] != 0.0);
    }

    #[test]
    fn covariance_recombines_through_both_channels() {
        let data = ramp_calibration(5);
        let half: Vec<f64> = data.frequency.clone();
        let mut target = half.clone();
        target.extend_from_slice(&half);

        let result = interpolate_calibration(&data, &target).unwrap();
        // On the source grid both sensitivities are identity, so the
        // recombined covariance is the source covariance.
        for (got, want) in result.covariance.iter().zip(&data.covariance) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
    }

    #[test]
    fn result_lengths_match_half_grid() {
        let data = ramp_calibration(8);
        let target: Vec<f64> = (0..14).map(|i| 1e6 + i as f64 * 5e5).collect();
        let n = target.len() / 2;
        let result = interpolate_calibration(&data, &target).unwrap();
        assert_eq!(result.frequency.len(), n);
        assert_eq!(result.real.len(), n);
        assert_eq!(result.imag.len(), n);
        assert_eq!(result.var_real.len(), n);
        assert_eq!(result.var_imag.len(), n);
        assert_eq!(result.covariance.len(), n);
        assert_eq!(result.sensitivity_real.rows(), n);
        assert_eq!(result.sensitivity_real.cols(), data.len());
    }
}
