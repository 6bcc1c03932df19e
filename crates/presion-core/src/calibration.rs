//! Hydrophone calibration datasets and frequency-range reduction.

use crate::error::{Error, Result};

/// Complex hydrophone sensitivity with per-bin uncertainty, indexed by a
/// shared frequency grid.
///
/// All six arrays run parallel: entry `i` of each belongs to
/// `frequency[i]`. The real/imaginary cross-covariance is a single scalar
/// per frequency bin, not a full joint covariance matrix, a deliberate
/// simplification carried by the calibration file format itself.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationData {
    /// Frequency grid in Hz, strictly increasing.
    pub frequency: Vec<f64>,
    /// Real part of the sensitivity (V/Pa).
    pub real: Vec<f64>,
    /// Imaginary part of the sensitivity (V/Pa).
    pub imag: Vec<f64>,
    /// Variance of the real part.
    pub var_real: Vec<f64>,
    /// Variance of the imaginary part.
    pub var_imag: Vec<f64>,
    /// Per-bin real/imaginary cross-covariance.
    pub covariance: Vec<f64>,
}

impl CalibrationData {
    /// Bundle six parallel arrays into a dataset.
    ///
    /// Fails with [`Error::InvalidInput`] when the arrays disagree in
    /// length or the grid is empty.
    pub fn new(
        frequency: Vec<f64>,
        real: Vec<f64>,
        imag: Vec<f64>,
        var_real: Vec<f64>,
        var_imag: Vec<f64>,
        covariance: Vec<f64>,
    ) -> Result<Self> {
        let n = frequency.len();
        if n == 0 {
            return Err(Error::InvalidInput(
                "calibration dataset has no frequency samples".to_string(),
            ));
        }
        for (name, len) in [
            ("real", real.len()),
            ("imag", imag.len()),
            ("var_real", var_real.len()),
            ("var_imag", var_imag.len()),
            ("covariance", covariance.len()),
        ] {
            if len != n {
                return Err(Error::InvalidInput(format!(
                    "calibration array '{name}' has {len} entries, frequency grid has {n}"
                )));
            }
        }
        Ok(Self {
            frequency,
            real,
            imag,
            var_real,
            var_imag,
            covariance,
        })
    }

    /// Number of frequency samples.
    pub fn len(&self) -> usize {
        self.frequency.len()
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.frequency.is_empty()
    }

    /// Restrict the dataset to the sub-range closest to `[fmin, fmax]`.
    ///
    /// The bounds snap to the nearest existing samples (first occurrence on
    /// ties), so the returned grid can differ from the requested bounds by
    /// up to one sample spacing. No interpolation or extrapolation happens
    /// here. All arrays are copied; the source dataset and the result share
    /// no storage, so later stages can never mutate through an alias.
    pub fn reduce_frequency_range(&self, fmin: f64, fmax: f64) -> Result<CalibrationData> {
        if self.is_empty() {
            return Err(Error::InvalidInput(
                "cannot reduce an empty calibration dataset".to_string(),
            ));
        }
        let lo = nearest_index(&self.frequency, fmin);
        let hi = nearest_index(&self.frequency, fmax);
        if lo > hi {
            return Err(Error::InvalidInput(format!(
                "requested range [{fmin:e}, {fmax:e}] Hz selects an inverted index range on this grid"
            )));
        }
        Ok(CalibrationData {
            frequency: self.frequency[lo..=hi].to_vec(),
            real: self.real[lo..=hi].to_vec(),
            imag: self.imag[lo..=hi].to_vec(),
            var_real: self.var_real[lo..=hi].to_vec(),
            var_imag: self.var_imag[lo..=hi].to_vec(),
            covariance: self.covariance[lo..=hi].to_vec(),
        })
    }
}

/// Index of the sample nearest to `target`, first occurrence on ties.
pub fn nearest_index(values: &[f64], target: f64) -> usize {
    let mut best = 0;
    let mut best_diff = f64::INFINITY;
    for (i, &v) in values.iter().enumerate() {
        let diff = (v - target).abs();
        if diff < best_diff {
            best = i;
            best_diff = diff;
        }
    }
    best
}
