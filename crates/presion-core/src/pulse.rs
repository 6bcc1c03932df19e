//! Pulse-shape summary statistics with correlated uncertainty.

use crate::error::{Error, Result};

/// One extremum of a pressure pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Sample index of the extremum.
    pub index: usize,
    /// Pressure magnitude at the extremum (Pa).
    pub value: f64,
    /// Time of the extremum (s).
    pub time: f64,
    /// Standard uncertainty of the pressure at the extremum (Pa).
    pub uncertainty: f64,
}

/// Summary statistics of a single pressure pulse.
#[derive(Debug, Clone, PartialEq)]
pub struct PulseStatistics {
    /// Sampling interval derived from the time axis (s).
    pub dt: f64,
    /// Peak compression: the global pressure maximum.
    pub compression: Peak,
    /// Peak rarefaction: the global pressure minimum, reported as a
    /// positive magnitude.
    pub rarefaction: Peak,
    /// Pulse-pressure-squared integral `dt * sum(p^2)` (Pa^2*s).
    pub ppsi_value: f64,
    /// Standard uncertainty of the integral under the fully correlated
    /// bound.
    pub ppsi_uncertainty: f64,
}

/// Compute pulse parameters for a sampled pressure waveform.
///
/// `time` must be strictly increasing with uniform spacing; `pressure` and
/// `uncertainty` (one standard deviation per sample) run parallel to it.
/// The first occurrence wins when an extremum value repeats.
///
/// The integral uncertainty assumes full positive correlation between
/// samples: with `c_i = 2*|p_i|*dt` it is `sqrt(dot(c, u) * dot(u, c))`, the
/// correlated-sum bound. When the correlation structure between samples is
/// unknown this is the conservative choice: the independent-noise sum of
/// squares can underestimate badly.
///
/// Fails with [`Error::InvalidInput`] on mismatched lengths or fewer than
/// two samples.
pub fn pulse_parameters(
    time: &[f64],
    pressure: &[f64],
    uncertainty: &[f64],
) -> Result<PulseStatistics> {
    if time.len() != pressure.len() || time.len() != uncertainty.len() {
        return Err(Error::InvalidInput(format!(
            "waveform arrays disagree: time {}, pressure {}, uncertainty {}",
            time.len(),
            pressure.len(),
            uncertainty.len()
        )));
    }
    if time.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "pulse parameters need at least 2 samples, got {}",
            time.len()
        )));
    }

    let (t_min, t_max) = time
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &t| {
            (lo.min(t), hi.max(t))
        });
    let dt = (t_max - t_min) / (time.len() - 1) as f64;

    let pc_index = argmax(pressure);
    let pr_index = argmin(pressure);

    let compression = Peak {
        index: pc_index,
        value: pressure[pc_index],
        time: time[pc_index],
        uncertainty: uncertainty[pc_index],
    };
    let rarefaction = Peak {
        index: pr_index,
        value: -pressure[pr_index],
        time: time[pr_index],
        uncertainty: uncertainty[pr_index],
    };

    let ppsi_value = dt * pressure.iter().map(|&p| p * p).sum::<f64>();

    // Fully correlated combination; the absolute value keeps every
    // contribution additive.
    let weighted: f64 = pressure
        .iter()
        .zip(uncertainty)
        .map(|(&p, &u)| 2.0 * p.abs() * dt * u)
        .sum();
    let ppsi_uncertainty = (weighted * weighted).sqrt();

    Ok(PulseStatistics {
        dt,
        compression,
        rarefaction,
        ppsi_value,
        ppsi_uncertainty,
    })
}

/// Index of the maximum value, first occurrence on ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v > values[best] {
            best = i;
        }
    }
    best
}

/// Index of the minimum value, first occurrence on ties.
fn argmin(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate() {
        if v < values[best] {
            best = i;
        }
    }
    best
}
