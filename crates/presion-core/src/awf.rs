//! Average working frequency estimation from a magnitude spectrum.
//!
//! The average working frequency of an ultrasonic pulse is the midpoint of
//! the two frequencies where the spectrum magnitude crosses its half-power
//! (-3 dB) level around the dominant peak. Both crossings are located by
//! linear interpolation between the bracketing samples, so the estimate is
//! not quantized to the frequency grid.

use crate::error::{Error, Result};
use num_complex::Complex64;
use tracing::debug;

/// Half-power threshold relative to the spectral peak (-3 dB).
const HALF_POWER_RATIO: f64 = 0.71;

/// Average working frequency and the crossings that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AwfResult {
    /// Midpoint of the two half-power crossings (Hz).
    pub frequency: f64,
    /// Lower half-power crossing f1 (Hz).
    pub lower_crossing: f64,
    /// Upper half-power crossing f2 (Hz).
    pub upper_crossing: f64,
    /// Upper bound `3*f1` of the f2 search window (Hz).
    pub search_limit: f64,
}

/// Estimate the average working frequency of a magnitude spectrum.
///
/// The lower crossing is found by scanning backward from the peak to the
/// last sample at or below the threshold; unless that sample sits exactly
/// on the threshold, the crossing is interpolated toward its successor.
/// The upper crossing is searched in the window `[f_peak, 3*f1]`: the last
/// window sample still at or above the threshold, interpolated toward its
/// predecessor. Diagnostics go out as `tracing` debug events and never
/// touch the numeric path.
///
/// Fails with [`Error::Computation`], carrying the search bounds, when
/// no sample below the threshold precedes the peak or the upper window is
/// empty. Both conditions mean the spectrum is malformed or too poorly
/// resolved to define a working frequency, and silently defaulting would
/// hide that.
pub fn average_working_frequency(frequency: &[f64], magnitude: &[f64]) -> Result<AwfResult> {
    if frequency.len() != magnitude.len() {
        return Err(Error::InvalidInput(format!(
            "spectrum arrays disagree: frequency {}, magnitude {}",
            frequency.len(),
            magnitude.len()
        )));
    }
    if frequency.is_empty() {
        return Err(Error::InvalidInput("spectrum is empty".to_string()));
    }

    let peak = argmax(magnitude);
    let threshold = HALF_POWER_RATIO * magnitude[peak];

    let f1_index = magnitude[..peak]
        .iter()
        .rposition(|&m| m <= threshold)
        .ok_or_else(|| {
            Error::Computation(format!(
                "no sample at or below the half-power level {threshold:.6e} before the peak at {:.6e} Hz",
                frequency[peak]
            ))
        })?;

    let f1 = if magnitude[f1_index] == threshold {
        frequency[f1_index]
    } else {
        crossing(
            frequency[f1_index],
            frequency[f1_index + 1],
            magnitude[f1_index],
            magnitude[f1_index + 1],
            threshold,
        )
    };

    let search_limit = 3.0 * f1;
    debug!(
        window_low_hz = frequency[peak],
        window_high_hz = search_limit,
        "searching for the upper half-power crossing"
    );

    if frequency[peak] > search_limit {
        return Err(Error::Computation(format!(
            "upper search window [{:.6e}, {search_limit:.6e}] Hz holds no samples",
            frequency[peak]
        )));
    }
    let window_len = frequency[peak..]
        .iter()
        .take_while(|&&f| f <= search_limit)
        .count();
    let f2_index = peak
        + magnitude[peak..peak + window_len]
            .iter()
            .rposition(|&m| m >= threshold)
            .ok_or_else(|| {
                Error::Computation(format!(
                    "no sample at or above the half-power level {threshold:.6e} in [{:.6e}, {search_limit:.6e}] Hz",
                    frequency[peak]
                ))
            })?;

    let f2 = crossing(
        frequency[f2_index - 1],
        frequency[f2_index],
        magnitude[f2_index - 1],
        magnitude[f2_index],
        threshold,
    );

    let result = AwfResult {
        frequency: 0.5 * (f1 + f2),
        lower_crossing: f1,
        upper_crossing: f2,
        search_limit,
    };
    debug!(
        f1_hz = result.lower_crossing,
        f2_hz = result.upper_crossing,
        awf_hz = result.frequency,
        "half-power crossings located"
    );
    Ok(result)
}

/// [`average_working_frequency`] over a complex spectrum.
pub fn average_working_frequency_complex(
    frequency: &[f64],
    spectrum: &[Complex64],
) -> Result<AwfResult> {
    let magnitude: Vec<f64> = spectrum.iter().map(|c| c.norm()).collect();
    average_working_frequency(frequency, &magnitude)
}

/// Frequency where the line through `(x1, y1)` and `(x2, y2)` reaches
/// `level`.
fn crossing(x1: f64, x2: f64, y1: f64, y2: f64, level: f64) -> f64 {
    (level - y1) * (x2 - x1) / (y2 - y1) + x1
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
