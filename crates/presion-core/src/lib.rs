//! Presion Core - uncertainty-aware frequency-domain processing for
//! hydrophone pressure measurements.
//!
//! This crate is the numerical heart of a hydrophone calibration pipeline:
//! every transformation carries its measurement uncertainty along instead
//! of discarding it.
//!
//! - [`freq_axis`] - frequency axes matching real-valued transform layouts
//! - [`packed`] - views over packed cosine/sine coefficient vectors
//! - [`calibration`] - calibration datasets and frequency-range reduction
//! - [`interpolate`] - interpolation with sensitivity-matrix uncertainty
//!   propagation
//! - [`pulse`] - pulse parameters with correlated uncertainty combination
//! - [`awf`] - average working frequency via half-power crossings
//! - [`filter_response`] - ideal reference filter curves
//!
//! ## Example Pipeline
//!
//! ```rust,ignore
//! use presion_core::{frequency_scale, interpolate_calibration, AxisMode};
//!
//! // 1. Build the target grid from the measurement's time axis
//! let grid = frequency_scale(&time, AxisMode::Dual)?;
//!
//! // 2. Restrict the calibration data to the band of interest
//! let reduced = calib.reduce_frequency_range(1e6, 1e8)?;
//!
//! // 3. Interpolate value, variance and covariance onto the grid
//! let interpolated = interpolate_calibration(&reduced, &grid)?;
//! ```
//!
//! Every operation is a pure function of its inputs producing newly
//! allocated results; nothing aliases, so independent pipelines can run on
//! separate threads without synchronization.

pub mod awf;
pub mod calibration;
pub mod error;
pub mod filter_response;
pub mod freq_axis;
pub mod interpolate;
pub mod packed;
pub mod pulse;

pub use awf::{AwfResult, average_working_frequency, average_working_frequency_complex};
pub use calibration::{CalibrationData, nearest_index};
pub use error::{Error, Result};
pub use filter_response::{
    bessel_lowpass, butterworth_magnitude, kaiser_lowpass, simple_lowpass,
};
pub use freq_axis::{AxisMode, frequency_scale};
pub use interpolate::{
    InterpolationResult, SensitivityMatrix, interp1d_with_uncertainty, interpolate_calibration,
};
pub use packed::PackedSpectrum;
pub use pulse::{Peak, PulseStatistics, pulse_parameters};
