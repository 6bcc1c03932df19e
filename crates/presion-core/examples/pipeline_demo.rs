//! Walk the calibration pipeline on synthetic data.
//!
//! Run with: cargo run -p presion-core --example pipeline_demo

use presion_core::{
    AxisMode, CalibrationData, PackedSpectrum, average_working_frequency, frequency_scale,
    interpolate_calibration, pulse_parameters,
};

fn main() -> presion_core::Result<()> {
    // Synthetic calibration data: roll-off magnitude, linear phase ramp.
    let n = 60;
    let frequency: Vec<f64> = (0..n).map(|i| 1e6 + i as f64 * 0.5e6).collect();
    let real: Vec<f64> = frequency
        .iter()
        .map(|&f| 5e-8 / (1.0 + (f / 2e7).powi(2)))
        .collect();
    let imag: Vec<f64> = frequency.iter().map(|&f| -2e-16 * f).collect();
    let var_real = vec![1e-18; n];
    let var_imag = vec![2e-18; n];
    let covariance = vec![5e-19; n];
    let calib = CalibrationData::new(frequency, real, imag, var_real, var_imag, covariance)?;

    println!("Calibration: {} points, {:.1}-{:.1} MHz", calib.len(),
        calib.frequency[0] / 1e6, calib.frequency[calib.len() - 1] / 1e6);

    // Restrict to the band of interest, then interpolate onto the grid of
    // a 2 ns / 1000-sample measurement.
    let reduced = calib.reduce_frequency_range(2e6, 2.5e7)?;
    let time: Vec<f64> = (0..1000).map(|i| i as f64 * 2e-9).collect();
    let grid = frequency_scale(&time, AxisMode::Dual)?;
    let result = interpolate_calibration(&reduced, &grid)?;

    println!(
        "Interpolated onto {} bins, df = {:.3} MHz",
        result.frequency.len(),
        (result.frequency[1] - result.frequency[0]) / 1e6
    );
    println!(
        "Boundary imag/var_imag: ({:.1}, {:.1}) and ({:.1}, {:.1})",
        result.imag[0],
        result.var_imag[0],
        result.imag[result.imag.len() - 1],
        result.var_imag[result.var_imag.len() - 1]
    );

    // Amplitude and phase of the interpolated sensitivity, via the packed
    // layout the deconvolution stage consumes.
    let mut packed = result.real.clone();
    packed.extend_from_slice(&result.imag);
    let view = PackedSpectrum::new(&packed)?;
    let amp = view.amplitude();
    println!("Sensitivity at first bin: {:.3e} V/Pa", amp[0]);

    // A toy pressure pulse and its parameters.
    let pulse_time: Vec<f64> = (0..256).map(|i| i as f64 * 1e-8).collect();
    let pressure: Vec<f64> = pulse_time
        .iter()
        .map(|&t| {
            let x = (t - 1.28e-6) / 4e-7;
            1e5 * (-x * x).exp() * (2.0 * std::f64::consts::PI * 3e6 * t).sin()
        })
        .collect();
    let uncertainty = vec![2e3; 256];
    let stats = pulse_parameters(&pulse_time, &pressure, &uncertainty)?;
    println!(
        "Peak compression {:.3e} Pa at {:.3e} s, rarefaction {:.3e} Pa, ppsi {:.3e} +/- {:.3e}",
        stats.compression.value,
        stats.compression.time,
        stats.rarefaction.value,
        stats.ppsi_value,
        stats.ppsi_uncertainty
    );

    // Average working frequency from a triangular stand-in spectrum.
    let f_axis: Vec<f64> = (0..500).map(|i| i as f64 * 2e4).collect();
    let magnitude: Vec<f64> = f_axis
        .iter()
        .map(|&f| (1.0 - (f - 3e6).abs() / 1.5e6).max(0.0))
        .collect();
    let awf = average_working_frequency(&f_axis, &magnitude)?;
    println!(
        "AWF {:.3} MHz (crossings {:.3} / {:.3} MHz)",
        awf.frequency / 1e6,
        awf.lower_crossing / 1e6,
        awf.upper_crossing / 1e6
    );

    Ok(())
}
