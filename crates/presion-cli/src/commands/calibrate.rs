//! Calibration reduction and interpolation command.

use clap::Args;
use presion_core::{AxisMode, frequency_scale, interpolate_calibration};
use std::path::PathBuf;

use super::common;

#[derive(Args)]
pub struct CalibrateArgs {
    /// Calibration file: frequency (MHz), real, imag, var-real, var-imag,
    /// covariance
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Lower bound of the relevant frequency range in Hz
    #[arg(long, default_value = "1e6")]
    fmin: f64,

    /// Upper bound of the relevant frequency range in Hz
    #[arg(long, default_value = "1e8")]
    fmax: f64,

    /// Number of samples of the measurement time axis
    #[arg(long, default_value = "2500")]
    samples: usize,

    /// Sampling interval of the measurement in seconds
    #[arg(long, default_value = "2e-9")]
    dt: f64,

    /// Header lines to skip
    #[arg(long, default_value = "1")]
    header_rows: usize,

    /// Write the interpolated dataset as JSON to this file
    #[arg(short, long)]
    json: Option<PathBuf>,
}

pub fn run(args: CalibrateArgs) -> anyhow::Result<()> {
    let data = common::load_calibration(&args.input, args.header_rows)?;

    let df = if data.len() > 1 {
        data.frequency[1] - data.frequency[0]
    } else {
        0.0
    };
    println!("Hydrophone calibration data: {}", args.input.display());
    println!(
        "  {} points, fmin = {:.3} MHz, fmax = {:.3} MHz, df = {:.1} Hz",
        data.len(),
        data.frequency[0] / 1e6,
        data.frequency[data.len() - 1] / 1e6,
        df
    );

    let reduced = data.reduce_frequency_range(args.fmin, args.fmax)?;
    println!(
        "  reduced to {} points in [{:.3}, {:.3}] MHz",
        reduced.len(),
        reduced.frequency[0] / 1e6,
        reduced.frequency[reduced.len() - 1] / 1e6
    );

    let time: Vec<f64> = (0..args.samples).map(|i| i as f64 * args.dt).collect();
    let grid = frequency_scale(&time, AxisMode::Dual)?;
    let result = interpolate_calibration(&reduced, &grid)?;

    let top = result.frequency[result.frequency.len() - 1];
    if top > reduced.frequency[reduced.len() - 1] || result.frequency[0] < reduced.frequency[0] {
        tracing::warn!(
            measured_low_hz = reduced.frequency[0],
            measured_high_hz = reduced.frequency[reduced.len() - 1],
            "target grid extends beyond the measured range; extrapolated bins carry no documented confidence"
        );
    }

    println!(
        "  interpolated onto {} bins up to {:.3} MHz",
        result.frequency.len(),
        result.frequency[result.frequency.len() - 1] / 1e6
    );

    if let Some(path) = args.json {
        let json = serde_json::json!({
            "frequency_hz": result.frequency,
            "real": result.real,
            "imag": result.imag,
            "var_real": result.var_real,
            "var_imag": result.var_imag,
            "covariance": result.covariance,
        });
        std::fs::write(&path, serde_json::to_string_pretty(&json)?)?;
        println!("Wrote interpolated calibration to {}", path.display());
    }
    Ok(())
}
