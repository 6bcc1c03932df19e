//! Pulse parameter extraction command.

use clap::Args;
use presion_core::pulse_parameters;
use std::path::PathBuf;

use super::common;

#[derive(Args)]
pub struct PulseArgs {
    /// Input waveform file: time, pressure, uncertainty columns
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Header lines to skip
    #[arg(long, default_value = "1")]
    header_rows: usize,

    /// Write the statistics as JSON to this file
    #[arg(short, long)]
    json: Option<PathBuf>,
}

pub fn run(args: PulseArgs) -> anyhow::Result<()> {
    let cols = common::read_columns(&args.input, 3, args.header_rows)?;
    let mut cols = cols.into_iter();
    // read_columns always yields exactly the requested column count
    let time = cols.next().unwrap();
    let pressure = cols.next().unwrap();
    let uncertainty = cols.next().unwrap();

    println!("Pulse parameters for {}", args.input.display());
    common::print_time_summary(&time);

    let stats = pulse_parameters(&time, &pressure, &uncertainty)?;

    println!(
        "  peak compression: {:.4e} Pa +/- {:.2e} at t = {:.4e} s (sample {})",
        stats.compression.value,
        stats.compression.uncertainty,
        stats.compression.time,
        stats.compression.index
    );
    println!(
        "  peak rarefaction: {:.4e} Pa +/- {:.2e} at t = {:.4e} s (sample {})",
        stats.rarefaction.value,
        stats.rarefaction.uncertainty,
        stats.rarefaction.time,
        stats.rarefaction.index
    );
    println!(
        "  ppsi: {:.4e} Pa^2*s +/- {:.2e}",
        stats.ppsi_value, stats.ppsi_uncertainty
    );

    if let Some(path) = args.json {
        let json = serde_json::json!({
            "dt_s": stats.dt,
            "compression": peak_json(&stats.compression),
            "rarefaction": peak_json(&stats.rarefaction),
            "ppsi_value": stats.ppsi_value,
            "ppsi_uncertainty": stats.ppsi_uncertainty,
        });
        std::fs::write(&path, serde_json::to_string_pretty(&json)?)?;
        println!("Wrote statistics to {}", path.display());
    }
    Ok(())
}

fn peak_json(peak: &presion_core::Peak) -> serde_json::Value {
    serde_json::json!({
        "index": peak.index,
        "value": peak.value,
        "time": peak.time,
        "uncertainty": peak.uncertainty,
    })
}
