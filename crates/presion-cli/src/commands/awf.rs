//! Average working frequency command.

use clap::Args;
use presion_core::{AxisMode, average_working_frequency, frequency_scale};
use std::path::PathBuf;

use super::common;

#[derive(Args)]
pub struct AwfArgs {
    /// Input waveform file: time and pressure columns
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Header lines to skip
    #[arg(long, default_value = "1")]
    header_rows: usize,

    /// Write the result as JSON to this file
    #[arg(short, long)]
    json: Option<PathBuf>,
}

pub fn run(args: AwfArgs) -> anyhow::Result<()> {
    let cols = common::read_columns(&args.input, 2, args.header_rows)?;
    let mut cols = cols.into_iter();
    let time = cols.next().unwrap();
    let pressure = cols.next().unwrap();

    println!("Average working frequency for {}", args.input.display());
    common::print_time_summary(&time);

    let frequency = frequency_scale(&time, AxisMode::Half)?;
    let magnitude = common::magnitude_spectrum(&pressure);
    let result = average_working_frequency(&frequency, &magnitude)?;

    println!("  f1  = {:.6} MHz", result.lower_crossing / 1e6);
    println!(
        "  f2  = {:.6} MHz (searched up to {:.6} MHz)",
        result.upper_crossing / 1e6,
        result.search_limit / 1e6
    );
    println!("  awf = {:.6} MHz", result.frequency / 1e6);

    if let Some(path) = args.json {
        let json = serde_json::json!({
            "awf_hz": result.frequency,
            "lower_crossing_hz": result.lower_crossing,
            "upper_crossing_hz": result.upper_crossing,
            "search_limit_hz": result.search_limit,
        });
        std::fs::write(&path, serde_json::to_string_pretty(&json)?)?;
        println!("Wrote result to {}", path.display());
    }
    Ok(())
}
