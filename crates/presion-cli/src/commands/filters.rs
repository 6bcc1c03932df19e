//! Reference filter response tables.

use clap::Args;
use presion_core::{bessel_lowpass, butterworth_magnitude, kaiser_lowpass, simple_lowpass};
use std::path::PathBuf;

#[derive(Args)]
pub struct FiltersArgs {
    /// Cutoff frequency in Hz
    #[arg(long, default_value = "2e7")]
    cutoff: f64,

    /// Highest tabulated frequency in Hz
    #[arg(long, default_value = "6e7")]
    fmax: f64,

    /// Number of rows
    #[arg(long, default_value = "25")]
    points: usize,

    /// Bessel / Butterworth order
    #[arg(long, default_value = "2")]
    order: usize,

    /// FIR length for the Kaiser design
    #[arg(long, default_value = "51")]
    taps: usize,

    /// Sampling rate for the Kaiser design in Hz
    #[arg(long, default_value = "2.5e8")]
    sample_rate: f64,

    /// Output CSV file (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: FiltersArgs) -> anyhow::Result<()> {
    let points = args.points.max(2);
    let f: Vec<f64> = (0..points)
        .map(|i| i as f64 * args.fmax / (points - 1) as f64)
        .collect();

    let bessel = bessel_lowpass(&f, args.cutoff, args.order);
    let kaiser = kaiser_lowpass(&f, args.cutoff, args.taps, args.sample_rate);
    let simple = simple_lowpass(&f, args.cutoff);
    let butter = butterworth_magnitude(&f, args.cutoff, args.order);

    println!(
        "Reference low-pass responses, cutoff {:.3} MHz",
        args.cutoff / 1e6
    );
    println!(
        "  {:>10}  {:>8}  {:>8}  {:>8}  {:>8}",
        "Freq (MHz)", "Bessel", "Kaiser", "Simple", "Butter"
    );
    for i in 0..points {
        println!(
            "  {:>10.3}  {:>8.5}  {:>8.5}  {:>8.5}  {:>8.5}",
            f[i] / 1e6,
            bessel[i].norm(),
            kaiser[i].norm(),
            simple[i].norm(),
            butter[i]
        );
    }

    if let Some(path) = &args.output {
        let mut csv = String::new();
        csv.push_str("frequency_hz,bessel,kaiser,simple,butterworth\n");
        for i in 0..points {
            csv.push_str(&format!(
                "{:.2},{:.6},{:.6},{:.6},{:.6}\n",
                f[i],
                bessel[i].norm(),
                kaiser[i].norm(),
                simple[i].norm(),
                butter[i]
            ));
        }
        std::fs::write(path, csv)?;
        println!("\nWrote table to {}", path.display());
    }
    Ok(())
}
