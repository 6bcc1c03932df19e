//! Presion CLI - measurement-uncertainty processing for hydrophone data.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "presion")]
#[command(version, about = "Hydrophone measurement-uncertainty toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pulse parameter statistics for a waveform file
    Pulse(commands::pulse::PulseArgs),

    /// Reduce and interpolate hydrophone calibration data
    Calibrate(commands::calibrate::CalibrateArgs),

    /// Average working frequency of a measured pulse
    Awf(commands::awf::AwfArgs),

    /// List measurement scenarios
    Scenarios(commands::scenarios::ScenariosArgs),

    /// Tabulate reference filter responses
    Filters(commands::filters::FiltersArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pulse(args) => commands::pulse::run(args),
        Commands::Calibrate(args) => commands::calibrate::run(args),
        Commands::Awf(args) => commands::awf::run(args),
        Commands::Scenarios(args) => commands::scenarios::run(args),
        Commands::Filters(args) => commands::filters::run(args),
    }
}
