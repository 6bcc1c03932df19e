//! Scenario registry command.

use clap::Args;
use presion_config::{Scenario, ScenarioSet, builtin_scenarios};
use std::path::PathBuf;

#[derive(Args)]
pub struct ScenariosArgs {
    /// Load scenarios from a TOML file instead of the built-in table
    #[arg(long)]
    file: Option<PathBuf>,

    /// Show only this 1-based scenario index
    #[arg(long)]
    index: Option<usize>,
}

pub fn run(args: ScenariosArgs) -> anyhow::Result<()> {
    let set = match &args.file {
        Some(path) => ScenarioSet::load(path)?,
        None => builtin_scenarios(),
    };

    println!("Scenario set: {}", set.name);
    if let Some(description) = &set.description {
        println!("  {description}");
    }
    println!();

    match args.index {
        Some(index) => print_scenario(index, set.get(index)?),
        None => {
            for (i, scenario) in set.scenarios.iter().enumerate() {
                print_scenario(i + 1, scenario);
            }
        }
    }
    Ok(())
}

fn print_scenario(index: usize, scenario: &Scenario) {
    println!(
        "  [{index:2}] {} ({})",
        scenario.hydrophone, scenario.measurement_type
    );
    println!("       measurement: {}", scenario.measurement_file);
    println!("       noise:       {}", scenario.noise_file);
    println!("       calibration: {}", scenario.calibration_file);
}
