//! Measurement-scenario registry for the presion toolkit.
//!
//! A scenario ties one archived pressure measurement to its noise
//! recording, the calibration data of the hydrophone that recorded it, and
//! the labels a report needs. This crate keeps that mapping as plain
//! configuration data (a built-in table plus TOML files for user-defined
//! sets) so the numerical core stays free of file bookkeeping.
//!
//! # Example
//!
//! ```rust
//! use presion_config::{builtin_scenario, builtin_scenarios};
//!
//! let all = builtin_scenarios();
//! println!("{} scenarios available", all.len());
//!
//! let s = builtin_scenario(1).unwrap();
//! println!("{}: {}", s.hydrophone, s.measurement_type);
//! ```

mod error;
mod registry;
mod scenario;

pub use error::ConfigError;
pub use registry::{BUILTIN_SCENARIO_COUNT, builtin_scenario, builtin_scenarios};
pub use scenario::{Scenario, ScenarioSet};
