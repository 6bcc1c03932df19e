//! CLI subcommand implementations.

pub mod awf;
pub mod calibrate;
pub mod common;
pub mod filters;
pub mod pulse;
pub mod scenarios;
