//! Built-in measurement scenarios bundled with the library.
//!
//! The scenario table pairs every archived measurement with its noise
//! recording and the calibration data of the hydrophone that took it.
//! Keeping it here as data, instead of a lookup function buried in the
//! processing code, means the numerical core never has to know that
//! scenario 13 is a 7 MHz pulse-Doppler run on an MH44.

use crate::scenario::{Scenario, ScenarioSet};

/// Number of built-in scenarios.
pub const BUILTIN_SCENARIO_COUNT: usize = 16;

/// TOML content of the built-in scenario table, embedded at compile time.
const BUILTIN_SCENARIOS_TOML: &str = r#"
name = "PTB ultrasonics tutorial measurements"
description = "M-mode and pulse-Doppler runs at 3, 6 and 7 MHz across four hydrophones"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 3 MHz/M3_MH44.DAT"
noise_file = "MeasuredSignals/M-Mode 3 MHz/M3_MH44r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_MH44ReIm.csv"
hydrophone = "GAMPT MH44"
measurement_type = "M-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 3 MHz/M3_MH46.DAT"
noise_file = "MeasuredSignals/M-Mode 3 MHz/M3_MH46r.DAT"
calibration_file = "HydrophoneCalibrationData/MH46_MWReIm.csv"
hydrophone = "GAMPT MH46"
measurement_type = "M-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 3 MHz/M3_ON1704.DAT"
noise_file = "MeasuredSignals/M-Mode 3 MHz/M3_ON1704r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_ONDA1704_SECReIm.csv"
hydrophone = "ONDA1704"
measurement_type = "M-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 3 MHz/M3_PA1434.DAT"
noise_file = "MeasuredSignals/M-Mode 3 MHz/M3_PA1434r.DAT"
calibration_file = "HydrophoneCalibrationData/MW PA1434 ReIm.csv"
hydrophone = "Precision Acoustics 1434"
measurement_type = "M-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_MH44.DAT"
noise_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_MH44r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_MH44ReIm.csv"
hydrophone = "GAMPT MH44"
measurement_type = "Pulse-Doppler-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_MH46.DAT"
noise_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_MH46r.DAT"
calibration_file = "HydrophoneCalibrationData/MH46_MWReIm.csv"
hydrophone = "GAMPT MH46"
measurement_type = "Pulse-Doppler-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_ON1704.DAT"
noise_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_ON1704r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_ONDA1704_SECReIm.csv"
hydrophone = "ONDA1704"
measurement_type = "Pulse-Doppler-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_PA1434.DAT"
noise_file = "MeasuredSignals/pD-Mode 3 MHz/pD3_PA1434r.DAT"
calibration_file = "HydrophoneCalibrationData/MW PA1434 ReIm.csv"
hydrophone = "Precision Acoustics 1434"
measurement_type = "Pulse-Doppler-Mode 3 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 6 MHz/M6_MH44.DAT"
noise_file = "MeasuredSignals/M-Mode 6 MHz/M6_MH44r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_MH44ReIm.csv"
hydrophone = "GAMPT MH44"
measurement_type = "M-Mode 6 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 6 MHz/M6_MH46.DAT"
noise_file = "MeasuredSignals/M-Mode 6 MHz/M6_MH46r.DAT"
calibration_file = "HydrophoneCalibrationData/MH46_MWReIm.csv"
hydrophone = "GAMPT MH46"
measurement_type = "M-Mode 6 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 6 MHz/M6_ON1704.DAT"
noise_file = "MeasuredSignals/M-Mode 6 MHz/M6_ON1704r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_ONDA1704_SECReIm.csv"
hydrophone = "ONDA1704"
measurement_type = "M-Mode 6 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/M-Mode 6 MHz/M6_PA1434.DAT"
noise_file = "MeasuredSignals/M-Mode 6 MHz/M6_PA1434r.DAT"
calibration_file = "HydrophoneCalibrationData/MW PA1434 ReIm.csv"
hydrophone = "Precision Acoustics 1434"
measurement_type = "M-Mode 6 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_MH44.DAT"
noise_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_MH44r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_MH44ReIm.csv"
hydrophone = "GAMPT MH44"
measurement_type = "Pulse-Doppler-Mode 7 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_MH46.DAT"
noise_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_MH46r.DAT"
calibration_file = "HydrophoneCalibrationData/MH46_MWReIm.csv"
hydrophone = "GAMPT MH46"
measurement_type = "Pulse-Doppler-Mode 7 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_ON1704.DAT"
noise_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_ON1704r.DAT"
calibration_file = "HydrophoneCalibrationData/MW_ONDA1704_SECReIm.csv"
hydrophone = "ONDA1704"
measurement_type = "Pulse-Doppler-Mode 7 MHz"

[[scenarios]]
measurement_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_PA1434.DAT"
noise_file = "MeasuredSignals/pD-Mode 7 MHz/pD7_PA1434r.DAT"
calibration_file = "HydrophoneCalibrationData/MW PA1434 ReIm.csv"
hydrophone = "Precision Acoustics 1434"
measurement_type = "Pulse-Doppler-Mode 7 MHz"
"#;

/// The built-in scenario table.
pub fn builtin_scenarios() -> ScenarioSet {
    ScenarioSet::from_toml(BUILTIN_SCENARIOS_TOML)
        .unwrap_or_else(|_| ScenarioSet::new("builtin"))
}

/// Built-in scenario by 1-based index.
///
/// # Example
///
/// ```rust
/// use presion_config::builtin_scenario;
///
/// let scenario = builtin_scenario(13).unwrap();
/// assert_eq!(scenario.hydrophone, "GAMPT MH44");
/// ```
pub fn builtin_scenario(index: usize) -> Result<Scenario, crate::ConfigError> {
    builtin_scenarios().get(index).cloned()
}
