//! Scenario file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// One measurement scenario: which data files belong together and what
/// instrument produced them.
///
/// File names are relative to the measurement archive root; locating and
/// downloading the archive is the business of whoever owns it, not of this
/// crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    /// Pressure waveform measurement file.
    pub measurement_file: String,

    /// Matching noise-only recording.
    pub noise_file: String,

    /// Hydrophone calibration data for the sensor used.
    pub calibration_file: String,

    /// Hydrophone label, e.g. "GAMPT MH44".
    pub hydrophone: String,

    /// Measurement mode label, e.g. "M-Mode 3 MHz".
    pub measurement_type: String,
}

/// A named collection of scenarios, loadable from TOML files.
///
/// # TOML Format
///
/// ```toml
/// name = "Lab 3 runs"
/// description = "Repeat measurements, March batch"
///
/// [[scenarios]]
/// measurement_file = "MeasuredSignals/M-Mode 3 MHz/M3_MH44.DAT"
/// noise_file = "MeasuredSignals/M-Mode 3 MHz/M3_MH44r.DAT"
/// calibration_file = "HydrophoneCalibrationData/MW_MH44ReIm.csv"
/// hydrophone = "GAMPT MH44"
/// measurement_type = "M-Mode 3 MHz"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScenarioSet {
    /// Name of the collection.
    pub name: String,

    /// Optional description of the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The scenarios, in presentation order.
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    /// Create a new empty scenario set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            scenarios: Vec::new(),
        }
    }

    /// Add a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a scenario.
    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenarios.push(scenario);
        self
    }

    /// Load a scenario set from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load a scenario set from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the scenario set to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the scenario set to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Number of scenarios in the set.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Whether the set holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenario by 1-based index, the numbering used in lab protocols.
    pub fn get(&self, index: usize) -> Result<&Scenario, ConfigError> {
        index
            .checked_sub(1)
            .and_then(|i| self.scenarios.get(i))
            .ok_or(ConfigError::ScenarioNotFound(index))
    }
}
