//! TOML configuration for the closed-loop simulator.
//!
//! One file carries the shared logging section, the controller tuning, the
//! plant model and the scenario. Parsing rejects unknown fields; semantic
//! checks run afterwards and surface as `ConfigError::ValidationError`.

use std::path::Path;

use ladrc_common::prelude::*;
use serde::{Deserialize, Serialize};

/// Closed-loop scenario: constant target, optional step disturbance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Number of control ticks to run.
    pub ticks: usize,
    /// Setpoint.
    pub target: f64,
    /// Constant force added to the plant input (0 = none).
    #[serde(default)]
    pub disturbance: f64,
    /// First tick at which the disturbance acts.
    #[serde(default)]
    pub disturbance_start: usize,
    /// `|error|` bound used for the settling statistic.
    #[serde(default = "default_settle_tolerance")]
    pub settle_tolerance: f64,
}

fn default_settle_tolerance() -> f64 {
    5.0
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            ticks: 1000,
            target: 500.0,
            disturbance: 0.0,
            disturbance_start: 0,
            settle_tolerance: default_settle_tolerance(),
        }
    }
}

impl ScenarioConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks == 0 {
            return Err(ConfigError::ValidationError(
                "scenario.ticks must be > 0".to_string(),
            ));
        }
        if !self.target.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "scenario.target must be finite, got {}",
                self.target
            )));
        }
        if !self.disturbance.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "scenario.disturbance must be finite, got {}",
                self.disturbance
            )));
        }
        if !(self.settle_tolerance.is_finite() && self.settle_tolerance > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "scenario.settle_tolerance must be > 0, got {}",
                self.settle_tolerance
            )));
        }
        Ok(())
    }
}

/// Complete simulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    pub shared: SharedConfig,
    pub controller: LadrcParameters,
    pub plant: PlantParameters,
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl Default for SimConfig {
    /// The reference demonstration: step to 500 on a 0.1 kg plant whose gain
    /// is ten times the controller's `b0` estimate.
    fn default() -> Self {
        Self {
            shared: SharedConfig {
                log_level: LogLevel::Info,
                service_name: "ladrc-sim".to_string(),
            },
            controller: LadrcParameters::new(30.0, 1.0, 120.0, 0.005, 100.0)
                .with_out_max(1000.0),
            plant: PlantParameters::new(0.1, 0.1, 1000.0),
            scenario: ScenarioConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load and validate a simulator config file.
    pub fn load_validated(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate an in-memory TOML document.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config = Self::load_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Semantic validation across all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        self.controller
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("controller: {e}")))?;
        self.plant
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("plant: {e}")))?;
        self.scenario.validate()
    }
}
