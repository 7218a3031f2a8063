//! Plant model parameters for the point-mass simulator.
//!
//! The plant is a damped point mass `m·ẍ + c·ẋ = sat(u)` with a symmetric
//! actuator limit.

use serde::{Deserialize, Serialize};

use crate::control::ParameterError;

/// Damped point mass with actuator saturation.
///
/// # TOML Example
///
/// ```toml
/// [plant]
/// mass = 0.1
/// damping = 0.1
/// limit = 1000.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlantParameters {
    /// Mass / inertia, `> 0`.
    pub mass: f64,
    /// Viscous damping coefficient, `>= 0`.
    pub damping: f64,
    /// Actuator limit, `> 0`. Inputs are clamped to `±limit`.
    pub limit: f64,
}

impl PlantParameters {
    pub const fn new(mass: f64, damping: f64, limit: f64) -> Self {
        Self {
            mass,
            damping,
            limit,
        }
    }

    /// Check the physical parameters.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ParameterError {
                name: "mass",
                value: self.mass,
                constraint: "mass > 0",
            });
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ParameterError {
                name: "damping",
                value: self.damping,
                constraint: "damping >= 0",
            });
        }
        if !(self.limit.is_finite() && self.limit > 0.0) {
            return Err(ParameterError {
                name: "limit",
                value: self.limit,
                constraint: "limit > 0",
            });
        }
        Ok(())
    }
}
