//! LADRC tuning parameters.
//!
//! Bandwidth parameterization: the whole controller is tuned with five
//! scalars. Each is checked once at construction; the per-tick path performs
//! no parameter checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A tuning parameter outside its admissible range.
///
/// Non-finite values (NaN, ±Inf) are rejected for every parameter.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{name} = {value} violates {constraint}")]
pub struct ParameterError {
    /// Parameter name as it appears in configuration.
    pub name: &'static str,
    /// Offending value.
    pub value: f64,
    /// Human-readable constraint, e.g. `"h > 0"`.
    pub constraint: &'static str,
}

/// Tracking differentiator law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TdMode {
    /// Nonlinear fastest-control-synthesis (`fhan`) law. Acceleration of the
    /// tracked reference is bounded by `r`.
    #[default]
    Fhan,
    /// Critically damped linear law `fh = -r²(v1 - target) - 2r·v2`.
    Linear,
}

/// LADRC configuration.
///
/// # TOML Example
///
/// ```toml
/// [controller]
/// wc = 30.0
/// b0 = 1.0
/// w0 = 120.0
/// h = 0.005
/// r = 100.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LadrcParameters {
    /// Closed-loop (controller) bandwidth [rad/s], `>= 0`.
    pub wc: f64,
    /// Control-gain estimate, `!= 0`.
    pub b0: f64,
    /// Observer bandwidth [rad/s], `>= 0`.
    pub w0: f64,
    /// Sample period [s], `> 0`.
    pub h: f64,
    /// Tracking differentiator speed factor, `> 0`.
    pub r: f64,
    /// Saturation applied to the stored command `u` (0 = disabled).
    #[serde(default)]
    pub out_max: f64,
    /// Tracking differentiator law.
    #[serde(default)]
    pub td_mode: TdMode,
}

impl LadrcParameters {
    /// Parameters with saturation disabled and the `fhan` differentiator.
    pub const fn new(wc: f64, b0: f64, w0: f64, h: f64, r: f64) -> Self {
        Self {
            wc,
            b0,
            w0,
            h,
            r,
            out_max: 0.0,
            td_mode: TdMode::Fhan,
        }
    }

    /// Builder: clamp the stored command to `±out_max`.
    pub const fn with_out_max(mut self, out_max: f64) -> Self {
        self.out_max = out_max;
        self
    }

    /// Builder: select the tracking differentiator law.
    pub const fn with_td_mode(mut self, td_mode: TdMode) -> Self {
        self.td_mode = td_mode;
        self
    }

    /// Check every parameter against its admissible range.
    ///
    /// Reports the first violation in the order `h, r, r*h, b0, w0, wc, out_max`.
    /// Derived quantities the tick divides by or raises to a power are checked
    /// too: `r*h` must not underflow to zero, `r²` and the bandwidth cubes
    /// must stay finite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check("h", self.h, self.h > 0.0, "h > 0")?;
        check("r", self.r, self.r > 0.0 && (self.r * self.r).is_finite(), "r > 0, r² finite")?;
        let d = self.r * self.h;
        check("r*h", d, d > 0.0, "r*h > 0")?;
        check("b0", self.b0, self.b0 != 0.0, "b0 != 0")?;
        check_bandwidth("w0", self.w0)?;
        check_bandwidth("wc", self.wc)?;
        check("out_max", self.out_max, self.out_max >= 0.0, "out_max >= 0")
    }
}

/// Range check for a bandwidth parameter (`wc` or `w0`).
///
/// Gains go up to the cube of the bandwidth (`l3 = w0³`), so that cube must
/// be finite as well.
pub fn check_bandwidth(name: &'static str, value: f64) -> Result<(), ParameterError> {
    check(
        name,
        value,
        value >= 0.0 && (value * value * value).is_finite(),
        "bandwidth >= 0, bandwidth³ finite",
    )
}

fn check(
    name: &'static str,
    value: f64,
    admissible: bool,
    constraint: &'static str,
) -> Result<(), ParameterError> {
    if value.is_finite() && admissible {
        Ok(())
    } else {
        Err(ParameterError {
            name,
            value,
            constraint,
        })
    }
}
