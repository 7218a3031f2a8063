//! Damped point-mass plant with actuator saturation.
//!
//! Continuous dynamics `m·ẍ + c·ẋ = sat(u) + f_ext`, discretized with
//! explicit Euler in the order:
//! ```text
//! a = (clamp(u, ±limit) + f_ext - c × v) / m
//! v += a × dt
//! x += v × dt      (uses the updated velocity)
//! ```
//! The returned position is the plant's measured output.

use ladrc_common::plant::PlantParameters;
use tracing::trace;

use crate::error::SimError;

/// Point-mass plant state.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMassPlant {
    params: PlantParameters,
    position: f64,
    velocity: f64,
    /// Actuator input actually applied on the last step (after clamping).
    last_applied: f64,
}

impl PointMassPlant {
    /// Create a plant at rest.
    pub fn new(params: PlantParameters) -> Result<Self, SimError> {
        params.validate()?;
        Ok(Self {
            params,
            position: 0.0,
            velocity: 0.0,
            last_applied: 0.0,
        })
    }

    /// Step the plant with no external force.
    pub fn update(&mut self, control_input: f64, dt: f64) -> Result<f64, SimError> {
        self.update_with_disturbance(control_input, 0.0, dt)
    }

    /// Step the plant with an unmodeled force added after actuator saturation.
    ///
    /// The disturbance is not subject to the actuator limit.
    pub fn update_with_disturbance(
        &mut self,
        control_input: f64,
        disturbance: f64,
        dt: f64,
    ) -> Result<f64, SimError> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidTimeStep(dt));
        }

        let applied = control_input.clamp(-self.params.limit, self.params.limit);
        let acceleration =
            (applied + disturbance - self.params.damping * self.velocity) / self.params.mass;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
        self.last_applied = applied;

        trace!(
            applied,
            disturbance,
            position = self.position,
            velocity = self.velocity,
            "plant step"
        );

        Ok(self.position)
    }

    /// Return to rest at the origin.
    pub fn reset(&mut self) {
        self.position = 0.0;
        self.velocity = 0.0;
        self.last_applied = 0.0;
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn last_applied(&self) -> f64 {
        self.last_applied
    }

    #[inline]
    pub fn params(&self) -> &PlantParameters {
        &self.params
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
