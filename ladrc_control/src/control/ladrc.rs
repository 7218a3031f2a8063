//! LADRC orchestration.
//!
//! Owns the parameters, cached observer gains and the state record, and runs
//! the three stages in fixed order once per tick:
//!
//! 1. [`td::track`]: reference smoothing
//! 2. [`leso::observe`]: estimation, using the command left by the previous tick
//! 3. [`law::compute`]: new command, stored for the next tick's observer
//!
//! The stages run on a copy of the state that is committed only if every
//! field is finite. A non-finite result latches the controller as faulted.

use ladrc_common::control::{LadrcParameters, params::check_bandwidth};
use tracing::{debug, warn};

use super::law;
use super::leso::{self, ObserverGains};
use super::state::LadrcState;
use super::td;
use crate::error::LadrcError;

/// One LADRC loop instance.
///
/// Not shared: each control loop owns its own `Ladrc`. Independent instances
/// share no state.
#[derive(Debug, Clone, PartialEq)]
pub struct Ladrc {
    params: LadrcParameters,
    gains: ObserverGains,
    state: LadrcState,
    faulted: bool,
}

static_assertions::assert_impl_all!(Ladrc: Send, Sync, Clone);

impl Ladrc {
    /// Validate `params` and build a controller with zeroed state.
    ///
    /// # Errors
    /// [`LadrcError::Configuration`] if `h <= 0`, `r <= 0`, `r*h` underflows
    /// to zero, `b0 == 0`, `w0 < 0`, `wc < 0`, `out_max < 0`, a bandwidth
    /// cube overflows, or any value is non-finite.
    pub fn new(params: LadrcParameters) -> Result<Self, LadrcError> {
        params.validate()?;
        Ok(Self {
            params,
            gains: ObserverGains::from_bandwidth(params.w0),
            state: LadrcState::default(),
            faulted: false,
        })
    }

    /// Run one control tick and return the new command.
    ///
    /// Call at the fixed period `h`; the discretization assumes it.
    ///
    /// # Errors
    /// - [`LadrcError::NumericFault`] if the tick produced NaN/Inf. State is
    ///   left at the last good tick and the controller latches faulted.
    /// - [`LadrcError::Faulted`] on every call after a fault until [`reset`](Self::reset).
    #[inline]
    pub fn update(&mut self, target: f64, measured_output: f64) -> Result<f64, LadrcError> {
        if self.faulted {
            return Err(LadrcError::Faulted);
        }

        let mut next = self.state;
        td::track(&mut next, &self.params, target);
        leso::observe(&mut next, &self.gains, &self.params, measured_output);
        let u = law::compute(&mut next, &self.params);

        let fields = next.non_finite_fields();
        if !fields.is_empty() {
            self.faulted = true;
            warn!(
                ?fields,
                observer = fields.touches_observer(),
                target,
                measured_output,
                "LADRC numeric fault, controller latched"
            );
            return Err(LadrcError::NumericFault { fields });
        }

        self.state = next;
        Ok(u)
    }

    /// Zero the dynamic state and clear a latched fault. Configuration is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        self.faulted = false;
        debug!("LADRC state reset");
    }

    /// Change the observer bandwidth and recompute `l1, l2, l3`.
    ///
    /// Estimates are kept; the new gains apply from the next tick.
    pub fn set_observer_bandwidth(&mut self, w0: f64) -> Result<(), LadrcError> {
        check_bandwidth("w0", w0)?;
        self.params.w0 = w0;
        self.gains = ObserverGains::from_bandwidth(w0);
        debug!(w0, "LADRC observer bandwidth changed");
        Ok(())
    }

    /// Change the closed-loop bandwidth. `kp`/`kd` follow on the next tick.
    pub fn set_controller_bandwidth(&mut self, wc: f64) -> Result<(), LadrcError> {
        check_bandwidth("wc", wc)?;
        self.params.wc = wc;
        debug!(wc, "LADRC controller bandwidth changed");
        Ok(())
    }

    #[inline]
    pub fn params(&self) -> &LadrcParameters {
        &self.params
    }

    #[inline]
    pub fn gains(&self) -> &ObserverGains {
        &self.gains
    }

    /// Snapshot of the last committed state.
    #[inline]
    pub fn state(&self) -> &LadrcState {
        &self.state
    }

    /// Last committed command `u`.
    #[inline]
    pub fn output(&self) -> f64 {
        self.state.u
    }

    #[inline]
    pub fn is_faulted(&self) -> bool {
        self.faulted
    }
}

// ─── Tests ──────────────────────────────────────────────────────────
