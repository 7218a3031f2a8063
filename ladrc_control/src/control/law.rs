//! PD control law with disturbance compensation.
//!
//! ```text
//! kp = wc²
//! kd = 2 × wc
//! e1 = v1 - x1
//! e2 = 0 - x2
//! u0 = kp × e1 + kd × e2
//! u  = (u0 - x3) / b0
//! ```
//!
//! The rate error is taken against a zero target rate, not against the
//! differentiator rate `v2`.
//!
//! When `out_max > 0` the stored `u` is clamped to `±out_max`; the observer
//! then sees the saturated command on the next tick. `u0` is never clamped.

use ladrc_common::control::LadrcParameters;

use super::state::LadrcState;

/// Compute this tick's command from TD and observer state.
///
/// Requires [`td::track`](super::td::track) and
/// [`leso::observe`](super::leso::observe) to have run this tick.
/// `b0 != 0` is guaranteed by construction.
#[inline]
pub fn compute(state: &mut LadrcState, params: &LadrcParameters) -> f64 {
    state.kp = params.wc * params.wc;
    state.kd = 2.0 * params.wc;

    let e1 = state.v1 - state.x1;
    let e2 = 0.0 - state.x2;
    state.u0 = state.kp * e1 + state.kd * e2;

    let u = (state.u0 - state.x3) / params.b0;
    state.u = if params.out_max > 0.0 {
        u.clamp(-params.out_max, params.out_max)
    } else {
        u
    };

    state.u
}

// ─── Tests ──────────────────────────────────────────────────────────
