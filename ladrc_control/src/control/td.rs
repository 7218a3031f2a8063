//! Tracking differentiator (TD).
//!
//! Turns a possibly discontinuous target into a smooth reference `v1` and
//! its rate `v2`, so a setpoint step does not hit the control law as a
//! derivative spike.
//!
//! Algorithm (discrete `fhan`, fastest-control synthesis):
//! ```text
//! d  = r × h
//! y  = v1 - target + v2 × h
//! a0 = sqrt(d² + 8 × r × |y|)
//! a  = v2 + sign(y) × (a0 - d) / 2
//! fh = -r × (a / d) - r × sign(a)
//! v1 += v2 × h
//! v2 += fh × h
//! ```
//!
//! `d > 0` is guaranteed by the parameter invariants (`r > 0`, `h > 0`)
//! checked at construction.

use ladrc_common::control::{LadrcParameters, TdMode};

use super::state::LadrcState;

/// Sign with the zero tie-break resolved to `-1`.
///
/// `x > 0 → +1`, everything else (including `±0` and NaN) `→ -1`.
/// Not `f64::signum`: that maps `+0` to `+1`.
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { -1.0 }
}

/// Nonlinear `fhan` acceleration command for the current tick.
#[inline]
pub fn fhan(v1: f64, v2: f64, target: f64, r: f64, h: f64) -> f64 {
    let d = r * h;
    let y = v1 - target + v2 * h;

    let a0 = (d * d + 8.0 * r * y.abs()).sqrt();
    let a = v2 + sign(y) * (a0 - d) / 2.0;

    -r * (a / d) - r * sign(a)
}

/// Linear, critically damped acceleration command (double pole at `-r`).
#[inline]
pub fn linear(v1: f64, v2: f64, target: f64, r: f64) -> f64 {
    -r * r * (v1 - target) - 2.0 * r * v2
}

/// Advance `v1`, `v2` by one tick toward `target`.
///
/// Must run before the observer and the control law of the same tick.
#[inline]
pub fn track(state: &mut LadrcState, params: &LadrcParameters, target: f64) {
    let fh = match params.td_mode {
        TdMode::Fhan => fhan(state.v1, state.v2, target, params.r, params.h),
        TdMode::Linear => linear(state.v1, state.v2, target, params.r),
    };

    state.v1 += state.v2 * params.h;
    state.v2 += fh * params.h;
}

// ─── Tests ──────────────────────────────────────────────────────────
