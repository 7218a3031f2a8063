//! Linear extended state observer (LESO).
//!
//! Third-order Luenberger observer for a second-order plant, extended with a
//! state `x3` that absorbs everything the nominal model `ÿ = b0·u` misses:
//! unmodeled dynamics, gain error and external disturbance.
//!
//! Gains come from placing all three poles at `-w0`:
//! ```text
//! s³ + l1·s² + l2·s + l3 = (s + w0)³  →  l1 = 3·w0, l2 = 3·w0², l3 = w0³
//! ```
//!
//! Update (explicit Euler):
//! ```text
//! err = x1 - y
//! x1 += (x2 - l1 × err) × h
//! x2 += (x3 - l2 × err + b0 × u) × h
//! x3 += -l3 × err × h
//! ```
//!
//! `u` is the command stored by the control law on the *previous* tick. The
//! observer runs before this tick's command exists.

use ladrc_common::control::LadrcParameters;

use super::state::LadrcState;

/// Observer gains derived from the observer bandwidth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObserverGains {
    pub l1: f64,
    pub l2: f64,
    pub l3: f64,
}

impl ObserverGains {
    /// Triple pole at `-w0`.
    #[inline]
    pub fn from_bandwidth(w0: f64) -> Self {
        Self {
            l1: 3.0 * w0,
            l2: 3.0 * w0 * w0,
            l3: w0 * w0 * w0,
        }
    }
}

/// Advance `x1`, `x2`, `x3` by one tick from the measured plant output.
///
/// Reads `state.u` as last tick's command; writes only the observer fields.
#[inline]
pub fn observe(
    state: &mut LadrcState,
    gains: &ObserverGains,
    params: &LadrcParameters,
    measured_output: f64,
) {
    let h = params.h;
    let err = state.x1 - measured_output;

    state.x1 += (state.x2 - gains.l1 * err) * h;
    state.x2 += (state.x3 - gains.l2 * err + params.b0 * state.u) * h;
    state.x3 += -gains.l3 * err * h;
}

// ─── Tests ──────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 0.005;

    fn params() -> LadrcParameters {
        LadrcParameters::new(30.0, 1.0, 120.0, H, 100.0)
    }

    #[test]
    fn gains_place_triple_pole() {
        let g = ObserverGains::from_bandwidth(120.0);
        assert_eq!(g.l1, 360.0);
        assert_eq!(g.l2, 43_200.0);
        assert_eq!(g.l3, 1_728_000.0);
    }

    #[test]
    fn zero_bandwidth_gives_zero_gains() {
        assert_eq!(ObserverGains::from_bandwidth(0.0), ObserverGains::default());
    }

    #[test]
    fn consumes_previous_command() {
        let p = LadrcParameters {
            b0: 1.5,
            ..params()
        };
        let g = ObserverGains::from_bandwidth(p.w0);
        let mut s = LadrcState {
            u: 2.0,
            ..Default::default()
        };
        observe(&mut s, &g, &p, 0.0);
        assert_eq!(s.x1, 0.0);
        assert_eq!(s.x2, 1.5 * 2.0 * H);
        assert_eq!(s.x3, 0.0);
        // Command is read, not written.
        assert_eq!(s.u, 2.0);
    }

    #[test]
    fn first_tick_from_rest() {
        let p = params();
        let g = ObserverGains::from_bandwidth(p.w0);
        let mut s = LadrcState::default();
        observe(&mut s, &g, &p, 1.0);
        // err = -1 → x1 = l1·h, x2 = l2·h, x3 = l3·h
        assert!((s.x1 - 360.0 * H).abs() < 1e-12);
        assert!((s.x2 - 43_200.0 * H).abs() < 1e-9);
        assert!((s.x3 - 1_728_000.0 * H).abs() < 1e-6);
    }

    #[test]
    fn converges_on_constant_output() {
        let p = params();
        let g = ObserverGains::from_bandwidth(p.w0);
        let mut s = LadrcState::default();
        for _ in 0..500 {
            observe(&mut s, &g, &p, 5.0);
        }
        assert!((s.x1 - 5.0).abs() < 1e-6, "x1 = {}", s.x1);
        assert!(s.x2.abs() < 1e-6, "x2 = {}", s.x2);
        assert!(s.x3.abs() < 1e-6, "x3 = {}", s.x3);
    }

    #[test]
    fn extended_state_recovers_unmodeled_acceleration() {
        // Plant accelerates at A with zero command: all of it is "disturbance".
        const A: f64 = 4.0;
        let p = params();
        let g = ObserverGains::from_bandwidth(p.w0);
        let mut s = LadrcState::default();
        for k in 0..2000 {
            let t = k as f64 * H;
            observe(&mut s, &g, &p, 0.5 * A * t * t);
        }
        assert!((s.x3 - A).abs() < 1e-3, "x3 = {}", s.x3);
    }

    #[test]
    fn zero_bandwidth_ignores_measurement() {
        let p = LadrcParameters {
            w0: 0.0,
            ..params()
        };
        let g = ObserverGains::from_bandwidth(p.w0);
        let mut s = LadrcState::default();
        observe(&mut s, &g, &p, 100.0);
        assert_eq!((s.x1, s.x2, s.x3), (0.0, 0.0, 0.0));
    }
}
