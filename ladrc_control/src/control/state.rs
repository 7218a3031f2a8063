//! Dynamic state of one LADRC instance.
//!
//! Flat `Copy` record; owned exclusively by its [`Ladrc`](super::ladrc::Ladrc).

use ladrc_common::control::StateFields;
use static_assertions::const_assert_eq;

/// Differentiator, observer and control-law state, 9 × f64 = 72 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct LadrcState {
    /// Tracked reference.
    pub v1: f64,
    /// Tracked reference rate.
    pub v2: f64,
    /// Estimated output.
    pub x1: f64,
    /// Estimated output rate.
    pub x2: f64,
    /// Estimated total disturbance.
    pub x3: f64,
    /// Proportional gain `wc²` (written by the control law).
    pub kp: f64,
    /// Derivative gain `2·wc` (written by the control law).
    pub kd: f64,
    /// Nominal PD command before disturbance compensation.
    pub u0: f64,
    /// Final command; consumed by the observer on the next tick.
    pub u: f64,
}

const_assert_eq!(core::mem::size_of::<LadrcState>(), 72);

/// Field order used by [`LadrcState::to_array`].
const FIELD_FLAGS: [StateFields; 9] = [
    StateFields::V1,
    StateFields::V2,
    StateFields::X1,
    StateFields::X2,
    StateFields::X3,
    StateFields::KP,
    StateFields::KD,
    StateFields::U0,
    StateFields::U,
];

impl LadrcState {
    /// Reset all fields to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fields in declaration order `v1 v2 x1 x2 x3 kp kd u0 u`.
    #[inline]
    pub const fn to_array(&self) -> [f64; 9] {
        [
            self.v1, self.v2, self.x1, self.x2, self.x3, self.kp, self.kd, self.u0, self.u,
        ]
    }

    /// Flags for every field holding NaN or ±Inf. Empty when all finite.
    #[inline]
    pub fn non_finite_fields(&self) -> StateFields {
        let mut fields = StateFields::empty();
        for (value, flag) in self.to_array().iter().zip(FIELD_FLAGS) {
            if !value.is_finite() {
                fields |= flag;
            }
        }
        fields
    }
}
