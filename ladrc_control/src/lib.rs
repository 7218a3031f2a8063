//! # LADRC Control Library
//!
//! Linear Active Disturbance Rejection Controller for fixed-step loops.
//! Drives a measured output toward a setpoint while estimating and
//! cancelling the lumped disturbance acting on the plant.
//!
//! ## Pipeline (once per tick)
//!
//! 1. **Tracking differentiator**: smoothed reference `v1` and rate `v2`
//! 2. **Extended state observer**: estimates `x1`, `x2` and total disturbance `x3`,
//!    driven by the command issued on the *previous* tick
//! 3. **Control law**: PD on the observer estimates, minus `x3 / b0`
//!
//! ## Zero-Allocation Update
//!
//! [`control::ladrc::Ladrc::update`] is pure arithmetic over a flat `Copy`
//! state record: no heap, no I/O, no logging on the success path.

pub mod control;
pub mod error;

pub use control::ladrc::Ladrc;
pub use error::LadrcError;
