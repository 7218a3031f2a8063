//! # LADRC Simulator Library
//!
//! Closed-loop test bench for the LADRC controller. Not part of the control
//! core: it supplies a measured output so the controller can be exercised
//! without hardware.
//!
//! # Module Structure
//!
//! - [`physics`] - Damped point-mass plant with actuator saturation
//! - [`scenario`] - Controller ↔ plant loop, samples and summary statistics
//! - [`config`] - TOML configuration for the simulator binary
//! - [`error`] - Simulator error type

pub mod config;
pub mod error;
pub mod physics;
pub mod scenario;

pub use error::SimError;
