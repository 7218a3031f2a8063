//! Physics simulation module.
//!
//! Plant models used to exercise the controller in closed loop. Simulation
//! only; nothing here drives real hardware.

pub mod plant;

pub use plant::PointMassPlant;
