//! Controller-facing shared types.
//!
//! - [`params`]: `LadrcParameters`, `TdMode` and `ParameterError`
//! - [`error`]: `StateFields` fault bitflags

pub mod error;
pub mod params;

pub use error::StateFields;
pub use params::{LadrcParameters, ParameterError, TdMode};
