//! Simulator error type.

use ladrc_common::prelude::{ConfigError, ParameterError};
use ladrc_control::LadrcError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SimError {
    /// Configuration file could not be loaded or failed validation.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Plant parameters out of range.
    #[error("invalid plant parameter: {0}")]
    Parameter(#[from] ParameterError),

    /// Controller construction or update failed.
    #[error("controller error: {0}")]
    Controller(#[from] LadrcError),

    /// Plant step requested with a non-positive or non-finite period.
    #[error("invalid time step: {0} s (must be > 0)")]
    InvalidTimeStep(f64),
}
