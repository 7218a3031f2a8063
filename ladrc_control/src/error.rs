//! Controller error type.
//!
//! Configuration errors are raised at construction or reconfiguration and
//! leave no controller behind. Numeric faults are raised by `update` and
//! latch the controller until it is reset.

use ladrc_common::control::{ParameterError, StateFields};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LadrcError {
    /// A tuning parameter is outside its admissible range.
    #[error("invalid configuration: {0}")]
    Configuration(#[from] ParameterError),

    /// The update produced non-finite values in the listed fields.
    #[error("numeric fault in state fields {fields:?}")]
    NumericFault { fields: StateFields },

    /// A previous update faulted; call `reset` before updating again.
    #[error("controller is faulted; reset required")]
    Faulted,
}
