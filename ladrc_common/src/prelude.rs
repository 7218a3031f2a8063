//! Prelude module for common re-exports.
//!
//! ```rust
//! use ladrc_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, SharedConfig};

// ─── Controller ─────────────────────────────────────────────────────
pub use crate::control::{LadrcParameters, ParameterError, TdMode};

// ─── Plant ──────────────────────────────────────────────────────────
pub use crate::plant::PlantParameters;
