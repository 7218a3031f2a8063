//! TOML configuration loading.
//!
//! Any `DeserializeOwned` type gets [`ConfigLoader`] for free. Parsing is
//! strict (`deny_unknown_fields` on every section type); range checks are a
//! separate `validate()` step owned by each config type.
//!
//! ```rust,no_run
//! use ladrc_common::config::{ConfigError, ConfigLoader};
//! use ladrc_common::control::LadrcParameters;
//! use std::path::Path;
//!
//! fn main() -> Result<(), ConfigError> {
//!     let params = LadrcParameters::load(Path::new("controller.toml"))?;
//!     params
//!         .validate()
//!         .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
//!     println!("observer bandwidth {}", params.w0);
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("config file not found")]
    FileNotFound,

    /// Unreadable file, malformed TOML, unknown or mistyped field.
    #[error("config parse error: {0}")]
    ParseError(String),

    /// Well-formed but out of range.
    #[error("invalid config: {0}")]
    ValidationError(String),
}

/// Logging verbosity, written lowercase in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, per-tick samples.
    Trace,
    /// Debug information useful during tuning.
    Debug,
    /// General information about application operation.
    #[default]
    Info,
    /// Warning messages (e.g. controller faults).
    Warn,
    /// Error messages for serious problems.
    Error,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_directive(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// `[shared]` section carried by every binary's config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SharedConfig {
    #[serde(default)]
    pub log_level: LogLevel,
    /// Appears in the startup log line.
    pub service_name: String,
}

impl SharedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.is_empty() {
            return Err(ConfigError::ValidationError(
                "shared.service_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Read and deserialize a TOML document.
///
/// A missing file maps to [`ConfigError::FileNotFound`]; every other read or
/// decode failure maps to [`ConfigError::ParseError`].
pub trait ConfigLoader: Sized + serde::de::DeserializeOwned {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::ParseError(e.to_string())
            }
        })?;

        Self::load_str(&content)
    }

    fn load_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl<T: serde::de::DeserializeOwned> ConfigLoader for T {}
