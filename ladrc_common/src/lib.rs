//! LADRC Common Library
//!
//! Shared parameter types and configuration loading utilities for all
//! LADRC workspace crates.
//!
//! # Module Structure
//!
//! - [`control`] - Controller parameters, parameter validation, fault flags
//! - [`plant`] - Point-mass plant parameters
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience

pub mod config;
pub mod control;
pub mod plant;
pub mod prelude;
