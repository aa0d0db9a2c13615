//! GPS Command-Line Sandbox
//!
//! Parameter source for the scenario cost model: flags and config files in,
//! a table, the raw result, or a Chart.js document out.
//!
//! # Core Concepts
//!
//! - [`SandboxConfig`]: defaults, file values and flag overrides
//! - [`prepare_parameters`]: clamp to 0 (or reject with `--strict`)
//! - [`run`]: evaluate and render in the configured [`OutputFormat`]

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod cli;
mod config;
mod error;
mod run;

// Re-exports
pub use config::{OutputConfig, OutputFormat, Overrides, SandboxConfig, DEFAULT_MAX_FEATURES};
pub use error::{ConfigError, SandboxError};
pub use run::{evaluate_with, prepare_parameters, render, run};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
