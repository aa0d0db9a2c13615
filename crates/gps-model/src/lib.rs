//! GPS Scenario Cost Model
//!
//! Cumulative delivery cost of a feature sequence under every refactor-timing
//! strategy, so "never refactor" can be compared against "refactor right
//! before feature K" for each K.
//!
//! # Core Concepts
//!
//! - [`ModelParameters`]: the five numeric inputs
//! - [`Strategy`]: when, if ever, the single refactor happens
//! - [`CostModel`]: trait for models producing one curve per strategy
//! - [`ScenarioCostModel`]: the compounding-growth model
//! - [`ScenarioResult`]: shared feature labels plus one [`ScenarioSeries`] per strategy
//!
//! # Example
//!
//! ```rust
//! use gps_model::{evaluate, ModelParameters, Strategy};
//!
//! let params = ModelParameters::new().with_feature_count(3);
//! let result = evaluate(&params);
//!
//! assert_eq!(result.labels.len(), 3);
//! assert_eq!(result.series[0].strategy, Strategy::NoRefactor);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod error;
pub mod growth;
mod model;
mod params;
mod strategy;

// Re-exports
pub use error::{ParameterError, ParameterField};
pub use model::{evaluate, incremental_cost, CostModel, ScenarioCostModel, ScenarioResult, ScenarioSeries};
pub use params::ModelParameters;
pub use strategy::{Strategy, StrategyIter};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
