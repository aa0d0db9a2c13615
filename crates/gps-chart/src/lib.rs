//! GPS Chart Rendering
//!
//! Presentation for [`gps_model::ScenarioResult`]: one line per strategy
//! against the shared feature labels.
//!
//! # Core Concepts
//!
//! - [`series_label`]: legend text per strategy
//! - [`strategy_color`]: fixed baseline color plus a hue ramp for refactor strategies
//! - [`LineChart`]: Chart.js-compatible document
//! - [`render_table`]: terminal table of cumulative costs
//!
//! # Example
//!
//! ```rust
//! use gps_chart::{ChartConfig, LineChart};
//! use gps_model::{evaluate, ModelParameters};
//!
//! let result = evaluate(&ModelParameters::default());
//! let chart = LineChart::from_result(&result, &ChartConfig::default());
//! assert_eq!(chart.data.datasets.len(), 5);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod chart;
mod color;
mod error;
mod label;
mod table;

// Re-exports
pub use chart::{
    ChartConfig, ChartData, ChartOptions, Dataset, Legend, LegendPosition, LineChart, Plugins,
    Title, DEFAULT_TITLE,
};
pub use color::{
    strategy_color, Rgb, SeriesColors, FILL_ALPHA, NO_REFACTOR_COLOR, RAMP_LIGHTNESS,
    RAMP_SATURATION,
};
pub use error::ChartError;
pub use label::{ordinal, series_label};
pub use table::{render_table, TableConfig};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
