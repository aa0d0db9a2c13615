//! Sandbox configuration
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional TOML or YAML file, and command-line flags ([`Overrides`]).
//!
//! ```toml
//! [parameters]
//! feature_count = 8
//! feature_cost_growth_pct = 25
//!
//! [output]
//! format = "chart"
//! title = "Billing rewrite"
//! ```

use crate::error::ConfigError;
use gps_chart::DEFAULT_TITLE;
use gps_model::ModelParameters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default ceiling on `feature_count`
pub const DEFAULT_MAX_FEATURES: usize = 1000;

/// Full sandbox configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandboxConfig {
    /// Model inputs
    pub parameters: ModelParameters,
    /// Rendering and input handling
    pub output: OutputConfig,
}

impl SandboxConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a `.toml`, `.yaml` or `.yml` file
    ///
    /// # Errors
    /// Returns [`ConfigError`] if the file cannot be read, has an unsupported
    /// extension, or does not parse.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let kind = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let text = || {
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let config = match kind.as_deref() {
            Some("toml") => toml::from_str(&text()?).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
            Some("yaml" | "yml") => {
                serde_yaml::from_str(&text()?).map_err(|source| ConfigError::Yaml {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// With model parameters
    #[inline]
    #[must_use]
    pub fn with_parameters(mut self, parameters: ModelParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Apply command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        let p = &mut self.parameters;
        if let Some(v) = overrides.feature_count {
            p.feature_count = v;
        }
        if let Some(v) = overrides.base_feature_cost {
            p.base_feature_cost = v;
        }
        if let Some(v) = overrides.base_refactor_cost {
            p.base_refactor_cost = v;
        }
        if let Some(v) = overrides.feature_cost_growth_pct {
            p.feature_cost_growth_pct = v;
        }
        if let Some(v) = overrides.refactor_cost_growth_pct {
            p.refactor_cost_growth_pct = v;
        }

        let o = &mut self.output;
        if let Some(format) = overrides.format {
            o.format = format;
        }
        if let Some(precision) = overrides.precision {
            o.precision = precision;
        }
        if let Some(title) = &overrides.title {
            o.title.clone_from(title);
        }
        o.strict |= overrides.strict;
        self
    }
}

/// Rendering and input handling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// What to print
    pub format: OutputFormat,
    /// Decimal places in the table
    pub precision: usize,
    /// Chart title
    pub title: String,
    /// Largest accepted `feature_count`
    pub max_features: usize,
    /// Reject out-of-domain input instead of clamping it
    pub strict: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 2,
            title: DEFAULT_TITLE.to_string(),
            max_features: DEFAULT_MAX_FEATURES,
            strict: false,
        }
    }
}

/// Output selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table of cumulative costs
    #[default]
    Table,
    /// Raw scenario result as JSON
    Json,
    /// Chart.js line-chart document
    Chart,
}

impl OutputFormat {
    /// All format names, for help text
    pub const NAMES: [&'static str; 3] = ["table", "json", "chart"];

    /// Format name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
            Self::Chart => "chart",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "chart" => Ok(Self::Chart),
            _ => Err(ConfigError::UnknownOutputFormat(s.to_string())),
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// `--features`
    pub feature_count: Option<i64>,
    /// `--feature-cost`
    pub base_feature_cost: Option<f64>,
    /// `--refactor-cost`
    pub base_refactor_cost: Option<f64>,
    /// `--feature-growth`
    pub feature_cost_growth_pct: Option<f64>,
    /// `--refactor-growth`
    pub refactor_cost_growth_pct: Option<f64>,
    /// `--format`
    pub format: Option<OutputFormat>,
    /// `--precision`
    pub precision: Option<usize>,
    /// `--title`
    pub title: Option<String>,
    /// `--strict`
    pub strict: bool,
}
