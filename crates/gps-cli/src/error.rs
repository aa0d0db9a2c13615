//! Error types for the command-line sandbox
//!
//! Covers:
//! - Config file loading and parsing
//! - Parameter rejection in strict mode
//! - Output size limits
//! - Costs that overflow before serialization
//! - Rendering failures

use gps_chart::ChartError;
use gps_model::{ParameterError, Strategy};
use std::path::PathBuf;

/// Top-level sandbox error
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// Config file could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Parameters rejected in strict mode
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),

    /// Feature count above the configured ceiling
    #[error("feature count {requested} exceeds limit of {limit}")]
    TooManyFeatures {
        /// Requested count
        requested: i64,
        /// Configured `max_features`
        limit: usize,
    },

    /// A cost overflowed to infinity (or became NaN) and cannot be encoded
    #[error("cost for {strategy} is not finite at feature {feature}; lower the feature count or growth rates")]
    NonFiniteCost {
        /// Strategy whose curve overflowed
        strategy: Strategy,
        /// 1-indexed feature
        feature: usize,
    },

    /// Chart rendering failed
    #[error("render failed: {0}")]
    Chart(#[from] ChartError),

    /// JSON output failed
    #[error("json output failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Config file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// TOML parse failure
    #[error("invalid TOML in {}: {source}", .path.display())]
    Toml {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: toml::de::Error,
    },

    /// YAML parse failure
    #[error("invalid YAML in {}: {source}", .path.display())]
    Yaml {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_yaml::Error,
    },

    /// Extension is not `.toml`, `.yaml` or `.yml`
    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Unknown output format name
    #[error("unknown output format: {0}")]
    UnknownOutputFormat(String),
}

impl SandboxError {
    /// Process exit code for this error
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => 78,
            Self::InvalidParameters(_)
            | Self::TooManyFeatures { .. }
            | Self::NonFiniteCost { .. } => 65,
            Self::Chart(_) | Self::Json(_) => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gps_model::ParameterField;

    #[test]
    fn too_many_features_message() {
        let err = SandboxError::TooManyFeatures {
            requested: 5000,
            limit: 1000,
        };
        assert_eq!(err.to_string(), "feature count 5000 exceeds limit of 1000");
        assert_eq!(err.exit_code(), 65);
    }

    #[test]
    fn parameter_error_converts() {
        let err: SandboxError = ParameterError::NonFinite {
            field: ParameterField::BaseFeatureCost,
        }
        .into();
        assert!(matches!(err, SandboxError::InvalidParameters(_)));
        assert_eq!(
            err.to_string(),
            "invalid parameters: base_feature_cost must be a finite number"
        );
    }

    #[test]
    fn non_finite_cost_is_a_data_error() {
        let err = SandboxError::NonFiniteCost {
            strategy: Strategy::NoRefactor,
            feature: 647,
        };
        assert_eq!(err.exit_code(), 65);
        assert!(err.to_string().starts_with("cost for no refactor is not finite at feature 647"));
    }

    #[test]
    fn config_errors_use_config_exit_code() {
        let err: SandboxError = ConfigError::UnsupportedFormat(PathBuf::from("a.ini")).into();
        assert_eq!(err.exit_code(), 78);
    }
}
