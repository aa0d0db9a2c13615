//! Error types for parameter validation
//!
//! The cost model itself never fails. These errors are produced only by
//! [`ModelParameters::validate`](crate::ModelParameters::validate), which
//! callers run when they want to restrict input to the model's domain.

use std::fmt;

/// Parameter validation error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// Field is below its minimum of zero
    #[error("{field} must be at least 0, got {value}")]
    Negative {
        /// Offending field
        field: ParameterField,
        /// Value supplied
        value: f64,
    },

    /// Field is NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Offending field
        field: ParameterField,
    },
}

impl ParameterError {
    /// Field that failed validation
    #[inline]
    #[must_use]
    pub fn field(&self) -> ParameterField {
        match self {
            Self::Negative { field, .. } | Self::NonFinite { field } => *field,
        }
    }
}

/// Named input field of [`ModelParameters`](crate::ModelParameters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterField {
    /// Number of features
    FeatureCount,
    /// Baseline cost of one feature
    BaseFeatureCost,
    /// Cost of the refactor event
    BaseRefactorCost,
    /// Per-feature growth percentage
    FeatureCostGrowthPct,
    /// Refactor cost growth percentage
    RefactorCostGrowthPct,
}

impl ParameterField {
    /// Field name as it appears in config files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FeatureCount => "feature_count",
            Self::BaseFeatureCost => "base_feature_cost",
            Self::BaseRefactorCost => "base_refactor_cost",
            Self::FeatureCostGrowthPct => "feature_cost_growth_pct",
            Self::RefactorCostGrowthPct => "refactor_cost_growth_pct",
        }
    }
}

impl fmt::Display for ParameterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_message_names_field() {
        let err = ParameterError::Negative {
            field: ParameterField::BaseRefactorCost,
            value: -2.5,
        };
        assert_eq!(err.to_string(), "base_refactor_cost must be at least 0, got -2.5");
        assert_eq!(err.field(), ParameterField::BaseRefactorCost);
    }

    #[test]
    fn non_finite_message() {
        let err = ParameterError::NonFinite {
            field: ParameterField::FeatureCostGrowthPct,
        };
        assert_eq!(err.to_string(), "feature_cost_growth_pct must be a finite number");
    }
}
