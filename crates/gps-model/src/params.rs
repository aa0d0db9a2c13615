//! Model input parameters

use crate::error::{ParameterError, ParameterField};
use serde::{Deserialize, Serialize};

/// Inputs to the scenario cost model
///
/// The model accepts any values here, including negative ones. Callers that
/// want the input restricted to its domain run [`validate`](Self::validate)
/// or [`clamped`](Self::clamped) first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelParameters {
    /// Number of features to plan for; `<= 0` yields an empty result
    pub feature_count: i64,
    /// Cost of one feature at the unrefactored baseline rate
    pub base_feature_cost: f64,
    /// Cost of the single refactor event
    pub base_refactor_cost: f64,
    /// Compounding per-feature growth before any refactor, in percent
    pub feature_cost_growth_pct: f64,
    /// Compounding growth of the refactor cost with delay, in percent
    pub refactor_cost_growth_pct: f64,
}

impl ModelParameters {
    /// Create default parameters
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With feature count
    #[inline]
    #[must_use]
    pub fn with_feature_count(mut self, count: i64) -> Self {
        self.feature_count = count;
        self
    }

    /// With base feature cost
    #[inline]
    #[must_use]
    pub fn with_base_feature_cost(mut self, cost: f64) -> Self {
        self.base_feature_cost = cost;
        self
    }

    /// With base refactor cost
    #[inline]
    #[must_use]
    pub fn with_base_refactor_cost(mut self, cost: f64) -> Self {
        self.base_refactor_cost = cost;
        self
    }

    /// With feature cost growth percentage
    #[inline]
    #[must_use]
    pub fn with_feature_cost_growth_pct(mut self, pct: f64) -> Self {
        self.feature_cost_growth_pct = pct;
        self
    }

    /// With refactor cost growth percentage
    #[inline]
    #[must_use]
    pub fn with_refactor_cost_growth_pct(mut self, pct: f64) -> Self {
        self.refactor_cost_growth_pct = pct;
        self
    }

    /// Number of features as a length, `0` for the degenerate case
    #[inline]
    #[must_use]
    pub fn feature_len(&self) -> usize {
        usize::try_from(self.feature_count).unwrap_or(0)
    }

    /// Per-feature compounding ratio, `1 + pct/100`
    #[inline]
    #[must_use]
    pub fn feature_growth_ratio(&self) -> f64 {
        crate::growth::ratio(self.feature_cost_growth_pct)
    }

    /// Refactor compounding ratio, `1 + pct/100`
    #[inline]
    #[must_use]
    pub fn refactor_growth_ratio(&self) -> f64 {
        crate::growth::ratio(self.refactor_cost_growth_pct)
    }

    /// Check every field against its minimum of zero
    ///
    /// # Errors
    /// Returns the first field that is negative or not finite, in
    /// declaration order.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.feature_count < 0 {
            #[allow(clippy::cast_precision_loss)]
            let value = self.feature_count as f64;
            return Err(ParameterError::Negative {
                field: ParameterField::FeatureCount,
                value,
            });
        }

        for (field, value) in self.real_fields() {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ParameterError::Negative { field, value });
            }
        }

        Ok(())
    }

    /// Copy with every field raised to its minimum of zero
    ///
    /// Non-finite reals become `0`.
    #[must_use]
    pub fn clamped(&self) -> Self {
        let clamp = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            feature_count: self.feature_count.max(0),
            base_feature_cost: clamp(self.base_feature_cost),
            base_refactor_cost: clamp(self.base_refactor_cost),
            feature_cost_growth_pct: clamp(self.feature_cost_growth_pct),
            refactor_cost_growth_pct: clamp(self.refactor_cost_growth_pct),
        }
    }

    fn real_fields(&self) -> [(ParameterField, f64); 4] {
        [
            (ParameterField::BaseFeatureCost, self.base_feature_cost),
            (ParameterField::BaseRefactorCost, self.base_refactor_cost),
            (ParameterField::FeatureCostGrowthPct, self.feature_cost_growth_pct),
            (ParameterField::RefactorCostGrowthPct, self.refactor_cost_growth_pct),
        ]
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            feature_count: 5,
            base_feature_cost: 5.0,
            base_refactor_cost: 5.0,
            feature_cost_growth_pct: 20.0,
            refactor_cost_growth_pct: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sandbox_initial_state() {
        let p = ModelParameters::default();
        assert_eq!(p.feature_count, 5);
        assert_eq!(p.base_feature_cost, 5.0);
        assert_eq!(p.base_refactor_cost, 5.0);
        assert_eq!(p.feature_cost_growth_pct, 20.0);
        assert_eq!(p.refactor_cost_growth_pct, 10.0);
    }

    #[test]
    fn builder_sets_fields() {
        let p = ModelParameters::new()
            .with_feature_count(3)
            .with_base_feature_cost(2.0)
            .with_base_refactor_cost(7.0)
            .with_feature_cost_growth_pct(50.0)
            .with_refactor_cost_growth_pct(0.0);

        assert_eq!(p.feature_count, 3);
        assert_eq!(p.base_feature_cost, 2.0);
        assert_eq!(p.base_refactor_cost, 7.0);
        assert_eq!(p.feature_growth_ratio(), 1.5);
        assert_eq!(p.refactor_growth_ratio(), 1.0);
    }

    #[test]
    fn feature_len_saturates_at_zero() {
        assert_eq!(ModelParameters::new().with_feature_count(-3).feature_len(), 0);
        assert_eq!(ModelParameters::new().with_feature_count(0).feature_len(), 0);
        assert_eq!(ModelParameters::new().with_feature_count(4).feature_len(), 4);
    }

    #[test]
    fn validate_accepts_zeroes() {
        let p = ModelParameters::new()
            .with_feature_count(0)
            .with_base_feature_cost(0.0)
            .with_base_refactor_cost(0.0)
            .with_feature_cost_growth_pct(0.0)
            .with_refactor_cost_growth_pct(0.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_count() {
        let err = ModelParameters::new()
            .with_feature_count(-1)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), ParameterField::FeatureCount);
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let err = ModelParameters::new()
            .with_base_refactor_cost(-1.0)
            .with_refactor_cost_growth_pct(-5.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ParameterError::Negative {
                field: ParameterField::BaseRefactorCost,
                value: -1.0,
            }
        );
    }

    #[test]
    fn validate_rejects_nan() {
        let err = ModelParameters::new()
            .with_feature_cost_growth_pct(f64::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            ParameterError::NonFinite {
                field: ParameterField::FeatureCostGrowthPct
            }
        );
    }

    #[test]
    fn clamped_raises_to_zero() {
        let p = ModelParameters::new()
            .with_feature_count(-4)
            .with_base_feature_cost(-1.0)
            .with_base_refactor_cost(f64::INFINITY)
            .with_feature_cost_growth_pct(12.5)
            .with_refactor_cost_growth_pct(f64::NAN)
            .clamped();

        assert_eq!(p.feature_count, 0);
        assert_eq!(p.base_feature_cost, 0.0);
        assert_eq!(p.base_refactor_cost, 0.0);
        assert_eq!(p.feature_cost_growth_pct, 12.5);
        assert_eq!(p.refactor_cost_growth_pct, 0.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn deserializes_partial_input() {
        let p: ModelParameters =
            serde_json::from_str(r#"{"feature_count": 9, "base_refactor_cost": 12}"#).unwrap();
        assert_eq!(p.feature_count, 9);
        assert_eq!(p.base_refactor_cost, 12.0);
        assert_eq!(p.base_feature_cost, 5.0);
    }
}
