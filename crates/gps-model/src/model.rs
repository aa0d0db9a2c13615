//! Scenario cost model
//!
//! Produces one cumulative-cost curve per refactor-timing [`Strategy`].
//!
//! # Cost Table
//!
//! With `F` the base feature cost, `R` the base refactor cost, `gf` and `gr`
//! the feature and refactor compounding ratios, the incremental cost at
//! 0-indexed position `n` is:
//!
//! | Strategy                        | Position   | Incremental cost             |
//! |---------------------------------|------------|------------------------------|
//! | `NoRefactor`                    | any        | `F * gf^n`                   |
//! | `RefactorBeforeFeature(k)`      | `n < k-1`  | `F * gf^n`                   |
//! | `RefactorBeforeFeature(k)`      | `n == k-1` | `F + F * gf^(n-1) + R * gr^n`|
//! | `RefactorBeforeFeature(k)`      | `n > k-1`  | `F`                          |
//!
//! The refactor step pays for one more feature built the old way, the flat
//! cost of the feature itself, and a refactor that got pricier while it
//! waited. Cumulative costs are the left-to-right prefix sum.
//!
//! [`evaluate`] walks the `gf^n` column with a running product
//! ([`growth::Compounding`]); [`incremental_cost`] evaluates one cell with
//! the direct power. The two agree within floating-point rounding.

use crate::growth;
use crate::params::ModelParameters;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// Cost model producing one curve per strategy
pub trait CostModel: Send + Sync + std::fmt::Debug {
    /// Evaluate every strategy for `params`
    ///
    /// Must be deterministic: identical parameters produce identical results.
    fn evaluate(&self, params: &ModelParameters) -> ScenarioResult;

    /// Model name (for logging)
    fn name(&self) -> &'static str;
}

/// The refactor-timing cost model
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioCostModel;

impl ScenarioCostModel {
    /// Create model
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CostModel for ScenarioCostModel {
    fn evaluate(&self, params: &ModelParameters) -> ScenarioResult {
        evaluate(params)
    }

    fn name(&self) -> &'static str {
        "scenario_cost"
    }
}

/// Evaluate every refactor-timing strategy for `params`
///
/// `feature_count <= 0` yields an empty result. Never fails; out-of-domain
/// numbers are evaluated as given.
#[must_use]
pub fn evaluate(params: &ModelParameters) -> ScenarioResult {
    let count = params.feature_len();

    let labels = (1..=count).map(|i| format!("Feature {i}")).collect();
    let series: Vec<ScenarioSeries> = Strategy::enumerate(count)
        .map(|strategy| ScenarioSeries::build(strategy, params, count))
        .collect();

    tracing::debug!(
        feature_count = params.feature_count,
        base_feature_cost = params.base_feature_cost,
        base_refactor_cost = params.base_refactor_cost,
        feature_cost_growth_pct = params.feature_cost_growth_pct,
        refactor_cost_growth_pct = params.refactor_cost_growth_pct,
        strategies = series.len(),
        "evaluated scenarios"
    );

    ScenarioResult { labels, series }
}

/// Incremental cost of 0-indexed `position` under `strategy`
#[must_use]
pub fn incremental_cost(strategy: Strategy, params: &ModelParameters, position: usize) -> f64 {
    let base = params.base_feature_cost;
    let gf = params.feature_growth_ratio();
    let compounded = |n: usize| base * growth::multiplier(gf, n);

    match strategy.refactor_position() {
        None => compounded(position),
        Some(at) if position < at => compounded(position),
        Some(at) if position == at => {
            let refactor =
                params.base_refactor_cost * growth::multiplier(params.refactor_growth_ratio(), at);
            base + compounded(at - 1) + refactor
        }
        Some(_) => base,
    }
}

/// Costs of one strategy across all features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSeries {
    /// Strategy this curve belongs to
    pub strategy: Strategy,
    /// Cost attributed to each feature
    pub incremental: Vec<f64>,
    /// Running total of `incremental`
    pub cumulative: Vec<f64>,
}

impl ScenarioSeries {
    fn build(strategy: Strategy, params: &ModelParameters, count: usize) -> Self {
        let base = params.base_feature_cost;
        let refactor_at = strategy.refactor_position();
        let refactor = |at: usize| {
            params.base_refactor_cost * growth::multiplier(params.refactor_growth_ratio(), at)
        };

        // `previous` trails the running product by one position
        let mut previous = 1.0;
        let incremental: Vec<f64> = growth::Compounding::new(params.feature_growth_ratio())
            .take(count)
            .enumerate()
            .map(|(n, current)| {
                let cost = match refactor_at {
                    Some(at) if n == at => base + base * previous + refactor(at),
                    Some(at) if n > at => base,
                    _ => base * current,
                };
                previous = current;
                cost
            })
            .collect();

        let cumulative = incremental
            .iter()
            .scan(0.0, |total, cost| {
                *total += cost;
                Some(*total)
            })
            .collect();

        Self {
            strategy,
            incremental,
            cumulative,
        }
    }

    /// Cumulative cost after the last feature
    #[inline]
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        self.cumulative.last().copied()
    }
}

/// Output of one model evaluation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Category labels shared by every series ("Feature 1", ...)
    pub labels: Vec<String>,
    /// One series per strategy, in enumeration order
    pub series: Vec<ScenarioSeries>,
}

impl ScenarioResult {
    /// Number of features covered
    #[inline]
    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.labels.len()
    }

    /// True for the degenerate (no features) result
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.series.is_empty()
    }

    /// Strategies in evaluation order
    pub fn strategies(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.series.iter().map(|s| s.strategy)
    }

    /// Series for a strategy
    #[must_use]
    pub fn series_for(&self, strategy: Strategy) -> Option<&ScenarioSeries> {
        self.series.iter().find(|s| s.strategy == strategy)
    }

    /// The never-refactor baseline
    #[inline]
    #[must_use]
    pub fn no_refactor(&self) -> Option<&ScenarioSeries> {
        self.series_for(Strategy::NoRefactor)
    }

    /// First cost that overflowed or is NaN, as `(strategy, 0-indexed position)`
    ///
    /// Steep growth over many features can push costs past `f64::MAX`.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<(Strategy, usize)> {
        self.series.iter().find_map(|s| {
            let incremental = s.incremental.iter().position(|c| !c.is_finite());
            let cumulative = s.cumulative.iter().position(|c| !c.is_finite());
            incremental
                .into_iter()
                .chain(cumulative)
                .min()
                .map(|n| (s.strategy, n))
        })
    }

    /// Final cumulative cost of every strategy, in evaluation order
    #[must_use]
    pub fn final_totals(&self) -> Vec<(Strategy, f64)> {
        self.series
            .iter()
            .filter_map(|s| s.total().map(|t| (s.strategy, t)))
            .collect()
    }
}
