//! Testing utilities for GPS workspace
//!
//! Shared parameter fixtures and float assertions.

#![allow(missing_docs)]

use gps_model::ModelParameters;

/// Absolute tolerance used by [`assert_close`]
pub const EPSILON: f64 = 1e-9;

/// Three features, cost 5, refactor 5, 20% feature growth, 10% refactor growth
pub fn three_feature_params() -> ModelParameters {
    ModelParameters::new()
        .with_feature_count(3)
        .with_base_feature_cost(5.0)
        .with_base_refactor_cost(5.0)
        .with_feature_cost_growth_pct(20.0)
        .with_refactor_cost_growth_pct(10.0)
}

/// The sandbox's initial form values (five features)
pub fn sandbox_params() -> ModelParameters {
    ModelParameters::default()
}

pub fn params_with_count(count: i64) -> ModelParameters {
    sandbox_params().with_feature_count(count)
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON.max(b.abs() * 1e-12)
}

#[track_caller]
pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(approx_eq(*a, *e), "index {i}: {a} != {e} ({actual:?})");
    }
}
