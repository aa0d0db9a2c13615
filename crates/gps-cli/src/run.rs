//! Evaluate a configuration and render the requested output

use crate::config::{OutputFormat, SandboxConfig};
use crate::error::SandboxError;
use gps_chart::{render_table, ChartConfig, LineChart, TableConfig};
use gps_model::{CostModel, ModelParameters, ScenarioCostModel, ScenarioResult};

/// Apply the input policy: clamp to the minimum of 0, or reject in strict mode
///
/// # Errors
/// - [`SandboxError::InvalidParameters`] in strict mode for out-of-domain input
/// - [`SandboxError::TooManyFeatures`] above `max_features`
pub fn prepare_parameters(config: &SandboxConfig) -> Result<ModelParameters, SandboxError> {
    let raw = config.parameters;
    let params = if config.output.strict {
        raw.validate()?;
        raw
    } else {
        let clamped = raw.clamped();
        if clamped != raw {
            tracing::warn!(?raw, ?clamped, "clamped out-of-range parameters to 0");
        }
        clamped
    };

    if params.feature_len() > config.output.max_features {
        return Err(SandboxError::TooManyFeatures {
            requested: params.feature_count,
            limit: config.output.max_features,
        });
    }

    Ok(params)
}

/// Evaluate `config` with `model`
///
/// # Errors
/// See [`prepare_parameters`].
pub fn evaluate_with(
    model: &dyn CostModel,
    config: &SandboxConfig,
) -> Result<ScenarioResult, SandboxError> {
    let params = prepare_parameters(config)?;
    let result = model.evaluate(&params);
    tracing::info!(
        model = model.name(),
        features = result.feature_count(),
        strategies = result.series.len(),
        "scenario evaluated"
    );
    Ok(result)
}

/// Reject results JSON cannot carry; `serde_json` writes `inf` and NaN as `null`
fn ensure_finite(result: &ScenarioResult) -> Result<(), SandboxError> {
    match result.first_non_finite() {
        Some((strategy, position)) => {
            tracing::warn!(%strategy, feature = position + 1, "cost is not finite");
            Err(SandboxError::NonFiniteCost {
                strategy,
                feature: position + 1,
            })
        }
        None => Ok(()),
    }
}

/// Render `result` in the configured format
///
/// The table prints overflowed costs as `inf`; the JSON formats refuse them.
///
/// # Errors
/// - [`SandboxError::NonFiniteCost`] for JSON or chart output of an overflowed result
/// - [`SandboxError::Chart`] or [`SandboxError::Json`] if serialization fails
pub fn render(result: &ScenarioResult, config: &SandboxConfig) -> Result<String, SandboxError> {
    if config.output.format != OutputFormat::Table {
        ensure_finite(result)?;
    }
    let out = match config.output.format {
        OutputFormat::Table => {
            let table = TableConfig::default().with_precision(config.output.precision);
            render_table(result, &table)
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(result)?;
            json.push('\n');
            json
        }
        OutputFormat::Chart => {
            let chart_config = ChartConfig::new().with_title(config.output.title.clone());
            let mut json = LineChart::from_result(result, &chart_config).to_json()?;
            json.push('\n');
            json
        }
    };
    Ok(out)
}

/// Evaluate with [`ScenarioCostModel`] and render
///
/// # Errors
/// Any error from [`evaluate_with`] or [`render`].
pub fn run(config: &SandboxConfig) -> Result<String, SandboxError> {
    let result = evaluate_with(&ScenarioCostModel::new(), config)?;
    render(&result, config)
}
