//! Chart.js line-chart document
//!
//! Serializes to the `{ type, data, options }` shape that Chart.js accepts
//! directly, one dataset per strategy against the shared feature labels.

use crate::color::SeriesColors;
use crate::label::series_label;
use crate::ChartError;
use gps_model::{ScenarioResult, ScenarioSeries};
use serde::{Deserialize, Serialize};

/// Default chart title
pub const DEFAULT_TITLE: &str = "Greedy Prioritization Sandbox";

/// Legend placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    /// Above the plot
    #[default]
    Top,
    /// Below the plot
    Bottom,
    /// Left of the plot
    Left,
    /// Right of the plot
    Right,
}

/// Chart presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Title shown above the plot
    pub title: String,
    /// Legend placement
    pub legend: LegendPosition,
    /// Resize with the container
    pub responsive: bool,
}

impl ChartConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With legend position
    #[inline]
    #[must_use]
    pub fn with_legend(mut self, legend: LegendPosition) -> Self {
        self.legend = legend;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            legend: LegendPosition::Top,
            responsive: true,
        }
    }
}

/// Complete Chart.js configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    /// Always `"line"`
    #[serde(rename = "type")]
    pub kind: String,
    /// Labels and datasets
    pub data: ChartData,
    /// Display options
    pub options: ChartOptions,
}

/// Labels plus one dataset per strategy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    /// Shared category labels
    pub labels: Vec<String>,
    /// One dataset per strategy, in strategy order
    pub datasets: Vec<Dataset>,
}

/// One plotted series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Legend label
    pub label: String,
    /// Cumulative costs
    pub data: Vec<f64>,
    /// Line color
    pub border_color: String,
    /// Fill color
    pub background_color: String,
}

impl Dataset {
    fn from_series(series: &ScenarioSeries, strategy_count: usize) -> Self {
        let colors = SeriesColors::for_strategy(series.strategy, strategy_count);
        Self {
            label: series_label(series.strategy),
            data: series.cumulative.clone(),
            border_color: colors.border,
            background_color: colors.background,
        }
    }
}

/// Chart.js `options`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// Resize with the container
    pub responsive: bool,
    /// Legend and title plugins
    pub plugins: Plugins,
}

/// Chart.js `options.plugins`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plugins {
    /// Legend plugin
    pub legend: Legend,
    /// Title plugin
    pub title: Title,
}

/// Chart.js legend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    /// Placement
    pub position: LegendPosition,
}

/// Chart.js title settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Whether to draw the title
    pub display: bool,
    /// Title text
    pub text: String,
}

impl LineChart {
    /// Build the chart for `result`
    ///
    /// A degenerate result gives a chart with no labels and no datasets.
    #[must_use]
    pub fn from_result(result: &ScenarioResult, config: &ChartConfig) -> Self {
        let count = result.series.len();
        let datasets = result
            .series
            .iter()
            .map(|series| Dataset::from_series(series, count))
            .collect();

        tracing::debug!(datasets = count, labels = result.labels.len(), "built line chart");

        Self {
            kind: "line".to_string(),
            data: ChartData {
                labels: result.labels.clone(),
                datasets,
            },
            options: ChartOptions {
                responsive: config.responsive,
                plugins: Plugins {
                    legend: Legend {
                        position: config.legend,
                    },
                    title: Title {
                        display: true,
                        text: config.title.clone(),
                    },
                },
            },
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    /// - [`ChartError::NonFinite`] if a data point is infinite or NaN, which
    ///   JSON would otherwise write as `null`
    /// - [`ChartError::Serialize`] if serialization fails
    pub fn to_json(&self) -> Result<String, ChartError> {
        for dataset in &self.data.datasets {
            if let Some(index) = dataset.data.iter().position(|v| !v.is_finite()) {
                return Err(ChartError::NonFinite {
                    dataset: dataset.label.clone(),
                    index,
                });
            }
        }
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gps_model::{evaluate, ModelParameters};
    use pretty_assertions::assert_eq;

    fn chart_for(count: i64) -> LineChart {
        let result = evaluate(&ModelParameters::new().with_feature_count(count));
        LineChart::from_result(&result, &ChartConfig::default())
    }

    #[test]
    fn one_dataset_per_strategy() {
        let chart = chart_for(5);
        assert_eq!(chart.data.datasets.len(), 5);
        assert_eq!(chart.data.labels.len(), 5);
        assert_eq!(chart.data.datasets[0].label, "No Refactor");
        assert_eq!(chart.data.datasets[4].label, "Refactor with fifth feature");
    }

    #[test]
    fn overflowed_costs_are_rejected_not_nulled() {
        let result = evaluate(
            &ModelParameters::new()
                .with_feature_count(1000)
                .with_feature_cost_growth_pct(200.0),
        );
        let chart = LineChart::from_result(&result, &ChartConfig::default());
        match chart.to_json() {
            Err(ChartError::NonFinite { dataset, .. }) => assert_eq!(dataset, "No Refactor"),
            other => panic!("expected non-finite error, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_chart_is_empty() {
        let chart = chart_for(0);
        assert!(chart.data.labels.is_empty());
        assert!(chart.data.datasets.is_empty());
        assert_eq!(chart.options.plugins.title.text, DEFAULT_TITLE);
    }

    #[test]
    fn json_uses_chartjs_field_names() {
        let json = serde_json::to_value(chart_for(2)).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["options"]["responsive"], true);
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "top");
        assert_eq!(json["options"]["plugins"]["title"]["display"], true);
        assert_eq!(json["data"]["datasets"][0]["borderColor"], "rgb(100, 99, 132)");
        assert_eq!(
            json["data"]["datasets"][0]["backgroundColor"],
            "rgba(100, 99, 132, 0.5)"
        );
    }

    #[test]
    fn config_overrides_title_and_legend() {
        let config = ChartConfig::new()
            .with_title("Q3 roadmap")
            .with_legend(LegendPosition::Bottom);
        let result = evaluate(&ModelParameters::new());
        let chart = LineChart::from_result(&result, &config);
        assert_eq!(chart.options.plugins.title.text, "Q3 roadmap");
        assert_eq!(chart.options.plugins.legend.position, LegendPosition::Bottom);
    }
}
