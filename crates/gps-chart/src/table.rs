//! Plain-text cumulative cost table
//!
//! One row per feature, one column per strategy. Columns are right-aligned
//! to the widest cell so the output lines up in a terminal.

use crate::label::series_label;
use gps_model::ScenarioResult;
use std::fmt::Write as _;

/// Table rendering settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    /// Decimal places for costs
    pub precision: usize,
    /// Spaces between columns
    pub gutter: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            gutter: 2,
        }
    }
}

impl TableConfig {
    /// With decimal places
    #[inline]
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

/// Render the cumulative costs of `result`
///
/// A degenerate result renders as an empty string. A series shorter than
/// the labels leaves its missing cells blank.
#[must_use]
pub fn render_table(result: &ScenarioResult, config: &TableConfig) -> String {
    if result.is_empty() {
        return String::new();
    }

    let mut header = vec![String::new()];
    header.extend(result.strategies().map(series_label));

    let mut rows = vec![header];
    for (n, label) in result.labels.iter().enumerate() {
        let mut row = vec![label.clone()];
        row.extend(
            result
                .series
                .iter()
                .map(|s| {
                    s.cumulative
                        .get(n)
                        .map_or_else(String::new, |v| format!("{:.*}", config.precision, v))
                }),
        );
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    let gutter = " ".repeat(config.gutter);
    let mut out = String::new();
    for row in &rows {
        let mut line = String::new();
        for (c, cell) in row.iter().enumerate() {
            if c == 0 {
                let _ = write!(line, "{cell:<width$}", width = widths[c]);
            } else {
                let _ = write!(line, "{gutter}{cell:>width$}", width = widths[c]);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
