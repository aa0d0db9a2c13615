//! Error types for chart rendering

/// Chart rendering error
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// JSON serialization failed
    #[error("chart serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A data point is infinite or NaN and has no JSON encoding
    #[error("dataset \"{dataset}\" has a non-finite value at index {index}")]
    NonFinite {
        /// Dataset label
        dataset: String,
        /// 0-indexed data point
        index: usize,
    },
}
