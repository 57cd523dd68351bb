//! Central metrics registry.
//!
//! [`MetricsCollector`] owns the classification and pipeline collectors.

pub mod classification_metrics;
pub mod pipeline_metrics;

pub use classification_metrics::ClassificationMetrics;
pub use pipeline_metrics::PipelineMetrics;

/// Central metrics registry that owns all collectors.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub classification: ClassificationMetrics,
    pub pipeline: PipelineMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
