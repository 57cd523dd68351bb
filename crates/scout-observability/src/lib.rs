//! # scout-observability
//!
//! Structured tracing setup with pipeline span definitions, the query log,
//! and classification/pipeline metrics.

pub mod metrics;
pub mod query_log;
pub mod tracing_setup;

pub use metrics::MetricsCollector;
pub use query_log::{QueryLog, QueryLogEntry};
pub use tracing_setup::init_tracing;
