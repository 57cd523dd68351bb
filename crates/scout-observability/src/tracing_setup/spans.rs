//! Span definitions per pipeline stage: process, classify, route, score, format.

/// Create a span around one `process` call.
#[macro_export]
macro_rules! pipeline_span {
    ($query:expr) => {
        tracing::info_span!("scout.pipeline", query = %$query)
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($query:expr) => {
        tracing::info_span!("scout.classify", query = %$query)
    };
}

/// Create a routing span for one request kind.
#[macro_export]
macro_rules! route_span {
    ($kind:expr) => {
        tracing::info_span!("scout.route", kind = %$kind)
    };
}

/// Create a scoring span.
#[macro_export]
macro_rules! score_span {
    ($pool_size:expr) => {
        tracing::info_span!("scout.score", pool_size = $pool_size)
    };
}

/// Create a formatting span.
#[macro_export]
macro_rules! format_span {
    ($kind:expr) => {
        tracing::info_span!("scout.format", kind = ?$kind)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "scout.pipeline";
    pub const CLASSIFY: &str = "scout.classify";
    pub const ROUTE: &str = "scout.route";
    pub const SCORE: &str = "scout.score";
    pub const FORMAT: &str = "scout.format";
}
