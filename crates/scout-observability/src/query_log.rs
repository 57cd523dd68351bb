//! Query log: query text, request kind, tier, state, latency, result count,
//! cache hits, and the failure kinds absorbed along the way.

use std::time::Duration;

use scout_core::models::{ClassificationState, ErrorKind, Tier};
use serde::{Deserialize, Serialize};

/// A single query log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryLogEntry {
    pub query: String,
    pub request_kind: String,
    pub tier: Tier,
    pub state: ClassificationState,
    pub cache_hit: bool,
    pub latency: Duration,
    pub result_count: usize,
    pub success: bool,
    /// Classifier degradations and handler failures, in order.
    pub failures: Vec<ErrorKind>,
    pub timestamp_epoch_ms: i64,
}

impl QueryLogEntry {
    /// Create a new entry with the timestamp set to now.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        query: impl Into<String>,
        request_kind: impl Into<String>,
        tier: Tier,
        state: ClassificationState,
        cache_hit: bool,
        latency: Duration,
        result_count: usize,
        success: bool,
        failures: Vec<ErrorKind>,
    ) -> Self {
        Self {
            query: query.into(),
            request_kind: request_kind.into(),
            tier,
            state,
            cache_hit,
            latency,
            result_count,
            success,
            failures,
            timestamp_epoch_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Bounded query log; the oldest entries are dropped first.
#[derive(Debug, Clone)]
pub struct QueryLog {
    entries: Vec<QueryLogEntry>,
    max_entries: usize,
}

impl Default for QueryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryLog {
    pub fn new() -> Self {
        Self::with_capacity(scout_core::config::defaults::DEFAULT_QUERY_LOG_CAPACITY)
    }

    /// Create with a custom capacity.
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Record a query.
    pub fn record(&mut self, entry: QueryLogEntry) {
        tracing::debug!(
            event = "query_logged",
            query = %entry.query,
            request_kind = %entry.request_kind,
            tier = %entry.tier,
            state = ?entry.state,
            latency_ms = entry.latency.as_millis() as u64,
            result_count = entry.result_count,
            cache_hit = entry.cache_hit,
            failures = ?entry.failures,
            "query logged"
        );

        self.entries.push(entry);
        if self.entries.len() > self.max_entries {
            self.entries.drain(..self.entries.len() - self.max_entries);
        }
    }

    pub fn entries(&self) -> &[QueryLogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&QueryLogEntry> {
        self.entries.last()
    }

    /// Average latency across all logged queries.
    pub fn avg_latency(&self) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.entries.iter().map(|e| e.latency).sum();
        total / self.entries.len() as u32
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn latency_percentile(&self, p: f64) -> Duration {
        if self.entries.is_empty() {
            return Duration::ZERO;
        }
        let mut latencies: Vec<Duration> = self.entries.iter().map(|e| e.latency).collect();
        latencies.sort();
        let p = p.clamp(0.0, 1.0);
        let idx = ((p * (latencies.len() - 1) as f64).round() as usize).min(latencies.len() - 1);
        latencies[idx]
    }

    /// Fraction of logged queries that ended in fallback.
    pub fn fallback_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        let fallbacks = self
            .entries
            .iter()
            .filter(|e| e.state == ClassificationState::Fallback)
            .count();
        fallbacks as f64 / self.entries.len() as f64
    }

    /// Total number of logged queries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
