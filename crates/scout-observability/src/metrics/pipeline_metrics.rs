//! Per-kind request counts, cache effectiveness, and handler failures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineMetrics {
    pub requests_by_kind: BTreeMap<String, u64>,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub handler_failures: u64,
    pub total_results: u64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&mut self, kind: &str, cache_hit: bool, success: bool, results: usize) {
        *self.requests_by_kind.entry(kind.to_string()).or_default() += 1;
        if cache_hit {
            self.cache_hits += 1;
        } else {
            self.cache_misses += 1;
        }
        if !success {
            self.handler_failures += 1;
        }
        self.total_results += results as u64;
    }

    /// Cache hit rate (hits / lookups).
    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.cache_misses;
        if lookups == 0 {
            return 0.0;
        }
        self.cache_hits as f64 / lookups as f64
    }
}
