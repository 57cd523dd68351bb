//! Tier distribution, fallback rate, and degradations by failure kind.

use std::collections::BTreeMap;

use scout_core::models::{ClassificationResult, Tier};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    /// Accepted results per tier name.
    pub by_tier: BTreeMap<String, u64>,
    /// Degradation events per failure kind.
    pub degradations_by_kind: BTreeMap<String, u64>,
    pub total: u64,
}

impl ClassificationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &ClassificationResult) {
        self.total += 1;
        *self.by_tier.entry(result.tier.name().to_string()).or_default() += 1;
        for event in &result.degradations {
            let kind = serde_json::to_value(event.kind)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_else(|| format!("{:?}", event.kind));
            *self.degradations_by_kind.entry(kind).or_default() += 1;
        }
    }

    pub fn count(&self, tier: Tier) -> u64 {
        self.by_tier.get(tier.name()).copied().unwrap_or(0)
    }

    /// Share of classifications resolved by `tier`.
    pub fn tier_share(&self, tier: Tier) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(tier) as f64 / self.total as f64
    }

    pub fn fallback_rate(&self) -> f64 {
        self.tier_share(Tier::Fallback)
    }
}
