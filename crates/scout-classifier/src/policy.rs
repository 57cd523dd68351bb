//! Ordered tier policy.
//!
//! Tiers are tried in order: pattern match, entity extraction, external
//! interpretation, fallback. The first tier whose confidence clears its
//! threshold wins. Tier errors are logged as degradation events and the
//! policy moves on; fallback always terminates.

use chrono::Utc;
use scout_core::corpus::CorpusSnapshot;
use scout_core::models::{
    ClassificationResult, ClassificationState, DegradationEvent, Tier,
};
use tracing::{debug, warn};

use crate::query::ParsedQuery;
use crate::state::StateMachine;
use crate::tiers::{ClassificationTier, FallbackTier};

struct PolicyEntry {
    tier: Box<dyn ClassificationTier>,
    threshold: f64,
}

pub struct TierPolicy {
    entries: Vec<PolicyEntry>,
    fallback: FallbackTier,
}

impl TierPolicy {
    pub fn new(fallback: FallbackTier) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Append a tier. A tier is only accepted when its confidence is
    /// strictly above `threshold`.
    pub fn push(&mut self, tier: Box<dyn ClassificationTier>, threshold: f64) {
        self.entries.push(PolicyEntry { tier, threshold });
    }

    /// Tiers in evaluation order, excluding fallback.
    pub fn tiers(&self) -> Vec<Tier> {
        self.entries.iter().map(|e| e.tier.tier()).collect()
    }

    fn next_name(&self, i: usize) -> &'static str {
        self.entries
            .get(i + 1)
            .map(|e| e.tier.tier().name())
            .unwrap_or(Tier::Fallback.name())
    }

    /// Classify a query. Always returns exactly one result.
    pub async fn run(&self, query: &ParsedQuery, snapshot: &CorpusSnapshot) -> ClassificationResult {
        let mut machine = StateMachine::new();
        let mut degradations = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            let tier = entry.tier.tier();
            let confidence = tier.confidence();
            if confidence.value() <= entry.threshold {
                debug!(tier = %tier, threshold = entry.threshold, "tier below threshold, skipped");
                continue;
            }

            match entry.tier.attempt(query, snapshot).await {
                Ok(Some(request)) => {
                    machine.advance(tier.matched_state());
                    machine.advance(ClassificationState::Resolved);
                    debug!(tier = %tier, request = request.kind(), "query classified");
                    return ClassificationResult {
                        request,
                        tier,
                        confidence,
                        state: machine.state(),
                        trail: machine.into_trail(),
                        degradations,
                    };
                }
                Ok(None) => {
                    debug!(tier = %tier, "tier declined");
                }
                Err(e) => {
                    let fallback_used = self.next_name(i);
                    warn!(
                        tier = %tier,
                        error = %e,
                        fallback = fallback_used,
                        "classification tier failed, trying next"
                    );
                    degradations.push(DegradationEvent {
                        component: "classifier".to_string(),
                        kind: e.kind(),
                        failure: format!("{tier}: {e}"),
                        fallback_used: fallback_used.to_string(),
                        timestamp: Utc::now(),
                    });
                }
            }
        }

        machine.advance(ClassificationState::Fallback);
        ClassificationResult {
            request: self.fallback.resolve(),
            tier: Tier::Fallback,
            confidence: Tier::Fallback.confidence(),
            state: machine.state(),
            trail: machine.into_trail(),
            degradations,
        }
    }
}
