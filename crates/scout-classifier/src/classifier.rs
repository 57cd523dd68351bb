use std::sync::Arc;
use std::time::Duration;

use scout_core::config::ClassifierConfig;
use scout_core::corpus::CorpusSnapshot;
use scout_core::models::{ClassificationResult, Tier};
use scout_core::traits::IInterpreter;

use crate::policy::TierPolicy;
use crate::query::ParsedQuery;
use crate::tiers::{EntityExtractionTier, FallbackTier, InterpretationTier, PatternTier};

/// Turns free text into a typed request via the tier policy.
pub struct QueryClassifier {
    policy: TierPolicy,
    snapshot: CorpusSnapshot,
}

impl QueryClassifier {
    /// Build the standard tier sequence. Without an interpreter the
    /// external tier is left out.
    pub fn new(
        config: &ClassifierConfig,
        snapshot: CorpusSnapshot,
        interpreter: Option<Arc<dyn IInterpreter>>,
    ) -> Self {
        let mut policy = TierPolicy::new(FallbackTier::new(config.suggestions.clone()));
        policy.push(Box::new(PatternTier::new()), config.pattern_threshold);
        policy.push(
            Box::new(EntityExtractionTier::new(config.fuzzy_match_threshold)),
            config.extraction_threshold,
        );
        if let Some(interpreter) = interpreter {
            policy.push(
                Box::new(InterpretationTier::new(
                    interpreter,
                    Duration::from_millis(config.interpretation_timeout_ms),
                    config.interpret_without_cue,
                )),
                config.interpretation_threshold,
            );
        }
        Self { policy, snapshot }
    }

    pub fn snapshot(&self) -> &CorpusSnapshot {
        &self.snapshot
    }

    pub fn tiers(&self) -> Vec<Tier> {
        self.policy.tiers()
    }

    pub async fn classify(&self, query: &str) -> ClassificationResult {
        let parsed = ParsedQuery::new(query);
        self.policy.run(&parsed, &self.snapshot).await
    }
}
