//! Analysis router: one handler per request variant.
//!
//! Handlers read the snapshot and never mutate it. An empty pool is a
//! successful, empty result; only unresolvable comparisons and invalid
//! weight profiles are errors.

mod compare;
pub mod pool;
mod prospect;
mod search;
mod tactical;

use scout_core::config::{RouterConfig, ScoringConfig};
use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::HandlerError;
use scout_core::models::{Comparison, RankedCandidate, RequestVariant, ResponseKind};
use scout_scoring::ScoringEngine;

/// What a handler hands to the formatter.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutput {
    pub kind: ResponseKind,
    /// Ranked candidates after truncation to the request limit.
    pub candidates: Vec<RankedCandidate>,
    /// Pool size before truncation.
    pub total_matches: usize,
    pub comparison: Option<Comparison>,
    pub insights: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisOutput {
    fn ranked(kind: ResponseKind, mut candidates: Vec<RankedCandidate>, limit: usize) -> Self {
        let total_matches = candidates.len();
        candidates.truncate(limit);
        Self {
            kind,
            candidates,
            total_matches,
            comparison: None,
            insights: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

pub struct AnalysisRouter {
    config: RouterConfig,
    scoring: ScoringConfig,
    engine: ScoringEngine,
    fuzzy_threshold: f64,
}

impl AnalysisRouter {
    pub fn new(config: RouterConfig, scoring: ScoringConfig, fuzzy_threshold: f64) -> Self {
        let engine = ScoringEngine::new(&scoring);
        Self {
            config,
            scoring,
            engine,
            fuzzy_threshold,
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn route(
        &self,
        request: &RequestVariant,
        snapshot: &CorpusSnapshot,
    ) -> Result<AnalysisOutput, HandlerError> {
        let _span = scout_observability::route_span!(request.kind()).entered();
        match request {
            RequestVariant::Search(r) => search::handle(self, r, snapshot),
            RequestVariant::Compare(r) => compare::handle(self, r, snapshot),
            RequestVariant::Prospect(r) => prospect::handle(self, r, snapshot),
            RequestVariant::Tactical(r) => tactical::handle(self, r, snapshot),
            RequestVariant::Unresolved(r) => Ok(AnalysisOutput {
                kind: ResponseKind::Suggestions,
                candidates: Vec::new(),
                total_matches: 0,
                comparison: None,
                insights: Vec::new(),
                suggestions: r.suggestions.clone(),
            }),
        }
    }
}
