use std::collections::BTreeMap;

use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::HandlerError;
use scout_core::models::{EntityRecord, RankedCandidate, ResponseKind, SearchRequest};
use scout_scoring::WeightMap;
use tracing::debug;

use super::pool::matches_filters;
use super::{AnalysisOutput, AnalysisRouter};

const MATCH_SCORE: &str = "name_match";

/// Name search with filters, or a filtered listing ranked by minutes when
/// the pattern is empty.
pub(super) fn handle(
    router: &AnalysisRouter,
    request: &SearchRequest,
    snapshot: &CorpusSnapshot,
) -> Result<AnalysisOutput, HandlerError> {
    let limit = request.limit.unwrap_or(router.config.search_limit);

    if request.name_pattern.trim().is_empty() {
        let pool: Vec<&EntityRecord> = snapshot
            .records()
            .iter()
            .filter(|r| matches_filters(r, &request.filters))
            .collect();
        let ranked = router
            .engine
            .score_pool(&pool, &WeightMap::uniform(&["minutes"]));
        debug!(pool = pool.len(), "filtered listing");
        return Ok(AnalysisOutput::ranked(ResponseKind::Search, ranked, limit));
    }

    let mut candidates: Vec<RankedCandidate> = snapshot
        .search_names(&request.name_pattern, router.fuzzy_threshold)
        .into_iter()
        .filter_map(|m| snapshot.get(m.index).map(|record| (m.score, record)))
        .filter(|(_, record)| matches_filters(record, &request.filters))
        .map(|(score, record)| RankedCandidate {
            entity: record.clone(),
            composite_score: score,
            contributions: BTreeMap::from([(MATCH_SCORE.to_string(), score)]),
            bucket: None,
        })
        .collect();
    candidates.sort_by(|a, b| {
        b.composite_score
            .total_cmp(&a.composite_score)
            .then_with(|| b.entity.minutes.cmp(&a.entity.minutes))
            .then_with(|| a.entity.name.cmp(&b.entity.name))
    });
    debug!(pattern = %request.name_pattern, matches = candidates.len(), "name search");
    Ok(AnalysisOutput::ranked(ResponseKind::Search, candidates, limit))
}
