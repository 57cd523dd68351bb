use scout_core::config::defaults::PROSPECT_PROFILE;
use scout_core::constants::REGULAR_STARTER_MINUTES;
use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::HandlerError;
use scout_core::models::{EntityRecord, ProspectBucket, ProspectRequest, RankedCandidate, ResponseKind};
use scout_scoring::WeightMap;

use super::pool::matches_filters;
use super::{AnalysisOutput, AnalysisRouter};

const VERY_YOUNG: u32 = 20;

pub(super) fn handle(
    router: &AnalysisRouter,
    request: &ProspectRequest,
    snapshot: &CorpusSnapshot,
) -> Result<AnalysisOutput, HandlerError> {
    let profile = request.weight_profile.as_deref().unwrap_or(PROSPECT_PROFILE);
    let weights = WeightMap::from_profile(&router.scoring, profile, &request.weight_overrides)?;

    let pool: Vec<&EntityRecord> = snapshot
        .records()
        .iter()
        .filter(|r| r.age <= request.age_max && r.minutes >= request.min_minutes)
        .filter(|r| matches_filters(r, &request.filters))
        .collect();

    let ranked = {
        let _span = scout_observability::score_span!(pool.len()).entered();
        router.engine.score_prospects(&pool, &weights)
    };
    let limit = request.limit.unwrap_or(router.config.prospect_limit);
    let mut output = AnalysisOutput::ranked(ResponseKind::Prospects, ranked, limit);
    output.insights = output.candidates.iter().filter_map(recommendation).collect();
    Ok(output)
}

/// Why a prospect stands out, if anything does.
fn recommendation(candidate: &RankedCandidate) -> Option<String> {
    let entity = &candidate.entity;
    let mut reasons = Vec::new();
    if candidate.bucket == Some(ProspectBucket::Elite) {
        reasons.push("elite prospect rating".to_string());
    }
    if entity.minutes >= REGULAR_STARTER_MINUTES {
        reasons.push(format!("high playing time ({} minutes)", entity.minutes));
    }
    if entity.age <= VERY_YOUNG {
        reasons.push(format!("very young ({})", entity.age));
    }
    (!reasons.is_empty()).then(|| format!("{}: {}", entity.name, reasons.join(", ")))
}
