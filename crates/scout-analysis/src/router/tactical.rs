use std::collections::BTreeMap;

use scout_core::config::defaults::TACTICAL_PROFILE;
use scout_core::constants::{MAX_REASONING_CHARS, REGULAR_STARTER_MINUTES, YOUNG_AGE};
use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::HandlerError;
use scout_core::models::{EntityRecord, RankedCandidate, ResponseKind, TacticalRequest};
use scout_scoring::WeightMap;
use tracing::debug;

use super::pool::{matches_filters, position_compatible};
use super::{AnalysisOutput, AnalysisRouter};

pub(super) fn handle(
    router: &AnalysisRouter,
    request: &TacticalRequest,
    snapshot: &CorpusSnapshot,
) -> Result<AnalysisOutput, HandlerError> {
    let context: Vec<&EntityRecord> = request
        .context_entities
        .iter()
        .filter_map(|name| snapshot.resolve(name, router.fuzzy_threshold))
        .collect();

    let constraints: Vec<String> = if request.positional_constraints.is_empty() {
        let mut positions: Vec<String> = context.iter().map(|e| e.position.clone()).collect();
        positions.sort();
        positions.dedup();
        positions
    } else {
        request.positional_constraints.clone()
    };

    let mut filters = request.filters.clone();
    filters.min_minutes = filters.min_minutes.or(Some(router.config.tactical_min_minutes));

    let pool: Vec<&EntityRecord> = snapshot
        .records()
        .iter()
        .filter(|r| !context.iter().any(|c| c.name == r.name))
        .filter(|r| matches_filters(r, &filters))
        .filter(|r| position_compatible(r, &constraints))
        .collect();

    let weights = tactical_weights(router, request)?;

    debug!(
        pool = pool.len(),
        context = context.len(),
        constraints = ?constraints,
        "tactical pool"
    );
    let ranked = {
        let _span = scout_observability::score_span!(pool.len()).entered();
        router.engine.score_pool(&pool, &weights)
    };
    let limit = request.limit.unwrap_or(router.config.tactical_limit);
    let mut output = AnalysisOutput::ranked(ResponseKind::Tactical, ranked, limit);
    output.insights = insights(&output.candidates, request.reasoning.as_deref());
    Ok(output)
}

/// The request's profile with its overrides, else equal weights over the
/// priority metrics adjusted by the configured tactical profile.
fn tactical_weights(router: &AnalysisRouter, request: &TacticalRequest) -> Result<WeightMap, HandlerError> {
    if let Some(profile) = &request.weight_profile {
        return Ok(WeightMap::from_profile(&router.scoring, profile, &request.weight_overrides)?);
    }
    let mut weights = WeightMap::uniform(&request.priority_metrics);
    if let Some(profile) = router.scoring.profile(TACTICAL_PROFILE) {
        weights = weights.overlay_existing(&profile)?;
    }
    if request.weight_overrides.is_empty() {
        return Ok(weights);
    }
    let mut merged = weights.as_map().clone();
    merged.extend(request.weight_overrides.iter().map(|(k, v)| (k.clone(), *v)));
    Ok(WeightMap::new(merged)?)
}

fn insights(candidates: &[RankedCandidate], reasoning: Option<&str>) -> Vec<String> {
    let mut out = Vec::new();
    if !candidates.is_empty() {
        let n = candidates.len() as f64;
        let avg_age = candidates.iter().map(|c| f64::from(c.entity.age)).sum::<f64>() / n;
        let avg_minutes = candidates.iter().map(|c| f64::from(c.entity.minutes)).sum::<f64>() / n;
        let young = candidates.iter().filter(|c| c.entity.age <= YOUNG_AGE).count();
        let starters = candidates
            .iter()
            .filter(|c| c.entity.minutes >= REGULAR_STARTER_MINUTES)
            .count();

        out.push(format!("Average age {avg_age:.1}, {young} aged {YOUNG_AGE} or under"));
        out.push(format!(
            "Average {avg_minutes:.0} minutes, {starters} regular starters"
        ));
        if let Some((league, count)) = most_common_league(candidates) {
            out.push(format!("Most represented league: {league} ({count})"));
        }
    }
    if let Some(reasoning) = reasoning {
        out.push(excerpt(reasoning, MAX_REASONING_CHARS));
    }
    out
}

fn most_common_league(candidates: &[RankedCandidate]) -> Option<(&str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for c in candidates {
        *counts.entry(c.entity.league.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
}

/// At most `max_chars` characters, ellipsized on a char boundary.
fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_respects_limit() {
        let long = "a".repeat(400);
        let short = excerpt(&long, MAX_REASONING_CHARS);
        assert_eq!(short.chars().count(), MAX_REASONING_CHARS);
        assert!(short.ends_with('…'));
        assert_eq!(excerpt(" fits ", 150), "fits");
    }
}
