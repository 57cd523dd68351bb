use std::collections::BTreeMap;

use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::HandlerError;
use scout_core::models::{
    CompareRequest, Comparison, EntityRecord, PairwiseDelta, ResponseKind,
};
use scout_scoring::WeightMap;

use super::{AnalysisOutput, AnalysisRouter};

/// Metrics describing the sample rather than performance; shown in the
/// deltas but left out of the ranking and the leader insights.
const CONTEXT_METRICS: &[&str] = &["age", "minutes"];

pub(super) fn handle(
    router: &AnalysisRouter,
    request: &CompareRequest,
    snapshot: &CorpusSnapshot,
) -> Result<AnalysisOutput, HandlerError> {
    let mut entities: Vec<&EntityRecord> = Vec::new();
    let mut missing = Vec::new();
    for name in &request.names {
        let resolved = snapshot
            .resolve(name, router.fuzzy_threshold)
            .filter(|r| request.min_minutes.map_or(true, |min| r.minutes >= min))
            .filter(|r| !entities.iter().any(|e| e.name == r.name));
        match resolved {
            Some(record) => entities.push(record),
            None => missing.push(name.clone()),
        }
    }
    if entities.len() < 2 {
        return Err(HandlerError::EntitiesNotFound {
            missing,
            found: entities.iter().map(|e| e.name.clone()).collect(),
        });
    }

    let metrics = if request.metrics.is_empty() {
        router.config.comparison_metrics.clone()
    } else {
        request.metrics.clone()
    };

    let mut pairs = Vec::new();
    for (i, left) in entities.iter().enumerate() {
        for right in &entities[i + 1..] {
            pairs.push(pair_delta(left, right, &metrics));
        }
    }

    let performance: Vec<&str> = metrics
        .iter()
        .map(String::as_str)
        .filter(|m| !CONTEXT_METRICS.contains(m))
        .collect();
    let ranked = if performance.is_empty() {
        router.engine.score_pool(&entities, &WeightMap::uniform(&metrics))
    } else {
        router.engine.score_pool(&entities, &WeightMap::uniform(&performance))
    };

    let mut insights: Vec<String> = performance
        .iter()
        .filter_map(|metric| leader_insight(&entities, metric))
        .collect();
    insights.extend(age_insight(&entities));

    let total_matches = ranked.len();
    Ok(AnalysisOutput {
        kind: ResponseKind::Comparison,
        candidates: ranked,
        total_matches,
        comparison: Some(Comparison {
            entities: entities.into_iter().cloned().collect(),
            metrics,
            pairs,
        }),
        insights,
        suggestions: Vec::new(),
    })
}

/// `left − right` for every metric present on both sides.
fn pair_delta(left: &EntityRecord, right: &EntityRecord, metrics: &[String]) -> PairwiseDelta {
    let deltas: BTreeMap<String, f64> = metrics
        .iter()
        .filter_map(|m| Some((m.clone(), left.metric(m)? - right.metric(m)?)))
        .collect();
    PairwiseDelta {
        left: left.name.clone(),
        right: right.name.clone(),
        deltas,
    }
}

fn leader_insight(entities: &[&EntityRecord], metric: &str) -> Option<String> {
    let mut values: Vec<(&str, f64)> = entities
        .iter()
        .filter_map(|e| e.metric(metric).map(|v| (e.name.as_str(), v)))
        .collect();
    if values.len() < 2 {
        return None;
    }
    values.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let (leader, best) = values[0];
    let (_, runner_up) = values[1];
    if best == runner_up {
        return Some(format!("Level on {}: {}", metric, format_value(best)));
    }
    Some(format!(
        "{leader} leads {metric} ({} vs {})",
        format_value(best),
        format_value(runner_up)
    ))
}

fn age_insight(entities: &[&EntityRecord]) -> Option<String> {
    let youngest = entities.iter().min_by(|a, b| a.age.cmp(&b.age).then_with(|| a.name.cmp(&b.name)))?;
    let oldest = entities.iter().max_by(|a, b| a.age.cmp(&b.age).then_with(|| b.name.cmp(&a.name)))?;
    (youngest.age != oldest.age).then(|| {
        format!(
            "Youngest: {} ({}), oldest: {} ({})",
            youngest.name, youngest.age, oldest.name, oldest.age
        )
    })
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
