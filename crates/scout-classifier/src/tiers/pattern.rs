//! Tier 1: fixed templates. No roster access, no external calls.

use std::collections::BTreeMap;

use async_trait::async_trait;
use scout_core::config::defaults;
use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::ClassificationError;
use scout_core::models::{
    CompareRequest, ProspectRequest, RequestVariant, SearchRequest, TacticalRequest, Tier,
};

use super::ClassificationTier;
use crate::filters::{extract_filters, extract_limit, has_filter_vocabulary};
use crate::patterns::{self, captures, is_match};
use crate::query::ParsedQuery;
use crate::vocabulary;

/// Templates, tried in order: comparison, prospects, leaderboard, position
/// listing, name search.
#[derive(Debug, Clone, Default)]
pub struct PatternTier;

impl PatternTier {
    pub fn new() -> Self {
        Self
    }

    pub fn match_query(&self, query: &ParsedQuery) -> Option<RequestVariant> {
        if query.is_empty() || query.relational {
            return None;
        }
        comparison(query)
            .or_else(|| prospects(query))
            .or_else(|| leaderboard(query))
            .or_else(|| position_listing(query))
            .or_else(|| name_search(query))
    }
}

#[async_trait]
impl ClassificationTier for PatternTier {
    fn tier(&self) -> Tier {
        Tier::PatternMatch
    }

    async fn attempt(
        &self,
        query: &ParsedQuery,
        _snapshot: &CorpusSnapshot,
    ) -> Result<Option<RequestVariant>, ClassificationError> {
        Ok(self.match_query(query))
    }
}

/// Split a list of names on separators and drop vocabulary tokens.
fn split_names(list: &str) -> Vec<String> {
    let Some(separator) = patterns::RE_NAME_SEPARATOR.as_ref() else {
        return Vec::new();
    };
    separator
        .split(list)
        .map(|part| {
            part.split(' ')
                .filter(|t| !t.is_empty() && !vocabulary::is_vocabulary_token(t))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|name| !name.is_empty())
        .collect()
}

fn comparison(query: &ParsedQuery) -> Option<RequestVariant> {
    let list = captures(&patterns::RE_COMPARE_PREFIX, &query.listed)
        .and_then(|c| c.into_iter().next())
        .or_else(|| {
            captures(&patterns::RE_VERSUS, &query.listed).map(|c| c.join(" vs "))
        })?;
    let names = split_names(&list);
    if names.len() < 2 {
        return None;
    }
    Some(RequestVariant::Compare(CompareRequest {
        names,
        metrics: vocabulary::find_stats(&query.folded)
            .into_iter()
            .map(str::to_string)
            .collect(),
        min_minutes: extract_filters(&query.folded).min_minutes,
    }))
}

fn prospects(query: &ParsedQuery) -> Option<RequestVariant> {
    let folded = &query.folded;
    let matched = is_match(&patterns::RE_YOUNG_GROUP, folded)
        || is_match(&patterns::RE_PROSPECT_WORD, folded)
        || is_match(&patterns::RE_PROSPECTS_UNDER, folded);
    if !matched {
        return None;
    }
    let mut filters = extract_filters(folded);
    let age_max = filters.age_max.take().unwrap_or(defaults::DEFAULT_PROSPECT_AGE_MAX);
    let min_minutes = filters
        .min_minutes
        .take()
        .unwrap_or(defaults::DEFAULT_PROSPECT_MIN_MINUTES);
    Some(RequestVariant::Prospect(ProspectRequest {
        age_max,
        min_minutes,
        weight_profile: None,
        weight_overrides: BTreeMap::new(),
        filters,
        limit: extract_limit(folded),
    }))
}

fn leaderboard(query: &ParsedQuery) -> Option<RequestVariant> {
    let folded = &query.folded;
    if !is_match(&patterns::RE_LEADERBOARD, folded) {
        return None;
    }
    let metric = *vocabulary::find_stats(folded).first()?;
    let mut filters = extract_filters(folded);
    let positional_constraints = filters.position.take().into_iter().collect();
    Some(RequestVariant::Tactical(TacticalRequest {
        positional_constraints,
        priority_metrics: vec![metric.to_string()],
        weight_profile: None,
        weight_overrides: BTreeMap::new(),
        context_entities: Vec::new(),
        filters,
        limit: extract_limit(folded),
        reasoning: None,
    }))
}

fn position_listing(query: &ParsedQuery) -> Option<RequestVariant> {
    let folded = &query.folded;
    let group = captures(&patterns::RE_POSITION_LISTING, folded)?;
    let position = vocabulary::canonical_position(group.first()?)?;
    let mut filters = extract_filters(folded);
    filters.position = Some(position.to_string());
    filters.min_minutes = filters
        .min_minutes
        .or(Some(defaults::DEFAULT_FILTER_MIN_MINUTES));
    Some(RequestVariant::Search(SearchRequest {
        name_pattern: String::new(),
        filters,
        limit: extract_limit(folded),
    }))
}

fn name_search(query: &ParsedQuery) -> Option<RequestVariant> {
    let remainder = captures(&patterns::RE_NAME_SEARCH, &query.folded)?
        .into_iter()
        .next()?;
    if has_filter_vocabulary(&remainder) {
        return None;
    }
    let name_pattern = remainder
        .split(' ')
        .filter(|t| !t.is_empty() && !vocabulary::is_vocabulary_token(t))
        .collect::<Vec<_>>()
        .join(" ");
    if name_pattern.is_empty() {
        return None;
    }
    Some(RequestVariant::Search(SearchRequest {
        name_pattern,
        filters: Default::default(),
        limit: None,
    }))
}
