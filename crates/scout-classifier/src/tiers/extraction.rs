//! Tier 2: roster-aware entity extraction.
//!
//! Finds roster names (full name, single name token, fuzzy), team names,
//! leagues, positions, comparators, stat nouns, and cue words, then builds
//! the request those entities imply.

use std::collections::BTreeMap;

use async_trait::async_trait;
use scout_core::config::defaults;
use scout_core::corpus::matching::{fold, similarity};
use scout_core::corpus::CorpusSnapshot;
use scout_core::errors::ClassificationError;
use scout_core::models::{
    CompareRequest, ProspectRequest, RequestVariant, SearchRequest, TacticalRequest, Tier,
};

use super::ClassificationTier;
use crate::filters::{extract_filters, extract_limit};
use crate::patterns::{self, is_match};
use crate::query::ParsedQuery;
use crate::vocabulary;

/// Name tokens shorter than this never match on their own.
const MIN_TOKEN_LEN: usize = 3;
/// Query tokens shorter than this are never fuzzy-matched.
const MIN_FUZZY_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct EntityExtractionTier {
    fuzzy_threshold: f64,
}

impl EntityExtractionTier {
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self { fuzzy_threshold }
    }

    pub fn extract(&self, query: &ParsedQuery, snapshot: &CorpusSnapshot) -> Option<RequestVariant> {
        if query.is_empty() || query.relational {
            return None;
        }
        let tokens: Vec<&str> = query.tokens().collect();
        let mut covered = vec![false; tokens.len()];

        let team = find_team(&tokens, &mut covered, snapshot);
        let mentions = self.roster_mentions(&tokens, &mut covered, snapshot);
        let folded = query.folded.as_str();
        let unmatched = unmatched_name(&tokens, &covered);

        let mut filters = extract_filters(folded);
        filters.team = team;
        let stats: Vec<String> = vocabulary::find_stats(folded)
            .into_iter()
            .map(str::to_string)
            .collect();

        let request = match mentions.len() {
            n if n >= 2 => RequestVariant::Compare(CompareRequest {
                names: mentions
                    .iter()
                    .filter_map(|i| snapshot.get(*i))
                    .map(|r| r.name.clone())
                    .collect(),
                metrics: stats,
                min_minutes: filters.min_minutes,
            }),
            1 => RequestVariant::Search(SearchRequest {
                name_pattern: snapshot.get(mentions[0])?.name.clone(),
                filters,
                limit: None,
            }),
            _ if vocabulary::has_prospect_cue(folded) => {
                let age_max = filters.age_max.take().unwrap_or(defaults::DEFAULT_PROSPECT_AGE_MAX);
                let min_minutes = filters
                    .min_minutes
                    .take()
                    .unwrap_or(defaults::DEFAULT_PROSPECT_MIN_MINUTES);
                RequestVariant::Prospect(ProspectRequest {
                    age_max,
                    min_minutes,
                    weight_profile: None,
                    weight_overrides: BTreeMap::new(),
                    filters,
                    limit: extract_limit(folded),
                })
            }
            _ if !stats.is_empty() && vocabulary::has_superlative(folded) => {
                let positional_constraints = filters.position.take().into_iter().collect();
                RequestVariant::Tactical(TacticalRequest {
                    positional_constraints,
                    priority_metrics: stats.into_iter().take(1).collect(),
                    weight_profile: None,
                    weight_overrides: BTreeMap::new(),
                    context_entities: Vec::new(),
                    filters,
                    limit: extract_limit(folded),
                    reasoning: None,
                })
            }
            _ if is_match(&patterns::RE_NAME_SEARCH, folded) && !unmatched.is_empty() => {
                RequestVariant::Search(SearchRequest {
                    name_pattern: unmatched,
                    filters,
                    limit: None,
                })
            }
            _ if !filters.is_empty() => {
                filters.min_minutes = filters
                    .min_minutes
                    .or(Some(defaults::DEFAULT_FILTER_MIN_MINUTES));
                RequestVariant::Search(SearchRequest {
                    name_pattern: String::new(),
                    filters,
                    limit: extract_limit(folded),
                })
            }
            _ => return None,
        };
        Some(request)
    }

    /// Roster indices mentioned in the query, in order of appearance.
    fn roster_mentions(
        &self,
        tokens: &[&str],
        covered: &mut [bool],
        snapshot: &CorpusSnapshot,
    ) -> Vec<usize> {
        let mut found: Vec<(usize, usize)> = Vec::new();

        // Full multi-token names first.
        for (index, name) in snapshot.folded_names().iter().enumerate() {
            let name_tokens: Vec<&str> = name.split(' ').collect();
            if name_tokens.len() < 2 {
                continue;
            }
            if let Some(start) = find_window(tokens, covered, &name_tokens) {
                covered[start..start + name_tokens.len()].fill(true);
                found.push((start, index));
            }
        }

        for (pos, token) in tokens.iter().enumerate() {
            if covered[pos] || token.len() < MIN_TOKEN_LEN || vocabulary::is_vocabulary_token(token) {
                continue;
            }
            if let Some(index) = self.best_token_match(token, snapshot) {
                covered[pos] = true;
                if !found.iter().any(|(_, i)| *i == index) {
                    found.push((pos, index));
                }
            }
        }

        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, index)| index).collect()
    }

    /// Best roster entry for a single query token: any exact name token,
    /// else the closest fuzzy name token. Ties go to more minutes played.
    fn best_token_match(&self, token: &str, snapshot: &CorpusSnapshot) -> Option<usize> {
        let records = snapshot.records();
        let exact = snapshot
            .folded_names()
            .iter()
            .enumerate()
            .filter(|(_, name)| name.split(' ').any(|t| t.len() >= MIN_TOKEN_LEN && t == token))
            .max_by(|(a, _), (b, _)| records[*a].minutes.cmp(&records[*b].minutes).then(b.cmp(a)))
            .map(|(index, _)| index);
        if exact.is_some() || token.chars().count() < MIN_FUZZY_LEN {
            return exact;
        }

        snapshot
            .folded_names()
            .iter()
            .enumerate()
            .filter_map(|(index, name)| {
                let best = name
                    .split(' ')
                    .filter(|t| t.len() >= MIN_TOKEN_LEN)
                    .map(|t| similarity(token, t))
                    .fold(0.0, f64::max);
                (best >= self.fuzzy_threshold).then_some((index, best))
            })
            .max_by(|(a, sa), (b, sb)| {
                sa.total_cmp(sb)
                    .then(records[*a].minutes.cmp(&records[*b].minutes))
                    .then(b.cmp(a))
            })
            .map(|(index, _)| index)
    }
}

#[async_trait]
impl ClassificationTier for EntityExtractionTier {
    fn tier(&self) -> Tier {
        Tier::EntityExtraction
    }

    async fn attempt(
        &self,
        query: &ParsedQuery,
        snapshot: &CorpusSnapshot,
    ) -> Result<Option<RequestVariant>, ClassificationError> {
        Ok(self.extract(query, snapshot))
    }
}

/// Uncovered non-vocabulary tokens, i.e. a name the roster does not know.
fn unmatched_name(tokens: &[&str], covered: &[bool]) -> String {
    tokens
        .iter()
        .zip(covered)
        .filter(|(token, covered)| {
            !**covered
                && token.chars().all(char::is_alphabetic)
                && !vocabulary::is_vocabulary_token(token)
        })
        .map(|(token, _)| *token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First uncovered position where `needle` occurs as a token sequence.
fn find_window(tokens: &[&str], covered: &[bool], needle: &[&str]) -> Option<usize> {
    if needle.is_empty() || needle.len() > tokens.len() {
        return None;
    }
    (0..=tokens.len() - needle.len()).find(|&start| {
        tokens[start..start + needle.len()] == *needle
            && !covered[start..start + needle.len()].iter().any(|c| *c)
    })
}

/// Team named in the query, marking its tokens as covered.
fn find_team(tokens: &[&str], covered: &mut [bool], snapshot: &CorpusSnapshot) -> Option<String> {
    let mut teams: Vec<&str> = snapshot.teams().into_iter().collect();
    // Longer names first so "manchester united" beats a bare "united".
    teams.sort_by_key(|t| std::cmp::Reverse(t.len()));
    teams.into_iter().find_map(|team| {
        let folded = fold(team);
        let needle: Vec<&str> = folded.split(' ').collect();
        let start = find_window(tokens, covered, &needle)?;
        covered[start..start + needle.len()].fill(true);
        Some(team.to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use scout_core::models::EntityRecord;

    use super::*;

    fn record(name: &str, team: &str, position: &str, age: u32, minutes: u32) -> EntityRecord {
        EntityRecord {
            name: name.into(),
            team: team.into(),
            league: "FRA-Ligue 1".into(),
            position: position.into(),
            nationality: None,
            age,
            minutes,
            metrics: BTreeMap::new(),
        }
    }

    fn snapshot() -> CorpusSnapshot {
        CorpusSnapshot::new(vec![
            record("Kylian Mbappé", "Paris Saint-Germain", "Forward", 25, 2262),
            record("Ethan Mbappé", "Paris Saint-Germain", "Midfielder", 17, 310),
            record("Jonathan David", "Lille", "Forward", 24, 2820),
            record("Vitinha", "Paris Saint-Germain", "Midfielder", 24, 2385),
        ])
    }

    fn extract(text: &str) -> Option<RequestVariant> {
        EntityExtractionTier::new(0.82).extract(&ParsedQuery::new(text), &snapshot())
    }

    #[test]
    fn two_mentions_make_a_comparison() {
        match extract("is mbappe better than jonathan david") {
            Some(RequestVariant::Compare(c)) => {
                assert_eq!(c.names, vec!["Kylian Mbappé", "Jonathan David"]);
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn single_mention_is_a_search_even_with_typos() {
        match extract("how has vitnha been playing") {
            Some(RequestVariant::Search(s)) => assert_eq!(s.name_pattern, "Vitinha"),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn team_names_become_filters_not_players() {
        match extract("lille forwards with 1000 minutes") {
            Some(RequestVariant::Search(s)) => {
                assert!(s.name_pattern.is_empty());
                assert_eq!(s.filters.team.as_deref(), Some("Lille"));
                assert_eq!(s.filters.position.as_deref(), Some("Forward"));
                assert_eq!(s.filters.min_minutes, Some(1000));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn single_mention_keeps_its_filters() {
        match extract("find mbappe in the premier league") {
            Some(RequestVariant::Search(s)) => {
                assert_eq!(s.name_pattern, "Kylian Mbappé");
                assert_eq!(s.filters.league.as_deref(), Some("ENG-Premier League"));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn unknown_name_with_filters_stays_a_name_search() {
        match extract("find zidane in ligue 1") {
            Some(RequestVariant::Search(s)) => {
                assert_eq!(s.name_pattern, "zidane");
                assert_eq!(s.filters.league.as_deref(), Some("FRA-Ligue 1"));
            }
            other => panic!("{other:?}"),
        }
        // Without a search verb, filters alone still list the pool.
        match extract("lille forwards with 1000 minutes") {
            Some(RequestVariant::Search(s)) => assert!(s.name_pattern.is_empty()),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn prospect_cue_and_superlative_stat() {
        assert!(matches!(
            extract("any wonderkids at paris saint germain"),
            Some(RequestVariant::Prospect(_))
        ));
        match extract("which ligue 1 forward has the most goals") {
            Some(RequestVariant::Tactical(t)) => {
                assert_eq!(t.priority_metrics, vec!["goals"]);
                assert_eq!(t.positional_constraints, vec!["Forward"]);
                assert_eq!(t.filters.league.as_deref(), Some("FRA-Ligue 1"));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn declines_relational_and_unrelated_queries() {
        assert!(extract("who could partner vitinha").is_none());
        assert!(extract("what is the weather like").is_none());
    }
}
