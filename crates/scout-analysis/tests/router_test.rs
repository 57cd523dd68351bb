//! Handler behaviour over the fixture corpus.

use std::collections::BTreeMap;

use scout_analysis::AnalysisRouter;
use scout_core::config::{RouterConfig, ScoringConfig};
use scout_core::errors::{HandlerError, ScoringError};
use scout_core::models::{
    CandidateFilters, CompareRequest, ProspectRequest, RequestVariant, SearchRequest,
    TacticalRequest,
};
use test_fixtures::fixture_snapshot;

fn router() -> AnalysisRouter {
    AnalysisRouter::new(RouterConfig::default(), ScoringConfig::default(), 0.82)
}

fn compare(names: &[&str], metrics: &[&str]) -> RequestVariant {
    RequestVariant::Compare(CompareRequest {
        names: names.iter().map(|s| s.to_string()).collect(),
        metrics: metrics.iter().map(|s| s.to_string()).collect(),
        min_minutes: None,
    })
}

#[test]
fn search_breaks_score_ties_by_minutes() {
    let request = RequestVariant::Search(SearchRequest {
        name_pattern: "mbappe".into(),
        filters: CandidateFilters::default(),
        limit: None,
    });
    let output = router().route(&request, &fixture_snapshot()).unwrap();
    let names: Vec<&str> = output.candidates.iter().map(|c| c.entity.name.as_str()).collect();
    assert_eq!(names, vec!["Kylian Mbappé", "Ethan Mbappé"]);
}

#[test]
fn filtered_listing_is_ranked_by_minutes() {
    let request = RequestVariant::Search(SearchRequest {
        name_pattern: String::new(),
        filters: CandidateFilters {
            league: Some("FRA-Ligue 1".into()),
            position: Some("Forward".into()),
            ..Default::default()
        },
        limit: Some(2),
    });
    let output = router().route(&request, &fixture_snapshot()).unwrap();
    let names: Vec<&str> = output.candidates.iter().map(|c| c.entity.name.as_str()).collect();
    assert_eq!(names, vec!["Jonathan David", "Kylian Mbappé"]);
    assert_eq!(output.total_matches, 3);
}

#[test]
fn comparison_is_symmetric_in_identity() {
    let snapshot = fixture_snapshot();
    let forward = router().route(&compare(&["Rodri", "Rice"], &[]), &snapshot).unwrap();
    let backward = router().route(&compare(&["Rice", "Rodri"], &[]), &snapshot).unwrap();

    let ab = &forward.comparison.as_ref().unwrap().pairs[0];
    let ba = &backward.comparison.as_ref().unwrap().pairs[0];
    assert_eq!(ab.left, ba.right);
    for (metric, delta) in &ab.deltas {
        assert_eq!(ba.deltas.get(metric), Some(&-delta), "{metric}");
    }
    assert_eq!(forward.candidates, backward.candidates);
}

#[test]
fn comparison_omits_metrics_missing_on_either_side() {
    let output = router()
        .route(&compare(&["Haaland", "Kane"], &["goals", "clean_sheets"]), &fixture_snapshot())
        .unwrap();
    let pair = &output.comparison.unwrap().pairs[0];
    assert_eq!(pair.deltas.keys().collect::<Vec<_>>(), vec!["goals"]);
    assert_eq!(pair.deltas["goals"], -9.0);
    assert!(output.insights.iter().any(|i| i == "Harry Kane leads goals (36 vs 27)"));
}

#[test]
fn comparison_needs_two_resolved_entities() {
    let err = router()
        .route(&compare(&["Haaland", "Zidane"], &[]), &fixture_snapshot())
        .unwrap_err();
    match err {
        HandlerError::EntitiesNotFound { missing, found } => {
            assert_eq!(missing, vec!["Zidane"]);
            assert_eq!(found, vec!["Erling Haaland"]);
        }
        other => panic!("{other:?}"),
    }
}

fn prospect(profile: Option<&str>, overrides: BTreeMap<String, f64>) -> RequestVariant {
    RequestVariant::Prospect(ProspectRequest {
        age_max: 21,
        min_minutes: 1000,
        weight_profile: profile.map(str::to_string),
        weight_overrides: overrides,
        filters: CandidateFilters::default(),
        limit: Some(3),
    })
}

#[test]
fn prospects_truncate_and_recommend() {
    let output = router().route(&prospect(None, BTreeMap::new()), &fixture_snapshot()).unwrap();
    assert_eq!(output.candidates.len(), 3);
    assert!(output.total_matches > 3);
    assert!(output.candidates.iter().all(|c| c.bucket.is_some()));
    assert!(!output.insights.is_empty());
}

#[test]
fn unknown_profiles_and_bad_overrides_fail() {
    let snapshot = fixture_snapshot();
    let err = router().route(&prospect(Some("mystery"), BTreeMap::new()), &snapshot).unwrap_err();
    assert!(matches!(
        err,
        HandlerError::Scoring(ScoringError::UnknownProfile { .. })
    ));

    let overrides = BTreeMap::from([("goals".to_string(), f64::NAN)]);
    let err = router().route(&prospect(None, overrides), &snapshot).unwrap_err();
    assert!(matches!(
        err,
        HandlerError::Scoring(ScoringError::NonFiniteWeight { .. })
    ));
}

#[test]
fn tactical_borrows_context_positions_and_excludes_context() {
    let request = RequestVariant::Tactical(TacticalRequest {
        positional_constraints: vec![],
        priority_metrics: vec!["tackles".into(), "interceptions".into()],
        weight_profile: None,
        weight_overrides: BTreeMap::new(),
        context_entities: vec!["Declan Rice".into()],
        filters: CandidateFilters {
            league: Some("ENG-Premier League".into()),
            ..Default::default()
        },
        limit: None,
        reasoning: None,
    });
    let output = router().route(&request, &fixture_snapshot()).unwrap();
    assert!(!output.candidates.is_empty());
    for c in &output.candidates {
        assert_eq!(c.entity.position, "Midfielder");
        assert_ne!(c.entity.name, "Declan Rice");
    }
    assert!(output.insights.iter().any(|i| i.starts_with("Most represented league: ENG-Premier League")));
}

fn premier_league_midfielders(
    weight_profile: Option<&str>,
    weight_overrides: BTreeMap<String, f64>,
) -> RequestVariant {
    RequestVariant::Tactical(TacticalRequest {
        positional_constraints: vec!["Midfielder".into()],
        priority_metrics: vec!["tackles".into(), "goals".into()],
        weight_profile: weight_profile.map(str::to_string),
        weight_overrides,
        context_entities: vec![],
        filters: CandidateFilters {
            league: Some("ENG-Premier League".into()),
            ..Default::default()
        },
        limit: None,
        reasoning: None,
    })
}

#[test]
fn tactical_weights_follow_the_request() {
    let snapshot = fixture_snapshot();
    let equal = router()
        .route(&premier_league_midfielders(None, BTreeMap::new()), &snapshot)
        .unwrap();
    assert_eq!(equal.candidates[0].entity.name, "Declan Rice");

    let goals_first = BTreeMap::from([("goals".to_string(), 5.0)]);
    let tilted = router()
        .route(&premier_league_midfielders(None, goals_first), &snapshot)
        .unwrap();
    assert_eq!(tilted.candidates[0].entity.name, "Rodri");
    assert_eq!(tilted.candidates[0].contributions["goals"], 5.0);

    let defensive = router()
        .route(&premier_league_midfielders(Some("defensive"), BTreeMap::new()), &snapshot)
        .unwrap();
    assert!(defensive.candidates[0].contributions.contains_key("interceptions"));
    assert!(!defensive.candidates[0].contributions.contains_key("goals"));

    let err = router()
        .route(&premier_league_midfielders(Some("goalkeeping"), BTreeMap::new()), &snapshot)
        .unwrap_err();
    assert!(matches!(err, HandlerError::Scoring(ScoringError::UnknownProfile { .. })));
}

#[test]
fn empty_pools_are_successful() {
    let request = RequestVariant::Tactical(TacticalRequest {
        positional_constraints: vec!["Goalkeeper".into()],
        priority_metrics: vec!["saves".into()],
        weight_profile: None,
        weight_overrides: BTreeMap::new(),
        context_entities: vec![],
        filters: CandidateFilters::default(),
        limit: None,
        reasoning: None,
    });
    let output = router().route(&request, &fixture_snapshot()).unwrap();
    assert!(output.candidates.is_empty());
    assert_eq!(output.total_matches, 0);
}
