//! Property tests for scout-scoring: rank stability under weight scaling,
//! the youth term, and bucket order.

use std::collections::BTreeMap;

use proptest::prelude::*;

use scout_core::config::ScoringConfig;
use scout_core::models::EntityRecord;
use scout_scoring::{ScoringEngine, WeightMap};

const METRICS: [&str; 4] = ["goals", "assists", "tackles", "progressive_passes"];

fn make_record(index: usize, age: u32, values: &[Option<f64>]) -> EntityRecord {
    EntityRecord {
        name: format!("Player {index:03}"),
        team: "Team".to_string(),
        league: "ENG-Premier League".to_string(),
        position: "Midfielder".to_string(),
        nationality: None,
        age,
        minutes: 1_000 + index as u32,
        metrics: METRICS
            .iter()
            .zip(values)
            .filter_map(|(m, v)| v.map(|v| (m.to_string(), v)))
            .collect(),
    }
}

fn record_strategy() -> impl Strategy<Value = (u32, Vec<Option<f64>>)> {
    (
        17u32..36,
        prop::collection::vec(prop::option::weighted(0.9, 0.0f64..40.0), METRICS.len()),
    )
}

fn weights_strategy() -> impl Strategy<Value = BTreeMap<String, f64>> {
    prop::collection::vec(0.0f64..1.0, METRICS.len()).prop_map(|ws| {
        METRICS
            .iter()
            .zip(ws)
            .map(|(m, w)| (m.to_string(), w))
            .collect()
    })
}

fn names(ranked: &[scout_core::models::RankedCandidate]) -> Vec<String> {
    ranked.iter().map(|c| c.entity.name.clone()).collect()
}

proptest! {
    #[test]
    fn prop_uniform_weight_scaling_preserves_order(
        rows in prop::collection::vec(record_strategy(), 1..30),
        weights in weights_strategy(),
        age_factor in 0.0f64..0.2,
        scale in prop::sample::select(vec![0.25f64, 0.5, 2.0, 4.0, 8.0]),
    ) {
        let records: Vec<EntityRecord> = rows
            .iter()
            .enumerate()
            .map(|(i, (age, values))| make_record(i, *age, values))
            .collect();
        let pool: Vec<&EntityRecord> = records.iter().collect();

        let mut weights = weights;
        weights.insert("age_factor".to_string(), age_factor);
        let base = WeightMap::new(weights).unwrap();
        let scaled = base.scaled(scale).unwrap();

        let engine = ScoringEngine::new(&ScoringConfig::default());
        prop_assert_eq!(
            names(&engine.score_pool(&pool, &base)),
            names(&engine.score_pool(&pool, &scaled))
        );
    }

    #[test]
    fn prop_younger_never_ranks_below_older_twin(
        values in prop::collection::vec(prop::option::weighted(0.9, 0.0f64..40.0), METRICS.len()),
        others in prop::collection::vec(record_strategy(), 0..10),
        weights in weights_strategy(),
        age_factor in 0.001f64..1.0,
        young_age in 17u32..30,
        gap in 1u32..8,
    ) {
        let mut records: Vec<EntityRecord> = others
            .iter()
            .enumerate()
            .map(|(i, (age, vals))| make_record(i, *age, vals))
            .collect();
        let mut young = make_record(900, young_age, &values);
        young.name = "Twin Young".to_string();
        let mut old = make_record(901, young_age + gap, &values);
        old.name = "Twin Old".to_string();
        records.push(young);
        records.push(old);
        let pool: Vec<&EntityRecord> = records.iter().collect();

        let mut weights = weights;
        weights.insert("age_factor".to_string(), age_factor);
        let weights = WeightMap::new(weights).unwrap();

        let ranked = ScoringEngine::new(&ScoringConfig::default()).score_pool(&pool, &weights);
        let score_of = |name: &str| {
            ranked
                .iter()
                .find(|c| c.entity.name == name)
                .map(|c| c.composite_score)
                .unwrap()
        };
        prop_assert!(score_of("Twin Young") >= score_of("Twin Old"));
    }

    #[test]
    fn prop_prospect_buckets_follow_rank_order(
        rows in prop::collection::vec(record_strategy(), 1..30),
        weights in weights_strategy(),
        age_factor in 0.0f64..1.0,
    ) {
        let records: Vec<EntityRecord> = rows
            .iter()
            .enumerate()
            .map(|(i, (age, values))| make_record(i, *age, values))
            .collect();
        let pool: Vec<&EntityRecord> = records.iter().collect();

        let mut weights = weights;
        weights.insert("age_factor".to_string(), age_factor);
        let weights = WeightMap::new(weights).unwrap();

        let ranked = ScoringEngine::new(&ScoringConfig::default()).score_prospects(&pool, &weights);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].bucket.is_some());
            prop_assert!(pair[0].bucket <= pair[1].bucket);
        }
    }
}
