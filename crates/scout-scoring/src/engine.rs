//! Composite scoring over a candidate pool.
//!
//! composite = Σ weight · normalized(metric)
//!           + age_factor · max(0, reference_age − age)   (when present)

use std::collections::BTreeMap;

use scout_core::config::{BucketThresholds, ScoringConfig};
use scout_core::constants::AGE_FACTOR;
use scout_core::models::{EntityRecord, RankedCandidate};
use tracing::debug;

use crate::buckets::bucket_for;
use crate::normalize::MetricRanges;
use crate::order::compare_candidates;
use crate::weights::WeightMap;

pub struct ScoringEngine {
    reference_age: f64,
    buckets: BucketThresholds,
}

impl ScoringEngine {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            reference_age: config.reference_age,
            buckets: config.buckets,
        }
    }

    /// Score and sort every record in `pool`. Normalization is relative to
    /// `pool` only.
    pub fn score_pool(&self, pool: &[&EntityRecord], weights: &WeightMap) -> Vec<RankedCandidate> {
        self.score_inner(pool, weights, false)
    }

    /// Like [`score_pool`](Self::score_pool), additionally assigning each
    /// candidate a prospect bucket.
    pub fn score_prospects(&self, pool: &[&EntityRecord], weights: &WeightMap) -> Vec<RankedCandidate> {
        self.score_inner(pool, weights, true)
    }

    /// Composite divided by the best composite attainable in a pool whose
    /// youngest member is `max_youth` years under the reference age. Lies in
    /// [0, 1] for non-negative weights and preserves composite order.
    pub fn potential_rating(composite: f64, weights: &WeightMap, max_youth: f64) -> f64 {
        let mass: f64 = weights.metrics().map(|(_, w)| w.max(0.0)).sum();
        let youth = weights.age_factor().map_or(0.0, |f| f.max(0.0) * max_youth);
        let ceiling = mass + youth;
        if ceiling <= 0.0 {
            return 0.0;
        }
        composite / ceiling
    }

    fn score_inner(&self, pool: &[&EntityRecord], weights: &WeightMap, bucketed: bool) -> Vec<RankedCandidate> {
        let ranges = MetricRanges::from_pool(pool, weights.metrics().map(|(m, _)| m));
        let age_factor = weights.age_factor();

        let mut scored: Vec<RankedCandidate> = pool
            .iter()
            .map(|entity| {
                let mut contributions = BTreeMap::new();
                let mut composite = 0.0;
                for (metric, weight) in weights.metrics() {
                    let term = weight * ranges.normalize(metric, entity.metric(metric));
                    composite += term;
                    contributions.insert(metric.to_string(), term);
                }
                if let Some(factor) = age_factor {
                    let youth = (self.reference_age - f64::from(entity.age)).max(0.0);
                    let term = factor * youth;
                    composite += term;
                    contributions.insert(AGE_FACTOR.to_string(), term);
                }
                RankedCandidate {
                    entity: (*entity).clone(),
                    composite_score: composite,
                    contributions,
                    bucket: None,
                }
            })
            .collect();

        if bucketed {
            let max_youth = pool
                .iter()
                .map(|e| (self.reference_age - f64::from(e.age)).max(0.0))
                .fold(0.0, f64::max);
            for candidate in &mut scored {
                let rating = Self::potential_rating(candidate.composite_score, weights, max_youth);
                candidate.bucket = Some(bucket_for(rating, &self.buckets));
            }
        }

        let primary = weights.primary_metric();
        scored.sort_by(|a, b| compare_candidates(a, b, primary));

        debug!(
            pool = pool.len(),
            metrics = weights.metrics().count(),
            primary_metric = primary.unwrap_or("none"),
            "scored candidate pool"
        );
        scored
    }
}
