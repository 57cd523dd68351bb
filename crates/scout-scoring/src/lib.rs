//! # scout-scoring
//!
//! Ranks a candidate pool: min-max normalization relative to the pool,
//! weighted composite with an optional youth term, deterministic
//! tie-breaking, and ordinal prospect buckets.

pub mod buckets;
pub mod engine;
pub mod normalize;
pub mod order;
pub mod weights;

pub use engine::ScoringEngine;
pub use normalize::{MetricRange, MetricRanges};
pub use weights::WeightMap;
