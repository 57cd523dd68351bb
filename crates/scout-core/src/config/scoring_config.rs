use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Score thresholds for the ordinal prospect buckets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BucketThresholds {
    pub elite: f64,
    pub high: f64,
    pub solid: f64,
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self {
            elite: defaults::DEFAULT_ELITE_THRESHOLD,
            high: defaults::DEFAULT_HIGH_THRESHOLD,
            solid: defaults::DEFAULT_SOLID_THRESHOLD,
        }
    }
}

/// Scoring engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Age below which the `age_factor` term starts rewarding youth.
    pub reference_age: f64,
    /// Named weight profiles. Key is profile name, value is metric → weight.
    pub profiles: BTreeMap<String, BTreeMap<String, f64>>,
    pub buckets: BucketThresholds,
}

impl ScoringConfig {
    /// Look up a profile, falling back to the built-in set.
    pub fn profile(&self, name: &str) -> Option<BTreeMap<String, f64>> {
        self.profiles
            .get(name)
            .cloned()
            .or_else(|| defaults::builtin_profiles().remove(name))
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            reference_age: defaults::DEFAULT_REFERENCE_AGE,
            profiles: BTreeMap::new(),
            buckets: BucketThresholds::default(),
        }
    }
}
