//! Weight maps: metric name → weight, validated finite.
//!
//! A weight map may carry the special `age_factor` entry, which is not a
//! metric but the coefficient of the youth term.

use std::collections::BTreeMap;

use scout_core::config::ScoringConfig;
use scout_core::constants::AGE_FACTOR;
use scout_core::errors::ScoringError;

/// Validated weight map. Weights need not sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMap {
    weights: BTreeMap<String, f64>,
}

impl WeightMap {
    /// Build a weight map, rejecting NaN and infinite weights.
    pub fn new(weights: BTreeMap<String, f64>) -> Result<Self, ScoringError> {
        if let Some((metric, value)) = weights.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ScoringError::NonFiniteWeight {
                metric: metric.clone(),
                value: *value,
            });
        }
        Ok(Self { weights })
    }

    /// Equal weight of 1.0 for each metric.
    pub fn uniform<S: AsRef<str>>(metrics: &[S]) -> Self {
        Self {
            weights: metrics
                .iter()
                .map(|m| (m.as_ref().to_string(), 1.0))
                .collect(),
        }
    }

    /// Resolve a named profile from config and merge `overrides` over it.
    pub fn from_profile(
        config: &ScoringConfig,
        profile: &str,
        overrides: &BTreeMap<String, f64>,
    ) -> Result<Self, ScoringError> {
        let mut weights = config
            .profile(profile)
            .ok_or_else(|| ScoringError::UnknownProfile {
                profile: profile.to_string(),
            })?;
        weights.extend(overrides.iter().map(|(k, v)| (k.clone(), *v)));
        Self::new(weights)
    }

    /// Overlay entries from `other` for metrics already present in `self`.
    pub fn overlay_existing(&self, other: &BTreeMap<String, f64>) -> Result<Self, ScoringError> {
        let mut weights = self.weights.clone();
        for (metric, weight) in weights.iter_mut() {
            if let Some(w) = other.get(metric) {
                *weight = *w;
            }
        }
        Self::new(weights)
    }

    /// Every weight multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self, ScoringError> {
        Self::new(
            self.weights
                .iter()
                .map(|(k, v)| (k.clone(), v * factor))
                .collect(),
        )
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.weights.get(metric).copied()
    }

    /// Coefficient of the youth term, if the map carries one.
    pub fn age_factor(&self) -> Option<f64> {
        self.get(AGE_FACTOR)
    }

    /// Metric entries, excluding `age_factor`, in name order.
    pub fn metrics(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights
            .iter()
            .filter(|(k, _)| k.as_str() != AGE_FACTOR)
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// The single highest-weighted metric. Equal weights resolve to the
    /// alphabetically first name.
    pub fn primary_metric(&self) -> Option<&str> {
        self.metrics()
            .fold(None, |best: Option<(&str, f64)>, (name, weight)| match best {
                Some((_, w)) if w >= weight => best,
                _ => Some((name, weight)),
            })
            .map(|(name, _)| name)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn rejects_non_finite_weights() {
        let err = WeightMap::new(map(&[("goals", 1.0), ("assists", f64::INFINITY)])).unwrap_err();
        assert!(matches!(err, ScoringError::NonFiniteWeight { ref metric, .. } if metric == "assists"));
        assert!(WeightMap::new(map(&[("goals", f64::NAN)])).is_err());
    }

    #[test]
    fn primary_metric_breaks_weight_ties_by_name() {
        let weights = WeightMap::new(map(&[("xg", 0.3), ("assists", 0.3), ("age_factor", 5.0)])).unwrap();
        assert_eq!(weights.primary_metric(), Some("assists"));
        assert_eq!(weights.age_factor(), Some(5.0));
        assert_eq!(weights.metrics().count(), 2);
    }

    #[test]
    fn profile_overrides_merge_over_profile() {
        let config = ScoringConfig::default();
        let weights =
            WeightMap::from_profile(&config, "prospect", &map(&[("goals_per_90", 0.9), ("tackles", 0.1)]))
                .unwrap();
        assert_eq!(weights.get("goals_per_90"), Some(0.9));
        assert_eq!(weights.get("tackles"), Some(0.1));
        assert_eq!(weights.get("expected_goals"), Some(0.2));
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = WeightMap::from_profile(&ScoringConfig::default(), "goalkeeping", &BTreeMap::new())
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::UnknownProfile {
                profile: "goalkeeping".into()
            }
        );
    }

    #[test]
    fn overlay_only_touches_existing_metrics() {
        let weights = WeightMap::uniform(&["goals", "assists"]);
        let overlaid = weights.overlay_existing(&map(&[("goals", 3.0), ("tackles", 2.0)])).unwrap();
        assert_eq!(overlaid.get("goals"), Some(3.0));
        assert_eq!(overlaid.get("assists"), Some(1.0));
        assert_eq!(overlaid.get("tackles"), None);
    }
}
