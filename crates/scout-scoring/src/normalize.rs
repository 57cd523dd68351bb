//! Pool-relative min-max normalization.

use std::collections::BTreeMap;

use scout_core::models::EntityRecord;

/// Value assigned to missing metrics and to degenerate ranges.
pub const NEUTRAL: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn is_degenerate(&self) -> bool {
        self.max <= self.min
    }
}

/// Observed range of each metric within one candidate pool.
#[derive(Debug, Clone, Default)]
pub struct MetricRanges {
    ranges: BTreeMap<String, MetricRange>,
}

impl MetricRanges {
    /// Scan `pool` for the finite values of each metric.
    pub fn from_pool<'a>(pool: &[&EntityRecord], metrics: impl IntoIterator<Item = &'a str>) -> Self {
        let mut ranges = BTreeMap::new();
        for metric in metrics {
            let range = pool
                .iter()
                .filter_map(|r| r.metric(metric))
                .fold(None, |acc: Option<MetricRange>, v| match acc {
                    None => Some(MetricRange { min: v, max: v }),
                    Some(r) => Some(MetricRange {
                        min: r.min.min(v),
                        max: r.max.max(v),
                    }),
                });
            if let Some(range) = range {
                ranges.insert(metric.to_string(), range);
            }
        }
        Self { ranges }
    }

    pub fn get(&self, metric: &str) -> Option<MetricRange> {
        self.ranges.get(metric).copied()
    }

    /// Normalize `value` into [0, 1] against the pool range.
    pub fn normalize(&self, metric: &str, value: Option<f64>) -> f64 {
        match (value, self.get(metric)) {
            (Some(v), Some(range)) if !range.is_degenerate() => {
                ((v - range.min) / (range.max - range.min)).clamp(0.0, 1.0)
            }
            _ => NEUTRAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, goals: Option<f64>) -> EntityRecord {
        EntityRecord {
            name: name.into(),
            team: "T".into(),
            league: "L".into(),
            position: "Forward".into(),
            nationality: None,
            age: 22,
            minutes: 1000,
            metrics: goals.into_iter().map(|g| ("goals".to_string(), g)).collect(),
        }
    }

    #[test]
    fn min_max_within_pool() {
        let a = record("a", Some(2.0));
        let b = record("b", Some(10.0));
        let c = record("c", Some(6.0));
        let pool = vec![&a, &b, &c];
        let ranges = MetricRanges::from_pool(&pool, ["goals"]);
        assert_eq!(ranges.normalize("goals", a.metric("goals")), 0.0);
        assert_eq!(ranges.normalize("goals", b.metric("goals")), 1.0);
        assert_eq!(ranges.normalize("goals", c.metric("goals")), 0.5);
    }

    #[test]
    fn missing_and_degenerate_are_neutral() {
        let a = record("a", Some(4.0));
        let b = record("b", Some(4.0));
        let c = record("c", None);
        let pool = vec![&a, &b, &c];
        let ranges = MetricRanges::from_pool(&pool, ["goals", "tackles"]);
        assert_eq!(ranges.normalize("goals", a.metric("goals")), NEUTRAL);
        assert_eq!(ranges.normalize("goals", c.metric("goals")), NEUTRAL);
        assert_eq!(ranges.normalize("tackles", None), NEUTRAL);
    }
}
