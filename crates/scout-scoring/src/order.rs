//! Deterministic candidate ordering.

use std::cmp::Ordering;

use scout_core::models::RankedCandidate;

/// Composite descending, then the raw value of `primary_metric` descending
/// (missing last), then name ascending.
pub fn compare_candidates(
    a: &RankedCandidate,
    b: &RankedCandidate,
    primary_metric: Option<&str>,
) -> Ordering {
    b.composite_score
        .total_cmp(&a.composite_score)
        .then_with(|| match primary_metric {
            Some(metric) => compare_raw(a.entity.metric(metric), b.entity.metric(metric)),
            None => Ordering::Equal,
        })
        .then_with(|| a.entity.name.cmp(&b.entity.name))
}

fn compare_raw(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
