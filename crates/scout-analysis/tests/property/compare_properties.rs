//! Property tests: comparison symmetry over arbitrary fixture pairs.

use proptest::prelude::*;
use scout_analysis::AnalysisRouter;
use scout_core::config::{RouterConfig, ScoringConfig};
use scout_core::models::{CompareRequest, RequestVariant};
use test_fixtures::fixture_snapshot;

fn compare(a: &str, b: &str) -> RequestVariant {
    RequestVariant::Compare(CompareRequest {
        names: vec![a.to_string(), b.to_string()],
        metrics: vec![],
        min_minutes: None,
    })
}

proptest! {
    #[test]
    fn swapping_names_inverts_every_delta(i in 0usize..24, j in 0usize..24) {
        prop_assume!(i != j);
        let snapshot = fixture_snapshot();
        let router = AnalysisRouter::new(RouterConfig::default(), ScoringConfig::default(), 0.82);
        let a = snapshot.records()[i].name.clone();
        let b = snapshot.records()[j].name.clone();

        let forward = router.route(&compare(&a, &b), &snapshot).unwrap();
        let backward = router.route(&compare(&b, &a), &snapshot).unwrap();

        let ab = &forward.comparison.as_ref().unwrap().pairs[0];
        let ba = &backward.comparison.as_ref().unwrap().pairs[0];
        prop_assert_eq!(&ab.left, &a);
        prop_assert_eq!(&ba.left, &b);
        prop_assert_eq!(ab.deltas.len(), ba.deltas.len());
        for (metric, delta) in &ab.deltas {
            prop_assert_eq!(ba.deltas.get(metric).copied(), Some(-delta));
        }
        prop_assert_eq!(forward.candidates, backward.candidates);
    }
}
