//! Property tests for name folding, similarity, and confidence clamping.

use proptest::prelude::*;
use scout_core::corpus::matching::{fold, levenshtein, similarity};
use scout_core::models::Confidence;

proptest! {
    #[test]
    fn fold_is_idempotent(s in "[A-Za-zÀ-ÿ' .,-]{0,40}") {
        let once = fold(&s);
        prop_assert_eq!(fold(&once), once);
    }

    #[test]
    fn similarity_is_bounded_and_symmetric(a in "[a-z ]{0,16}", b in "[a-z ]{0,16}") {
        let ab = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, similarity(&b, &a));
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    #[test]
    fn confidence_is_clamped(v in proptest::num::f64::ANY) {
        let c = Confidence::new(v).value();
        prop_assert!((0.0..=1.0).contains(&c));
    }
}
