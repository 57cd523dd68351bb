use std::collections::BTreeMap;

use scout_core::models::*;

fn record(name: &str) -> EntityRecord {
    EntityRecord {
        name: name.to_string(),
        team: "Team".to_string(),
        league: "ENG-Premier League".to_string(),
        position: "Midfielder".to_string(),
        nationality: None,
        age: 21,
        minutes: 1500,
        metrics: BTreeMap::from([("goals".to_string(), 4.0), ("xg".to_string(), f64::NAN)]),
    }
}

#[test]
fn metric_resolves_virtual_fields_and_skips_non_finite() {
    let r = record("A");
    assert_eq!(r.metric("age"), Some(21.0));
    assert_eq!(r.metric("minutes"), Some(1500.0));
    assert_eq!(r.metric("goals"), Some(4.0));
    assert_eq!(r.metric("xg"), None);
    assert_eq!(r.metric("assists"), None);
}

#[test]
fn tier_confidences_are_fixed() {
    assert_eq!(Tier::PatternMatch.confidence().value(), 0.9);
    assert_eq!(Tier::EntityExtraction.confidence().value(), 0.7);
    assert_eq!(Tier::ExternalInterpretation.confidence().value(), 0.8);
    assert_eq!(Tier::Fallback.confidence().value(), 0.0);
}

#[test]
fn confidence_clamps() {
    assert_eq!(Confidence::new(1.7).value(), 1.0);
    assert_eq!(Confidence::new(-0.2).value(), 0.0);
    assert_eq!(Confidence::new(f64::NAN).value(), 0.0);
}

#[test]
fn state_machine_allows_only_tier_order_transitions() {
    use ClassificationState::*;
    assert!(Unclassified.can_transition_to(PatternMatched));
    assert!(PatternMatched.can_transition_to(Resolved));
    assert!(Unclassified.can_transition_to(Fallback));
    assert!(!Fallback.can_transition_to(Resolved));
    assert!(!Resolved.can_transition_to(Unclassified));
    assert!(!PatternMatched.can_transition_to(EntityExtracted));
    assert!(Fallback.is_terminal());
    assert!(Resolved.is_terminal());
    assert!(!AIEnhanced.is_terminal());
}

#[test]
fn request_variant_is_tagged_by_request_type() {
    let request = RequestVariant::Compare(CompareRequest {
        names: vec!["A".into(), "B".into()],
        metrics: vec![],
        min_minutes: None,
    });
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["request_type"], "compare");
    let back: RequestVariant = serde_json::from_value(json).unwrap();
    assert_eq!(back, request);
    assert_eq!(back.kind(), "compare");
}

#[test]
fn envelope_accessors_tolerate_missing_data() {
    let envelope = ResultEnvelope {
        success: false,
        data: None,
        error: Some(EnvelopeError {
            kind: ErrorKind::HandlerFailure,
            message: "nope".into(),
        }),
        diagnostics: Diagnostics {
            tier: Tier::PatternMatch,
            confidence: Tier::PatternMatch.confidence(),
            state: ClassificationState::Resolved,
            cache_hit: false,
            latency_ms: 0,
        },
    };
    assert!(envelope.candidates().is_empty());
    assert!(envelope.narrative().is_none());
}
