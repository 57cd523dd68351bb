//! Typed payloads accepted from an external interpreter, and the schema
//! handed to it.
//!
//! Validation is strict: required fields must be present with the right
//! types, and nothing missing is guessed.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::json;

use scout_core::config::defaults;
use scout_core::errors::ClassificationError;
use scout_core::models::{
    CandidateFilters, CompareRequest, ProspectRequest, RequestVariant, SearchRequest,
    TacticalRequest,
};

use crate::vocabulary;

#[derive(Debug, Clone, Default, Deserialize)]
struct FiltersPayload {
    #[serde(default)]
    league: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    age_min: Option<u32>,
    #[serde(default)]
    age_max: Option<u32>,
    #[serde(default)]
    min_minutes: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct SearchPayload {
    name_pattern: String,
    #[serde(default)]
    filters: FiltersPayload,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
struct ComparePayload {
    names: Vec<String>,
    #[serde(default)]
    metrics: Vec<String>,
    #[serde(default)]
    min_minutes: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProspectPayload {
    age_max: u32,
    #[serde(default)]
    min_minutes: Option<u32>,
    #[serde(default)]
    weight_profile: Option<String>,
    #[serde(default)]
    weight_overrides: BTreeMap<String, f64>,
    #[serde(default)]
    filters: FiltersPayload,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
struct TacticalPayload {
    #[serde(default)]
    positional_constraints: Vec<String>,
    priority_metrics: Vec<String>,
    #[serde(default)]
    weight_profile: Option<String>,
    #[serde(default)]
    weight_overrides: BTreeMap<String, f64>,
    #[serde(default)]
    context_entities: Vec<String>,
    #[serde(default)]
    filters: FiltersPayload,
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    reasoning: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "request_type", rename_all = "snake_case")]
enum InterpretedPayload {
    Search(SearchPayload),
    Compare(ComparePayload),
    Prospect(ProspectPayload),
    Tactical(TacticalPayload),
}

fn invalid(reason: impl Into<String>) -> ClassificationError {
    ClassificationError::Validation {
        reason: reason.into(),
    }
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// League and position strings go through the alias tables; unknown
/// values are kept as given.
fn canonical_filters(payload: FiltersPayload) -> CandidateFilters {
    CandidateFilters {
        league: payload
            .league
            .map(|l| vocabulary::canonical_league(&l).map(str::to_string).unwrap_or(l)),
        position: payload
            .position
            .map(|p| vocabulary::canonical_position(&p).map(str::to_string).unwrap_or(p)),
        team: payload.team,
        age_min: payload.age_min,
        age_max: payload.age_max,
        min_minutes: payload.min_minutes,
    }
}

fn canonical_metrics(metrics: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for metric in non_blank(metrics) {
        let metric = vocabulary::canonical_metric(&metric);
        if !out.contains(&metric) {
            out.push(metric);
        }
    }
    out
}

/// Validate an interpreter payload and convert it into a request.
pub fn parse_payload(value: serde_json::Value) -> Result<RequestVariant, ClassificationError> {
    let payload: InterpretedPayload =
        serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;

    let request = match payload {
        InterpretedPayload::Search(p) => RequestVariant::Search(SearchRequest {
            name_pattern: p.name_pattern.trim().to_string(),
            filters: canonical_filters(p.filters),
            limit: p.limit,
        }),
        InterpretedPayload::Compare(p) => {
            let names = non_blank(p.names);
            if names.len() < 2 {
                return Err(invalid(format!(
                    "compare needs at least 2 names, got {}",
                    names.len()
                )));
            }
            RequestVariant::Compare(CompareRequest {
                names,
                metrics: canonical_metrics(p.metrics),
                min_minutes: p.min_minutes,
            })
        }
        InterpretedPayload::Prospect(p) => RequestVariant::Prospect(ProspectRequest {
            age_max: p.age_max,
            min_minutes: p.min_minutes.unwrap_or(defaults::DEFAULT_PROSPECT_MIN_MINUTES),
            weight_profile: p.weight_profile,
            weight_overrides: p.weight_overrides,
            filters: canonical_filters(p.filters),
            limit: p.limit,
        }),
        InterpretedPayload::Tactical(p) => {
            let priority_metrics = canonical_metrics(p.priority_metrics);
            if priority_metrics.is_empty() {
                return Err(invalid("tactical request needs at least one priority metric"));
            }
            RequestVariant::Tactical(TacticalRequest {
                positional_constraints: non_blank(p.positional_constraints)
                    .into_iter()
                    .map(|c| {
                        vocabulary::canonical_position(&c)
                            .map(str::to_string)
                            .unwrap_or(c)
                    })
                    .collect(),
                priority_metrics,
                weight_profile: p.weight_profile,
                weight_overrides: p.weight_overrides,
                context_entities: non_blank(p.context_entities),
                filters: canonical_filters(p.filters),
                limit: p.limit,
                reasoning: p.reasoning.filter(|r| !r.trim().is_empty()),
            })
        }
    };
    Ok(request)
}

/// Machine-readable description of the accepted payloads.
pub fn request_schema() -> serde_json::Value {
    let filters = json!({
        "type": "object",
        "properties": {
            "league": { "type": "string", "enum": vocabulary::LEAGUES },
            "position": { "type": "string", "enum": ["Goalkeeper", "Defender", "Midfielder", "Forward"] },
            "team": { "type": "string" },
            "age_min": { "type": "integer" },
            "age_max": { "type": "integer" },
            "min_minutes": { "type": "integer" }
        }
    });
    json!({
        "oneOf": [
            {
                "type": "object",
                "required": ["request_type", "name_pattern"],
                "properties": {
                    "request_type": { "const": "search" },
                    "name_pattern": { "type": "string" },
                    "filters": filters,
                    "limit": { "type": "integer" }
                }
            },
            {
                "type": "object",
                "required": ["request_type", "names"],
                "properties": {
                    "request_type": { "const": "compare" },
                    "names": { "type": "array", "items": { "type": "string" }, "minItems": 2 },
                    "metrics": { "type": "array", "items": { "type": "string" } },
                    "min_minutes": { "type": "integer" }
                }
            },
            {
                "type": "object",
                "required": ["request_type", "age_max"],
                "properties": {
                    "request_type": { "const": "prospect" },
                    "age_max": { "type": "integer" },
                    "min_minutes": { "type": "integer" },
                    "weight_profile": { "type": "string" },
                    "weight_overrides": { "type": "object", "additionalProperties": { "type": "number" } },
                    "filters": filters,
                    "limit": { "type": "integer" }
                }
            },
            {
                "type": "object",
                "required": ["request_type", "priority_metrics"],
                "properties": {
                    "request_type": { "const": "tactical" },
                    "positional_constraints": { "type": "array", "items": { "type": "string" } },
                    "priority_metrics": { "type": "array", "items": { "type": "string" }, "minItems": 1 },
                    "weight_profile": { "type": "string" },
                    "weight_overrides": { "type": "object", "additionalProperties": { "type": "number" } },
                    "context_entities": { "type": "array", "items": { "type": "string" } },
                    "filters": filters,
                    "limit": { "type": "integer" },
                    "reasoning": { "type": "string" }
                }
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tactical_payload_is_canonicalized() {
        let request = parse_payload(json!({
            "request_type": "tactical",
            "positional_constraints": ["midfielders"],
            "priority_metrics": ["Progressive Passes", "tackles", "tackles"],
            "context_entities": ["Mainoo", " "],
            "filters": { "league": "Ligue 1" }
        }))
        .unwrap();
        let RequestVariant::Tactical(t) = request else {
            panic!("expected tactical");
        };
        assert_eq!(t.positional_constraints, vec!["Midfielder"]);
        assert_eq!(t.priority_metrics, vec!["progressive_passes", "tackles"]);
        assert_eq!(t.context_entities, vec!["Mainoo"]);
        assert_eq!(t.filters.league.as_deref(), Some("FRA-Ligue 1"));
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(parse_payload(json!({ "request_type": "prospect" })).is_err());
        assert!(parse_payload(json!({ "request_type": "search" })).is_err());
        assert!(parse_payload(json!({ "names": ["a", "b"] })).is_err());
    }

    #[test]
    fn wrong_types_and_unknown_variants_are_rejected() {
        assert!(parse_payload(json!({ "request_type": "compare", "names": "a and b" })).is_err());
        assert!(parse_payload(json!({ "request_type": "unresolved", "suggestions": [] })).is_err());
        assert!(parse_payload(json!("tactical")).is_err());
    }

    #[test]
    fn compare_needs_two_names() {
        let err = parse_payload(json!({ "request_type": "compare", "names": ["Rice", ""] })).unwrap_err();
        assert!(matches!(err, ClassificationError::Validation { .. }));
    }

    #[test]
    fn tactical_weights_pass_through() {
        let request = parse_payload(json!({
            "request_type": "tactical",
            "priority_metrics": ["tackles"],
            "weight_profile": "defensive",
            "weight_overrides": { "tackles": 0.6 }
        }))
        .unwrap();
        let RequestVariant::Tactical(t) = request else {
            panic!("expected tactical");
        };
        assert_eq!(t.weight_profile.as_deref(), Some("defensive"));
        assert_eq!(t.weight_overrides.get("tackles"), Some(&0.6));

        let mistyped = json!({
            "request_type": "tactical",
            "priority_metrics": ["tackles"],
            "weight_overrides": { "tackles": "high" }
        });
        assert!(parse_payload(mistyped).is_err());
    }

    #[test]
    fn tactical_needs_a_priority_metric() {
        assert!(parse_payload(json!({ "request_type": "tactical", "priority_metrics": [] })).is_err());
    }

    #[test]
    fn schema_lists_every_request_type() {
        let schema = request_schema();
        let variants = schema["oneOf"].as_array().unwrap();
        let types: Vec<&str> = variants
            .iter()
            .filter_map(|v| v["properties"]["request_type"]["const"].as_str())
            .collect();
        assert_eq!(types, vec!["search", "compare", "prospect", "tactical"]);
    }
}
