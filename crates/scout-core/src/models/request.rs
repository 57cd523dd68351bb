use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Optional constraints narrowing the candidate pool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateFilters {
    pub league: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
    pub min_minutes: Option<u32>,
}

impl CandidateFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Name fragment; empty lists the whole filtered pool.
    pub name_pattern: String,
    #[serde(default)]
    pub filters: CandidateFilters,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub names: Vec<String>,
    /// Metrics to diff. Empty means the router's default comparison set.
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default)]
    pub min_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProspectRequest {
    pub age_max: u32,
    pub min_minutes: u32,
    /// Named weight profile; `None` selects the prospect profile.
    #[serde(default)]
    pub weight_profile: Option<String>,
    /// Entries merged over the selected profile.
    #[serde(default)]
    pub weight_overrides: BTreeMap<String, f64>,
    #[serde(default)]
    pub filters: CandidateFilters,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TacticalRequest {
    /// Any-of position constraints, e.g. `["Midfielder"]`.
    #[serde(default)]
    pub positional_constraints: Vec<String>,
    pub priority_metrics: Vec<String>,
    /// Named weight profile; `None` weights the priority metrics equally.
    #[serde(default)]
    pub weight_profile: Option<String>,
    /// Entries merged over the selected weights.
    #[serde(default)]
    pub weight_overrides: BTreeMap<String, f64>,
    /// Entities the result is relative to (partners, players to replace).
    #[serde(default)]
    pub context_entities: Vec<String>,
    #[serde(default)]
    pub filters: CandidateFilters,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnresolvedRequest {
    pub suggestions: Vec<String>,
}

/// The closed set of analysis requests a query can resolve to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "request_type", rename_all = "snake_case")]
pub enum RequestVariant {
    Search(SearchRequest),
    Compare(CompareRequest),
    Prospect(ProspectRequest),
    Tactical(TacticalRequest),
    Unresolved(UnresolvedRequest),
}

impl RequestVariant {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Search(_) => "search",
            Self::Compare(_) => "compare",
            Self::Prospect(_) => "prospect",
            Self::Tactical(_) => "tactical",
            Self::Unresolved(_) => "unresolved",
        }
    }
}
