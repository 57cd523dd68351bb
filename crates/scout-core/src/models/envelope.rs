use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ClassificationState, Confidence, EntityRecord, RankedCandidate, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Search,
    Comparison,
    Prospects,
    Tactical,
    Suggestions,
}

/// Metric deltas between two compared entities (`left − right`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairwiseDelta {
    pub left: String,
    pub right: String,
    pub deltas: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub entities: Vec<EntityRecord>,
    pub metrics: Vec<String>,
    pub pairs: Vec<PairwiseDelta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultData {
    pub kind: ResponseKind,
    pub candidates: Vec<RankedCandidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    pub narrative: String,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Error taxonomy exposed on envelopes. Only `HandlerFailure` ever reaches a
/// caller; the classifier kinds are recorded in the query log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ClassificationFailure,
    HandlerFailure,
    ExternalServiceFailure,
    ValidationFailure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeError {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub tier: Tier,
    pub confidence: Confidence,
    pub state: ClassificationState,
    pub cache_hit: bool,
    pub latency_ms: u64,
}

/// What `process` returns for every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub success: bool,
    pub data: Option<ResultData>,
    pub error: Option<EnvelopeError>,
    pub diagnostics: Diagnostics,
}

impl ResultEnvelope {
    /// Candidates carried by the envelope, empty on failure.
    pub fn candidates(&self) -> &[RankedCandidate] {
        self.data
            .as_ref()
            .map(|d| d.candidates.as_slice())
            .unwrap_or(&[])
    }

    pub fn narrative(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.narrative.as_str())
    }
}
