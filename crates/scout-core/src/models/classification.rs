use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DegradationEvent, RequestVariant};

/// Confidence score clamped to [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Confidence(f64);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0.0);

    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// One strategy in the ordered classification sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    PatternMatch,
    EntityExtraction,
    ExternalInterpretation,
    Fallback,
}

impl Tier {
    /// Fixed confidence assigned when this tier produces a result.
    pub fn confidence(self) -> Confidence {
        match self {
            Tier::PatternMatch => Confidence::new(0.9),
            Tier::EntityExtraction => Confidence::new(0.7),
            Tier::ExternalInterpretation => Confidence::new(0.8),
            Tier::Fallback => Confidence::ZERO,
        }
    }

    /// State entered when this tier accepts.
    pub fn matched_state(self) -> ClassificationState {
        match self {
            Tier::PatternMatch => ClassificationState::PatternMatched,
            Tier::EntityExtraction => ClassificationState::EntityExtracted,
            Tier::ExternalInterpretation => ClassificationState::AIEnhanced,
            Tier::Fallback => ClassificationState::Fallback,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::PatternMatch => "pattern_match",
            Tier::EntityExtraction => "entity_extraction",
            Tier::ExternalInterpretation => "external_interpretation",
            Tier::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification state machine.
///
/// `Unclassified → {PatternMatched | EntityExtracted | AIEnhanced} → Resolved`,
/// or `Unclassified → Fallback`. `Resolved` and `Fallback` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationState {
    Unclassified,
    PatternMatched,
    EntityExtracted,
    AIEnhanced,
    Fallback,
    Resolved,
}

impl ClassificationState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Resolved | Self::Fallback)
    }

    pub fn can_transition_to(self, next: ClassificationState) -> bool {
        use ClassificationState::*;
        matches!(
            (self, next),
            (Unclassified, PatternMatched)
                | (Unclassified, EntityExtracted)
                | (Unclassified, AIEnhanced)
                | (Unclassified, Fallback)
                | (PatternMatched, Resolved)
                | (EntityExtracted, Resolved)
                | (AIEnhanced, Resolved)
        )
    }
}

/// Outcome of classifying one query. Exactly one per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub request: RequestVariant,
    pub tier: Tier,
    pub confidence: Confidence,
    /// Terminal state: `Resolved` or `Fallback`.
    pub state: ClassificationState,
    /// Every state visited, starting at `Unclassified`.
    pub trail: Vec<ClassificationState>,
    /// Tier failures absorbed on the way to this result.
    #[serde(default)]
    pub degradations: Vec<DegradationEvent>,
}

impl ClassificationResult {
    pub fn is_resolved(&self) -> bool {
        self.state == ClassificationState::Resolved
    }
}
