use serde::{Deserialize, Serialize};

use super::defaults;

/// Tier policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Acceptance threshold for the pattern tier. A tier is accepted only
    /// when its confidence is strictly greater than its threshold.
    pub pattern_threshold: f64,
    /// Acceptance threshold for the entity-extraction tier.
    pub extraction_threshold: f64,
    /// Acceptance threshold for the external-interpretation tier.
    pub interpretation_threshold: f64,
    /// Hard deadline for one external interpretation call.
    pub interpretation_timeout_ms: u64,
    /// Minimum normalized similarity for a fuzzy roster match.
    pub fuzzy_match_threshold: f64,
    /// Send queries without relational cues to the interpreter as well.
    pub interpret_without_cue: bool,
    /// Example queries returned when no tier accepts.
    pub suggestions: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            pattern_threshold: defaults::DEFAULT_PATTERN_THRESHOLD,
            extraction_threshold: defaults::DEFAULT_EXTRACTION_THRESHOLD,
            interpretation_threshold: defaults::DEFAULT_INTERPRETATION_THRESHOLD,
            interpretation_timeout_ms: defaults::DEFAULT_INTERPRETATION_TIMEOUT_MS,
            fuzzy_match_threshold: defaults::DEFAULT_FUZZY_MATCH_THRESHOLD,
            interpret_without_cue: false,
            suggestions: defaults::default_suggestions(),
        }
    }
}
