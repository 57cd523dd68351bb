//! Default values shared by the config structs.

use std::collections::BTreeMap;

// Classifier
pub const DEFAULT_PATTERN_THRESHOLD: f64 = 0.5;
pub const DEFAULT_EXTRACTION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_INTERPRETATION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_INTERPRETATION_TIMEOUT_MS: u64 = 8_000;
pub const DEFAULT_FUZZY_MATCH_THRESHOLD: f64 = 0.82;

// Scoring
pub const DEFAULT_REFERENCE_AGE: f64 = 23.0;
pub const DEFAULT_ELITE_THRESHOLD: f64 = 0.8;
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.6;
pub const DEFAULT_SOLID_THRESHOLD: f64 = 0.4;
pub const PROSPECT_PROFILE: &str = "prospect";
pub const TACTICAL_PROFILE: &str = "tactical";

// Router
pub const DEFAULT_SEARCH_LIMIT: usize = 25;
pub const DEFAULT_PROSPECT_LIMIT: usize = 10;
pub const DEFAULT_TACTICAL_LIMIT: usize = 10;
pub const DEFAULT_TACTICAL_MIN_MINUTES: u32 = 500;
pub const DEFAULT_PROSPECT_AGE_MAX: u32 = 23;
pub const DEFAULT_PROSPECT_MIN_MINUTES: u32 = 1_000;
pub const DEFAULT_FILTER_MIN_MINUTES: u32 = 500;
pub const DEFAULT_NARRATIVE_MAX_ROWS: usize = 5;

// Cache
pub const DEFAULT_CACHE_CAPACITY: u64 = 512;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;

// Interpreter
pub const DEFAULT_INTERPRETER_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_INTERPRETER_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_INTERPRETER_API_KEY_ENV: &str = "OPENAI_API_KEY";

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_QUERY_LOG_CAPACITY: usize = 10_000;

/// Example queries returned by the fallback tier.
pub fn default_suggestions() -> Vec<String> {
    [
        "Compare Haaland vs Mbappé",
        "Find young midfielders in La Liga",
        "Top scorers in the Premier League",
        "Show me defenders under 25",
        "Who can play alongside Mainoo in Ligue 1?",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Metrics shown side by side in a comparison when the request names none.
pub fn default_comparison_metrics() -> Vec<String> {
    [
        "goals",
        "assists",
        "goals_per_90",
        "assists_per_90",
        "expected_goals",
        "expected_assists",
        "minutes",
        "age",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Built-in weight profiles. Configured profiles with the same name win.
pub fn builtin_profiles() -> BTreeMap<String, BTreeMap<String, f64>> {
    let mut profiles = BTreeMap::new();
    profiles.insert(
        PROSPECT_PROFILE.to_string(),
        build_profile(&[
            ("expected_goals", 0.20),
            ("expected_assists", 0.20),
            ("goals_per_90", 0.15),
            ("assists_per_90", 0.15),
            ("progressive_carries", 0.10),
            ("progressive_passes", 0.10),
            ("minutes", 0.10),
            ("age_factor", 0.05),
        ]),
    );
    profiles.insert(
        "attacking".to_string(),
        build_profile(&[
            ("goals_per_90", 0.30),
            ("expected_goals", 0.25),
            ("assists_per_90", 0.20),
            ("expected_assists", 0.15),
            ("progressive_carries", 0.10),
        ]),
    );
    profiles.insert(
        "defensive".to_string(),
        build_profile(&[
            ("tackles", 0.30),
            ("interceptions", 0.30),
            ("progressive_passes", 0.20),
            ("minutes", 0.20),
        ]),
    );
    profiles
}

fn build_profile(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}
