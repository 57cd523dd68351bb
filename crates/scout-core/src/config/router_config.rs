use serde::{Deserialize, Serialize};

use super::defaults;

/// Defaults the router applies when a request leaves a field unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    pub search_limit: usize,
    pub prospect_limit: usize,
    pub tactical_limit: usize,
    pub tactical_min_minutes: u32,
    pub comparison_metrics: Vec<String>,
    /// Candidates rendered in the chat narrative before "... and N more".
    pub narrative_max_rows: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            search_limit: defaults::DEFAULT_SEARCH_LIMIT,
            prospect_limit: defaults::DEFAULT_PROSPECT_LIMIT,
            tactical_limit: defaults::DEFAULT_TACTICAL_LIMIT,
            tactical_min_minutes: defaults::DEFAULT_TACTICAL_MIN_MINUTES,
            comparison_metrics: defaults::default_comparison_metrics(),
            narrative_max_rows: defaults::DEFAULT_NARRATIVE_MAX_ROWS,
        }
    }
}
