mod cache_config;
mod classifier_config;
pub mod defaults;
mod interpreter_config;
mod observability_config;
mod router_config;
mod scoring_config;

pub use cache_config::CacheConfig;
pub use classifier_config::ClassifierConfig;
pub use interpreter_config::InterpreterConfig;
pub use observability_config::ObservabilityConfig;
pub use router_config::RouterConfig;
pub use scoring_config::{BucketThresholds, ScoringConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{ScoutError, ScoutResult};

/// Top-level configuration, loaded from TOML. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub classifier: ClassifierConfig,
    pub scoring: ScoringConfig,
    pub router: RouterConfig,
    pub cache: CacheConfig,
    pub interpreter: InterpreterConfig,
    pub observability: ObservabilityConfig,
}

impl ScoutConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(s: &str) -> ScoutResult<Self> {
        toml::from_str(s).map_err(|e| ScoutError::ConfigError(e.to_string()))
    }
}
