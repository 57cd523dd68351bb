use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::EntityRecord;

/// Ordinal prospect bucket derived from thresholds on the pool-relative
/// composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProspectBucket {
    Elite,
    High,
    Solid,
    Developing,
}

impl fmt::Display for ProspectBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Elite => "Elite",
            Self::High => "High",
            Self::Solid => "Solid",
            Self::Developing => "Developing",
        };
        f.write_str(label)
    }
}

/// A scored entity within one candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub entity: EntityRecord,
    pub composite_score: f64,
    /// Metric → weighted normalized contribution to `composite_score`.
    pub contributions: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<ProspectBucket>,
}
