use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One athlete row of the corpus. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub name: String,
    pub team: String,
    /// Competition the entity plays in, e.g. `ENG-Premier League`.
    pub league: String,
    pub position: String,
    #[serde(default)]
    pub nationality: Option<String>,
    pub age: u32,
    /// Sample-size field: minutes played this season.
    pub minutes: u32,
    #[serde(default)]
    pub metrics: BTreeMap<String, f64>,
}

impl EntityRecord {
    /// Raw value of a metric. `age` and `minutes` resolve to the record
    /// fields; non-finite stored values count as missing.
    pub fn metric(&self, name: &str) -> Option<f64> {
        match name {
            "age" => Some(f64::from(self.age)),
            "minutes" => Some(f64::from(self.minutes)),
            _ => self.metrics.get(name).copied().filter(|v| v.is_finite()),
        }
    }
}
