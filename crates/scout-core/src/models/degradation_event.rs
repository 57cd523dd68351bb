use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ErrorKind;

/// A classifier tier failed and the policy fell through to the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    pub component: String,
    pub kind: ErrorKind,
    pub failure: String,
    pub fallback_used: String,
    pub timestamp: DateTime<Utc>,
}
