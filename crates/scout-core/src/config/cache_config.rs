use serde::{Deserialize, Serialize};

use super::defaults;

/// Result cache configuration. A capacity of 0 disables the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub capacity: u64,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_CACHE_CAPACITY,
            ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
