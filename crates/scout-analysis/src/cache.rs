//! Result cache using moka.
//!
//! Keys are blake3 hashes of the folded query plus the serialized
//! resolved request. Values are formatted result data. Hit and miss
//! counts live in the pipeline metrics.

use std::time::Duration;

use moka::sync::Cache;
use scout_core::config::CacheConfig;
use scout_core::corpus::matching::fold;
use scout_core::models::{RequestVariant, ResultData};

pub struct ResultCache {
    cache: Cache<String, ResultData>,
}

impl ResultCache {
    /// `None` when the configured capacity is zero.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        (config.capacity > 0).then(|| Self::new(config.capacity, Duration::from_secs(config.ttl_secs)))
    }

    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub fn key(query: &str, request: &RequestVariant) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(fold(query).as_bytes());
        hasher.update(&[0]);
        match serde_json::to_vec(request) {
            Ok(bytes) => hasher.update(&bytes),
            Err(_) => hasher.update(request.kind().as_bytes()),
        };
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<ResultData> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, data: ResultData) {
        self.cache.insert(key, data);
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use scout_core::models::{ResponseKind, SearchRequest};

    use super::*;

    fn request(pattern: &str) -> RequestVariant {
        RequestVariant::Search(SearchRequest {
            name_pattern: pattern.into(),
            filters: Default::default(),
            limit: None,
        })
    }

    fn data() -> ResultData {
        ResultData {
            kind: ResponseKind::Search,
            candidates: vec![],
            comparison: None,
            narrative: "n".into(),
            insights: vec![],
            suggestions: vec![],
        }
    }

    #[test]
    fn key_ignores_case_and_diacritics_but_not_request() {
        let a = ResultCache::key("Find Mbappé", &request("mbappe"));
        let b = ResultCache::key("find mbappe", &request("mbappe"));
        let c = ResultCache::key("find mbappe", &request("kylian mbappe"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn stores_until_cleared() {
        let cache = ResultCache::new(10, Duration::from_secs(60));
        let key = ResultCache::key("q", &request("q"));
        assert!(cache.get(&key).is_none());
        cache.insert(key.clone(), data());
        assert_eq!(cache.get(&key), Some(data()));
        cache.clear();
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn zero_capacity_disables() {
        let config = CacheConfig {
            capacity: 0,
            ..CacheConfig::default()
        };
        assert!(ResultCache::from_config(&config).is_none());
    }
}
