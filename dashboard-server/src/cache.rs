//! Caching layer for data API responses.
//!
//! Every overview page asks for the same few station pairs, so headway
//! series are cached per (origin stops, destination stops, date). Past
//! service dates never change; today's series grows during the day, so
//! entries expire after a short TTL.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::data::{DataClient, DataError, SingleDayParams};
use crate::domain::HeadwayRecord;

/// Cached headway series.
type HeadwayEntry = Arc<Vec<HeadwayRecord>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Cache for data API responses.
pub struct DataCache {
    headways: MokaCache<SingleDayParams, HeadwayEntry>,
}

impl DataCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let headways = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { headways }
    }

    /// Get a cached headway series.
    pub async fn get_headways(&self, key: &SingleDayParams) -> Option<HeadwayEntry> {
        self.headways.get(key).await
    }

    /// Insert a headway series into the cache.
    pub async fn insert_headways(&self, key: SingleDayParams, entry: HeadwayEntry) {
        self.headways.insert(key, entry).await;
    }

    /// Approximate number of cached series.
    pub fn entry_count(&self) -> u64 {
        self.headways.entry_count()
    }
}

/// Data client with caching.
pub struct CachedDataClient {
    client: DataClient,
    cache: DataCache,
}

impl CachedDataClient {
    /// Create a new cached client.
    pub fn new(client: DataClient, cache_config: &CacheConfig) -> Self {
        Self {
            client,
            cache: DataCache::new(cache_config),
        }
    }

    /// Get headways, using the cache if available.
    ///
    /// Failed fetches are not cached.
    pub async fn get_headways(&self, params: &SingleDayParams) -> Result<HeadwayEntry, DataError> {
        if let Some(cached) = self.cache.get_headways(params).await {
            return Ok(cached);
        }

        debug!(
            date = %params.date,
            cached = self.cache.entry_count(),
            "headways cache miss"
        );
        let series = Arc::new(self.client.get_headways(params).await?);
        self.cache
            .insert_headways(params.clone(), series.clone())
            .await;

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn key(from: &str) -> SingleDayParams {
        SingleDayParams {
            from_stops: vec![from.into()],
            to_stops: vec!["70101".into()],
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    fn series(secs: f64) -> HeadwayEntry {
        Arc::new(vec![HeadwayRecord {
            current_dep_dt: "2024-03-15T08:00:00".into(),
            headway_time_sec: secs,
            benchmark_headway_time_sec: None,
        }])
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn cache_creation() {
        let cache = DataCache::new(&CacheConfig::default());
        assert_eq!(cache.entry_count(), 0);
    }

    #[tokio::test]
    async fn insert_and_get() {
        let cache = DataCache::new(&CacheConfig::default());
        cache.insert_headways(key("70067"), series(300.0)).await;

        let hit = cache.get_headways(&key("70067")).await.unwrap();
        assert_eq!(hit[0].headway_time_sec, 300.0);
        assert!(cache.get_headways(&key("70061")).await.is_none());
    }

    #[tokio::test]
    async fn key_includes_date() {
        let cache = DataCache::new(&CacheConfig::default());
        cache.insert_headways(key("70067"), series(300.0)).await;

        let mut other_day = key("70067");
        other_day.date = NaiveDate::from_ymd_opt(2024, 3, 16).unwrap();
        assert!(cache.get_headways(&other_day).await.is_none());
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = DataCache::new(&CacheConfig {
            ttl: Duration::from_millis(50),
            max_capacity: 10,
        });
        cache.insert_headways(key("70067"), series(300.0)).await;
        assert!(cache.get_headways(&key("70067")).await.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(cache.get_headways(&key("70067")).await.is_none());
    }
}
