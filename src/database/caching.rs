// ABOUTME: Caching decorator for nutrition reference repositories with TTL and LRU eviction
// ABOUTME: Memoizes search_by_name results per (fragment, limit) to avoid repeated lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use nutrition_core::models::ReferenceIngredient;
use tokio::sync::Mutex;
use tracing::debug;

use super::NutritionReferenceRepository;
use crate::config::environment::DEFAULT_CACHE_MAX_ENTRIES;
use crate::errors::AppResult;

/// Cached query result with expiration
#[derive(Debug, Clone)]
struct CacheEntry {
    rows: Vec<ReferenceIngredient>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(rows: Vec<ReferenceIngredient>, ttl: Duration) -> Self {
        Self {
            rows,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

type CacheKey = (String, u32);

/// Repository decorator that caches successful lookups
///
/// Keys are the lowercased fragment plus the limit. Failed lookups are never
/// cached, so a transient backend error does not stick.
pub struct CachingReferenceRepository {
    inner: Arc<dyn NutritionReferenceRepository>,
    store: Mutex<LruCache<CacheKey, CacheEntry>>,
    ttl: Duration,
}

impl CachingReferenceRepository {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CACHE_MAX_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Wrap `inner` with a cache of at most `max_entries` queries living `ttl`
    ///
    /// A zero `max_entries` falls back to the default capacity.
    #[must_use]
    pub fn new(
        inner: Arc<dyn NutritionReferenceRepository>,
        ttl: Duration,
        max_entries: usize,
    ) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            inner,
            store: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    /// Number of cached queries, including expired ones not yet evicted
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Whether the cache holds no queries
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    /// Drop every cached query
    pub async fn clear(&self) {
        self.store.lock().await.clear();
    }

    async fn cached(&self, key: &CacheKey) -> Option<Vec<ReferenceIngredient>> {
        let mut store = self.store.lock().await;
        // LruCache::get is mutable (updates access order)
        let expired = match store.get(key) {
            Some(entry) if !entry.is_expired() => return Some(entry.rows.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            store.pop(key);
        }
        None
    }
}

#[async_trait]
impl NutritionReferenceRepository for CachingReferenceRepository {
    async fn search_by_name(
        &self,
        fragment: &str,
        limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        let key = (fragment.to_lowercase(), limit);
        if let Some(rows) = self.cached(&key).await {
            debug!(fragment, limit, "Reference cache hit");
            return Ok(rows);
        }

        let rows = self.inner.search_by_name(fragment, limit).await?;
        self.store
            .lock()
            .await
            .push(key, CacheEntry::new(rows.clone(), self.ttl));
        Ok(rows)
    }
}
