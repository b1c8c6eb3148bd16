// ABOUTME: Integration tests for the caching reference repository decorator
// ABOUTME: Validates cache hits, TTL expiry, LRU bounds, and that failures are not cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{fixture_repository, init_test_logging, FailingRepository, RecordingRepository};
use smart_nutrition::database::{CachingReferenceRepository, NutritionReferenceRepository};
use tokio::time::sleep;

fn recorded() -> Arc<RecordingRepository> {
    init_test_logging();
    Arc::new(RecordingRepository::new(fixture_repository()))
}

#[tokio::test]
async fn test_repeated_query_hits_cache() {
    let inner = recorded();
    let cache = CachingReferenceRepository::new(inner.clone(), Duration::from_secs(60), 10);

    let first = cache.search_by_name("Olive", 5).await.unwrap();
    let second = cache.search_by_name("olive", 5).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(inner.queries().len(), 1);
    assert_eq!(cache.len().await, 1);
}

#[tokio::test]
async fn test_limit_is_part_of_the_key() {
    let inner = recorded();
    let cache = CachingReferenceRepository::new(inner.clone(), Duration::from_secs(60), 10);

    cache.search_by_name("oil", 1).await.unwrap();
    cache.search_by_name("oil", 5).await.unwrap();
    assert_eq!(inner.queries().len(), 2);
}

#[tokio::test]
async fn test_expired_entries_are_refetched() {
    let inner = recorded();
    let cache = CachingReferenceRepository::new(inner.clone(), Duration::from_millis(20), 10);

    cache.search_by_name("salt", 5).await.unwrap();
    sleep(Duration::from_millis(50)).await;
    cache.search_by_name("salt", 5).await.unwrap();
    assert_eq!(inner.queries().len(), 2);
}

#[tokio::test]
async fn test_capacity_evicts_least_recently_used() {
    let inner = recorded();
    let cache = CachingReferenceRepository::new(inner.clone(), Duration::from_secs(60), 2);

    cache.search_by_name("apple", 5).await.unwrap();
    cache.search_by_name("mango", 5).await.unwrap();
    cache.search_by_name("salt", 5).await.unwrap();
    assert_eq!(cache.len().await, 2);

    // "apple" was evicted, "salt" is still cached
    cache.search_by_name("salt", 5).await.unwrap();
    cache.search_by_name("apple", 5).await.unwrap();
    assert_eq!(inner.queries().len(), 4);
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    init_test_logging();
    let cache = CachingReferenceRepository::new(Arc::new(FailingRepository), Duration::from_secs(60), 10);

    assert!(cache.search_by_name("salt", 5).await.is_err());
    assert!(cache.is_empty().await);

    cache.clear().await;
    assert!(cache.search_by_name("salt", 5).await.is_err());
}
