// ABOUTME: Integration tests for the SQLite nutrition reference repository
// ABOUTME: Validates schema creation, upserts, LIKE escaping, and completeness filtering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{assert_close, calculator, init_test_logging, reference_rows};
use smart_nutrition::config::CacheConfig;
use smart_nutrition::database::{self, NutritionReferenceRepository, SqliteReferenceRepository};
use smart_nutrition::models::{IngredientLine, ReferenceIngredient};
use tempfile::TempDir;

async fn seeded_repository() -> SqliteReferenceRepository {
    init_test_logging();
    let repository = SqliteReferenceRepository::connect("sqlite::memory:")
        .await
        .unwrap();
    repository.insert(&reference_rows()).await.unwrap();
    repository
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_ordered_by_name() {
    let repository = seeded_repository().await;
    let rows = repository.search_by_name("CHICKEN", 10).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Chicken breast",
            "Chicken, broilers or fryers, thigh, meat only, raw"
        ]
    );
}

#[tokio::test]
async fn test_search_respects_limit() {
    let repository = seeded_repository().await;
    let rows = repository.search_by_name("oil", 1).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn test_incomplete_rows_are_filtered() {
    let repository = seeded_repository().await;
    assert_eq!(repository.count().await.unwrap(), 10);
    let rows = repository.search_by_name("mango", 10).await.unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Mangos, raw"]);
}

#[tokio::test]
async fn test_like_wildcards_match_literally() {
    let repository = seeded_repository().await;
    assert!(repository.search_by_name("_", 10).await.unwrap().is_empty());

    // Only the milk row has a literal percent sign
    let rows = repository.search_by_name("%", 10).await.unwrap();
    assert_eq!(rows.len(), 1);

    let rows = repository.search_by_name("3.25%", 10).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Milk, whole, 3.25% milkfat");
}

#[tokio::test]
async fn test_insert_upserts_existing_names() {
    let repository = seeded_repository().await;
    repository
        .insert(&[ReferenceIngredient::new("Salt, table", 0.0, 0.0, 0.0, 0.0, 39_000.0)])
        .await
        .unwrap();

    assert_eq!(repository.count().await.unwrap(), 10);
    let rows = repository.search_by_name("salt, table", 5).await.unwrap();
    assert_eq!(rows[0].sodium_mg_per_100g, Some(39_000.0));
}

#[tokio::test]
async fn test_calculator_over_sqlite_backend() {
    let repository = Arc::new(seeded_repository().await);
    let lines = [
        IngredientLine::new("chicken breast", "200").with_unit("g"),
        IngredientLine::new("salt", "1 tsp"),
    ];
    let result = calculator(repository).calculate(&lines, 1.0).await;

    assert!(result.unmatched_ingredients.is_empty());
    assert_close(result.total_nutrition.calories, 330.0);
    // 5 g of table salt
    assert_close(result.total_nutrition.sodium_mg, 148.0 + 1937.9);
}

#[tokio::test]
async fn test_factory_creates_file_database() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", dir.path().join("reference.db").display());

    let repository = SqliteReferenceRepository::connect(&url).await.unwrap();
    repository.insert(&reference_rows()).await.unwrap();
    drop(repository);

    let reopened = database::connect(&url, &CacheConfig::default()).await.unwrap();
    let rows = reopened.search_by_name("apples", 5).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(dir.path().join("reference.db").exists());
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let repository = seeded_repository().await;
    repository
        .insert(&[ReferenceIngredient::new("Jalapeño peppers, raw", 29.0, 0.9, 6.5, 0.4, 3.0)])
        .await
        .unwrap();

    let rows = repository.search_by_name("JALAPEÑO", 5).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Jalapeño peppers, raw");
}
