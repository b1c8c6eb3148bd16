// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides logging setup, reference fixtures, and scripted repository doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `smart_nutrition`

use std::env;
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use smart_nutrition::config::MatchingConfig;
use smart_nutrition::database::{InMemoryReferenceRepository, NutritionReferenceRepository};
use smart_nutrition::errors::{AppError, AppResult};
use smart_nutrition::intelligence::SmartNutritionCalculator;
use smart_nutrition::models::ReferenceIngredient;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// USDA-style reference rows covering the common test ingredients
pub fn reference_rows() -> Vec<ReferenceIngredient> {
    let mut incomplete = ReferenceIngredient::new("Mango nectar, canned", 51.0, 0.1, 13.1, 0.1, 5.0);
    incomplete.protein_g_per_100g = None;

    vec![
        ReferenceIngredient::new("Chicken breast", 165.0, 31.0, 0.0, 3.6, 74.0),
        ReferenceIngredient::new(
            "Chicken, broilers or fryers, thigh, meat only, raw",
            121.0,
            19.7,
            0.0,
            4.1,
            95.0,
        ),
        ReferenceIngredient::new("Oil, olive, salad or cooking", 884.0, 0.0, 0.0, 100.0, 2.0),
        ReferenceIngredient::new("Fish oil, sardine", 902.0, 0.0, 0.0, 100.0, 0.0),
        ReferenceIngredient::new("Apples, raw, with skin", 52.0, 0.3, 13.8, 0.2, 1.0),
        ReferenceIngredient::new("Wheat flour, white, all-purpose, enriched", 364.0, 10.3, 76.3, 1.0, 2.0),
        ReferenceIngredient::new("Salt, table", 0.0, 0.0, 0.0, 0.0, 38_758.0),
        ReferenceIngredient::new("Mangos, raw", 60.0, 0.8, 15.0, 0.4, 1.0),
        ReferenceIngredient::new("Milk, whole, 3.25% milkfat", 61.0, 3.2, 4.8, 3.3, 43.0),
        incomplete,
    ]
}

/// In-memory repository over [`reference_rows`]
pub fn fixture_repository() -> Arc<dyn NutritionReferenceRepository> {
    Arc::new(InMemoryReferenceRepository::new(reference_rows()))
}

/// Calculator with default matching tables over `repository`
pub fn calculator(repository: Arc<dyn NutritionReferenceRepository>) -> SmartNutritionCalculator {
    init_test_logging();
    SmartNutritionCalculator::new(repository, Arc::new(MatchingConfig::default()))
}

/// Calculator with default matching tables over [`fixture_repository`]
pub fn fixture_calculator() -> SmartNutritionCalculator {
    calculator(fixture_repository())
}

/// Repository whose every lookup fails
pub struct FailingRepository;

#[async_trait]
impl NutritionReferenceRepository for FailingRepository {
    async fn search_by_name(
        &self,
        fragment: &str,
        _limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        Err(AppError::database(format!("connection refused while searching '{fragment}'")))
    }
}

/// Repository that answers only one exact query and fails every other
pub struct SelectiveRepository {
    pub accepted_query: String,
    pub inner: InMemoryReferenceRepository,
}

#[async_trait]
impl NutritionReferenceRepository for SelectiveRepository {
    async fn search_by_name(
        &self,
        fragment: &str,
        limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        if fragment == self.accepted_query {
            self.inner.search_by_name(fragment, limit).await
        } else {
            Err(AppError::database("lookup timed out"))
        }
    }
}

/// Repository that returns the same rows for every query, like a loose
/// full-text search backend
pub struct ScriptedRepository {
    pub rows: Vec<ReferenceIngredient>,
}

#[async_trait]
impl NutritionReferenceRepository for ScriptedRepository {
    async fn search_by_name(
        &self,
        _fragment: &str,
        limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        Ok(self.rows.iter().take(limit as usize).cloned().collect())
    }
}

/// Repository decorator that records every `(fragment, limit)` query
pub struct RecordingRepository {
    inner: Arc<dyn NutritionReferenceRepository>,
    queries: Mutex<Vec<(String, u32)>>,
}

impl RecordingRepository {
    pub fn new(inner: Arc<dyn NutritionReferenceRepository>) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, u32)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NutritionReferenceRepository for RecordingRepository {
    async fn search_by_name(
        &self,
        fragment: &str,
        limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        self.queries
            .lock()
            .unwrap()
            .push((fragment.to_owned(), limit));
        self.inner.search_by_name(fragment, limit).await
    }
}

/// Assert two floats are equal within `1e-9`
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
