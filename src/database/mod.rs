// ABOUTME: Nutrition reference repository abstraction and backend implementations
// ABOUTME: Defines the read-only lookup trait used by candidate search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Reference Repository
//!
//! The engine reads per-100g macro data from an external reference collection
//! through [`NutritionReferenceRepository`]. Backends:
//!
//! - [`SqliteReferenceRepository`]: local `SQLite` table (default feature)
//! - `PostgresReferenceRepository`: `PostgreSQL` table (feature `postgresql`)
//! - [`InMemoryReferenceRepository`]: fixture rows held in memory
//! - [`CachingReferenceRepository`]: TTL + LRU decorator around any backend

use async_trait::async_trait;
use nutrition_core::models::ReferenceIngredient;

use crate::errors::AppResult;

/// Query result caching decorator
pub mod caching;
/// Backend selection from a connection string
pub mod factory;
/// In-memory fixture backend
pub mod memory;
/// `PostgreSQL` backend
#[cfg(feature = "postgresql")]
pub mod postgres;
/// `SQLite` backend
pub mod sqlite;

pub use caching::CachingReferenceRepository;
pub use factory::{connect, detect_database_type, DatabaseType};
pub use memory::InMemoryReferenceRepository;
#[cfg(feature = "postgresql")]
pub use postgres::PostgresReferenceRepository;
pub use sqlite::SqliteReferenceRepository;

/// Read-only access to the nutrition reference collection
#[async_trait]
pub trait NutritionReferenceRepository: Send + Sync {
    /// Rows whose name contains `fragment` (case-insensitive)
    ///
    /// Only rows with all five macro columns present are returned, ordered by
    /// name, at most `limit` of them.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend query fails
    async fn search_by_name(&self, fragment: &str, limit: u32)
        -> AppResult<Vec<ReferenceIngredient>>;
}

/// Escape `LIKE` wildcards so a fragment matches literally
///
/// Pair with `ESCAPE '\'` in the query.
#[must_use]
pub fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
