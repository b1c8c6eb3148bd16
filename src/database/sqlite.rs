// ABOUTME: SQLite-backed nutrition reference repository using sqlx
// ABOUTME: Creates the nutrition_reference table, imports rows, and serves name lookups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nutrition_core::models::ReferenceIngredient;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

use super::{escape_like, NutritionReferenceRepository};
use crate::errors::{AppError, AppResult};

/// Reference rows stored in a local `SQLite` database
#[derive(Clone)]
pub struct SqliteReferenceRepository {
    pool: SqlitePool,
}

impl SqliteReferenceRepository {
    /// Connect and create the schema if needed
    ///
    /// File databases are created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains(":memory:")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        // Every in-memory connection is a separate database
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect(&connection_options)
                .await
        } else {
            SqlitePool::connect(&connection_options).await
        }
        .map_err(|e| AppError::database(format!("Failed to connect to SQLite: {e}")))?;

        let repository = Self::new(pool);
        repository.migrate().await?;
        info!("SQLite reference repository ready");
        Ok(repository)
    }

    /// Wrap an existing pool without running migrations
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `nutrition_reference` table
    ///
    /// `name_folded` holds the Unicode lowercase name. `SQLite`'s `LOWER()`
    /// only folds ASCII, so searches compare against this column instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_reference (
                name TEXT PRIMARY KEY,
                name_folded TEXT NOT NULL,
                calories_per_100g REAL,
                protein_g_per_100g REAL,
                carbs_g_per_100g REAL,
                fat_g_per_100g REAL,
                sodium_mg_per_100g REAL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create nutrition_reference: {e}")))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_nutrition_reference_name_folded ON nutrition_reference (name_folded)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create name index: {e}")))?;

        Ok(())
    }

    /// Insert or replace reference rows, returning how many were written
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails
    pub async fn insert(&self, rows: &[ReferenceIngredient]) -> AppResult<u64> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin import: {e}")))?;

        let mut written = 0;
        for row in rows {
            let result = sqlx::query(
                r"
                INSERT INTO nutrition_reference (
                    name, name_folded, calories_per_100g, protein_g_per_100g,
                    carbs_g_per_100g, fat_g_per_100g, sodium_mg_per_100g
                ) VALUES ($1, $2, $3, $4, $5, $6, $7)
                ON CONFLICT(name) DO UPDATE SET
                    name_folded = excluded.name_folded,
                    calories_per_100g = excluded.calories_per_100g,
                    protein_g_per_100g = excluded.protein_g_per_100g,
                    carbs_g_per_100g = excluded.carbs_g_per_100g,
                    fat_g_per_100g = excluded.fat_g_per_100g,
                    sodium_mg_per_100g = excluded.sodium_mg_per_100g
                ",
            )
            .bind(&row.name)
            .bind(row.name.to_lowercase())
            .bind(row.calories_per_100g)
            .bind(row.protein_g_per_100g)
            .bind(row.carbs_g_per_100g)
            .bind(row.fat_g_per_100g)
            .bind(row.sodium_mg_per_100g)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::database(format!("Failed to insert reference '{}': {e}", row.name))
            })?;
            written += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit import: {e}")))?;

        debug!(rows = written, "Imported reference rows");
        Ok(written)
    }

    /// Total number of stored rows, including incomplete ones
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM nutrition_reference")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count reference rows: {e}")))?;
        Ok(row.try_get("total")?)
    }
}

#[async_trait]
impl NutritionReferenceRepository for SqliteReferenceRepository {
    async fn search_by_name(
        &self,
        fragment: &str,
        limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));

        let rows = sqlx::query(
            r"
            SELECT name, calories_per_100g, protein_g_per_100g, carbs_g_per_100g,
                   fat_g_per_100g, sodium_mg_per_100g
            FROM nutrition_reference
            WHERE name_folded LIKE $1 ESCAPE '\'
              AND calories_per_100g IS NOT NULL
              AND protein_g_per_100g IS NOT NULL
              AND carbs_g_per_100g IS NOT NULL
              AND fat_g_per_100g IS NOT NULL
              AND sodium_mg_per_100g IS NOT NULL
            ORDER BY name ASC
            LIMIT $2
            ",
        )
        .bind(&pattern)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to search nutrition reference: {e}")))?;

        rows.iter().map(row_to_reference).collect()
    }
}

fn row_to_reference(row: &SqliteRow) -> AppResult<ReferenceIngredient> {
    Ok(ReferenceIngredient {
        name: row.try_get("name")?,
        calories_per_100g: row.try_get("calories_per_100g")?,
        protein_g_per_100g: row.try_get("protein_g_per_100g")?,
        carbs_g_per_100g: row.try_get("carbs_g_per_100g")?,
        fat_g_per_100g: row.try_get("fat_g_per_100g")?,
        sodium_mg_per_100g: row.try_get("sodium_mg_per_100g")?,
    })
}
