// ABOUTME: PostgreSQL-backed nutrition reference repository using sqlx
// ABOUTME: Same contract as the SQLite backend, using ILIKE for case-insensitive lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `PostgreSQL` reference repository for shared deployments.

use async_trait::async_trait;
use nutrition_core::models::ReferenceIngredient;
use sqlx::{postgres::PgRow, PgPool, Row};
use tracing::info;

use super::{escape_like, NutritionReferenceRepository};
use crate::errors::{AppError, AppResult};

/// Reference rows stored in `PostgreSQL`
#[derive(Clone)]
pub struct PostgresReferenceRepository {
    pool: PgPool,
}

impl PostgresReferenceRepository {
    /// Connect and create the schema if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to PostgreSQL: {e}")))?;

        let repository = Self { pool };
        repository.migrate().await?;
        info!("PostgreSQL reference repository ready");
        Ok(repository)
    }

    /// Create the `nutrition_reference` table
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_reference (
                name TEXT PRIMARY KEY,
                calories_per_100g DOUBLE PRECISION,
                protein_g_per_100g DOUBLE PRECISION,
                carbs_g_per_100g DOUBLE PRECISION,
                fat_g_per_100g DOUBLE PRECISION,
                sodium_mg_per_100g DOUBLE PRECISION
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create nutrition_reference: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl NutritionReferenceRepository for PostgresReferenceRepository {
    async fn search_by_name(
        &self,
        fragment: &str,
        limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        let pattern = format!("%{}%", escape_like(fragment));

        let rows = sqlx::query(
            r"
            SELECT name, calories_per_100g, protein_g_per_100g, carbs_g_per_100g,
                   fat_g_per_100g, sodium_mg_per_100g
            FROM nutrition_reference
            WHERE name ILIKE $1 ESCAPE '\'
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

fn row_to_reference(row: &PgRow) -> AppResult<ReferenceIngredient> {
    Ok(ReferenceIngredient {
        name: row.try_get("name")?,
        calories_per_100g: row.try_get("calories_per_100g")?,
        protein_g_per_100g: row.try_get("protein_g_per_100g")?,
        carbs_g_per_100g: row.try_get("carbs_g_per_100g")?,
        fat_g_per_100g: row.try_get("fat_g_per_100g")?,
        sodium_mg_per_100g: row.try_get("sodium_mg_per_100g")?,
    })
}
