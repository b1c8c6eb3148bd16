// ABOUTME: Reference data commands for the smart-nutrition CLI
// ABOUTME: Ingredient match inspection, unit conversion, and SQLite reference import
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;
use std::sync::Arc;

use smart_nutrition::config::EngineConfig;
use smart_nutrition::database::{self, SqliteReferenceRepository};
use smart_nutrition::errors::{AppError, AppResult};
use smart_nutrition::intelligence::recipes::to_grams;
use smart_nutrition::intelligence::IngredientMatcher;
use smart_nutrition::models::ReferenceIngredient;
use tracing::{info, warn};

use super::{print_json, read_json};

/// Print the match for `name`, or every scored candidate with `all`
pub async fn find(config: &EngineConfig, name: &str, all: bool) -> AppResult<()> {
    let repository =
        database::connect(&config.database.to_connection_string(), &config.cache).await?;
    let matcher = IngredientMatcher::new(repository, Arc::new(config.matching.clone()));

    if all {
        print_json(&matcher.find_candidates(name).await)
    } else {
        print_json(&matcher.find_match(name).await)
    }
}

/// Print the grams for a quantity of an ingredient
pub fn convert(quantity: f64, unit: &str, name: &str) -> AppResult<()> {
    if !quantity.is_finite() {
        return Err(AppError::invalid_input("Quantity must be a finite number"));
    }
    println!("{}", to_grams(quantity, unit, name));
    Ok(())
}

/// Load reference rows from `file` into the SQLite database
pub async fn import(config: &EngineConfig, file: &Path) -> AppResult<()> {
    if !config.database.is_sqlite() {
        return Err(AppError::invalid_input(
            "Import is only supported for SQLite databases",
        ));
    }

    let rows: Vec<ReferenceIngredient> = read_json(file)?;
    let incomplete = rows.iter().filter(|row| !row.is_complete()).count();
    if incomplete > 0 {
        warn!(
            incomplete,
            "Some rows have missing macro columns and will never be matched"
        );
    }

    let repository =
        SqliteReferenceRepository::connect(&config.database.to_connection_string()).await?;
    let written = repository.insert(&rows).await?;
    let total = repository.count().await?;
    info!(written, total, "Reference import complete");
    println!("Imported {written} rows ({total} total)");
    Ok(())
}
