// ABOUTME: Recipe calculation command for the smart-nutrition CLI
// ABOUTME: Reads a request file, runs the calculator, and prints the result as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use serde::Deserialize;
use smart_nutrition::config::EngineConfig;
use smart_nutrition::database;
use smart_nutrition::errors::AppResult;
use smart_nutrition::intelligence::SmartNutritionCalculator;
use smart_nutrition::models::{IngredientLine, SmartNutritionRequest};
use tracing::info;

use super::{print_json, read_json};

/// Accepted request file shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum RequestFile {
    Request(SmartNutritionRequest),
    Lines(Vec<IngredientLine>),
}

impl RequestFile {
    fn into_request(self) -> SmartNutritionRequest {
        match self {
            Self::Request(request) => request,
            Self::Lines(ingredients) => SmartNutritionRequest {
                ingredients,
                servings: None,
            },
        }
    }
}

/// Calculate nutrition for the recipe in `file`
pub async fn run(
    config: &EngineConfig,
    file: &Path,
    servings: Option<f64>,
    concurrent: bool,
) -> AppResult<()> {
    let mut request = read_json::<RequestFile>(file)?.into_request();
    if servings.is_some() {
        request.servings = servings;
    }
    info!(
        lines = request.ingredients.len(),
        "Calculating nutrition for {}",
        file.display()
    );

    let repository =
        database::connect(&config.database.to_connection_string(), &config.cache).await?;
    let calculator = SmartNutritionCalculator::from_config(repository, config)
        .with_concurrent_lookups(concurrent || config.concurrent_lookups);

    let result = calculator.calculate_request(&request).await;
    print_json(&result)
}
