// ABOUTME: Main library entry point for the smart nutrition calculation engine
// ABOUTME: Resolves recipe ingredients to reference data and aggregates macro-nutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Smart Nutrition
//!
//! Calculates calories, carbohydrates, protein, fat and sodium for a recipe
//! given as free-text ingredient lines.
//!
//! ## Architecture
//!
//! - **Intelligence**: quantity parsing, unit conversion, ingredient matching
//!   and aggregation
//! - **Database**: read-only nutrition reference repository backends
//! - **Config**: environment settings and matching tables
//! - **Logging**: structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use smart_nutrition::config::MatchingConfig;
//! use smart_nutrition::database::InMemoryReferenceRepository;
//! use smart_nutrition::intelligence::SmartNutritionCalculator;
//! use smart_nutrition::models::{IngredientLine, ReferenceIngredient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let repository = InMemoryReferenceRepository::new(vec![ReferenceIngredient::new(
//!         "Chicken breast, raw", 165.0, 31.0, 0.0, 3.6, 74.0,
//!     )]);
//!     let calculator = SmartNutritionCalculator::new(
//!         Arc::new(repository),
//!         Arc::new(MatchingConfig::default()),
//!     );
//!
//!     let lines = [IngredientLine::new("chicken breast", "200").with_unit("g")];
//!     let result = calculator.calculate(&lines, 1.0).await;
//!     println!("{} kcal", result.total_nutrition.calories);
//! }
//! ```

/// Configuration management
pub mod config;

/// Nutrition reference repository backends
pub mod database;

/// Error types shared with `nutrition-core`
pub mod errors;

/// Ingredient matching, unit conversion, and aggregation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Data models shared with `nutrition-core`
pub mod models {
    pub use nutrition_core::models::*;
}

/// Engine constants shared with `nutrition-core`
pub mod constants {
    pub use nutrition_core::constants::*;
}
