// ABOUTME: Nutrition intelligence module for recipe analysis
// ABOUTME: Ingredient matching, quantity conversion, and macro aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns free-text recipe ingredients into macro-nutrient totals.

/// Ingredient name matching against the reference collection
pub mod matching;
/// Quantity parsing and unit conversion
pub mod recipes;
/// Recipe nutrition aggregation
pub mod smart_nutrition;

pub use matching::{select_best, IngredientMatcher};
pub use recipes::{parse_quantity, to_grams, ParsedQuantity};
pub use smart_nutrition::{summarize, LineOutcome, SmartNutritionCalculator};
