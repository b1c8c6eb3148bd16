// ABOUTME: Recipe quantity handling for nutrition calculation
// ABOUTME: Parses free-text quantities and converts ingredient amounts to grams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipes Module
//!
//! Turns an ingredient line's quantity text into grams:
//!
//! ```text
//! use smart_nutrition::intelligence::recipes::{parse_quantity, to_grams};
//!
//! let parsed = parse_quantity("2 cups").unwrap();      // 2.0, Some("cups")
//! let grams = to_grams(parsed.amount, "cups", "flour"); // 400.0
//! ```

/// Unit conversion utilities for recipe ingredients
pub mod conversion;
/// Free-text quantity parsing
pub mod quantity;

pub use conversion::{grams_per_cup, grams_per_item, is_mass_unit, to_grams};
pub use quantity::{parse_quantity, ParsedQuantity};
