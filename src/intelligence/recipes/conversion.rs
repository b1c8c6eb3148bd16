// ABOUTME: Unit conversion utilities for recipe ingredients
// ABOUTME: Converts mass, volume, and count units to grams using ingredient-aware densities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient-aware unit conversion
//!
//! Resolution order, first match wins:
//!
//! 1. Mass units (g, kg, oz, lb and their spellings) convert directly.
//! 2. Any unit containing "cup" uses a grams-per-cup value picked by keyword
//!    from the ingredient name.
//! 3. Metric volume (ml, l) converts to millilitres, with oils at 0.92 g/ml.
//! 4. Count units ("whole", "piece", "pieces", or none) use a per-item weight
//!    picked by keyword from the ingredient name.
//! 5. Spoons and a handful of other tokens use a fixed table; anything else
//!    counts as 100 g per unit.
//!
//! Conversion never fails. Unrecognised input degrades to an estimate.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Weight conversion constants (to grams)
const GRAMS_PER_KG: f64 = 1000.0;
const GRAMS_PER_OZ: f64 = 28.35;
const GRAMS_PER_LB: f64 = 453.59;

const ML_PER_LITER: f64 = 1000.0;
const OIL_GRAMS_PER_ML: f64 = 0.92;

/// Grams per cup when no keyword group matches
const DEFAULT_GRAMS_PER_CUP: f64 = 240.0;
/// Grams per item when no keyword matches
const DEFAULT_GRAMS_PER_ITEM: f64 = 100.0;
/// Grams per unit for unrecognised units
const DEFAULT_GRAMS_PER_UNIT: f64 = 100.0;

static MASS_UNITS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for unit in ["g", "gr", "gram", "grams", "gramme", "grammes"] {
        m.insert(unit, 1.0);
    }
    for unit in ["kg", "kgs", "kilo", "kilos", "kilogram", "kilograms"] {
        m.insert(unit, GRAMS_PER_KG);
    }
    for unit in ["oz", "ounce", "ounces"] {
        m.insert(unit, GRAMS_PER_OZ);
    }
    for unit in ["lb", "lbs", "pound", "pounds"] {
        m.insert(unit, GRAMS_PER_LB);
    }
    m
});

/// Grams per cup by ingredient keyword group, checked in order
const CUP_DENSITIES: &[(&[&str], f64)] = &[
    // Liquids
    (&["milk", "water", "broth", "stock", "juice", "wine"], 240.0),
    // Fats
    (&["oil", "butter"], 220.0),
    // Powders
    (&["flour", "powder", "sugar", "salt"], 200.0),
    // Grains
    (&["rice", "quinoa", "grain", "pasta"], 185.0),
    // Chopped vegetables
    (&["onion", "carrot", "pepper", "vegetable"], 150.0),
];

/// Typical weight of one item by ingredient keyword, checked in order
const ITEM_WEIGHTS: &[(&str, f64)] = &[
    ("apple", 180.0),
    ("banana", 120.0),
    ("orange", 150.0),
    ("tomato", 120.0),
    ("onion", 110.0),
    ("potato", 200.0),
    ("egg", 50.0),
    ("avocado", 200.0),
];

static FIXED_UNITS: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for unit in ["tsp", "teaspoon", "teaspoons"] {
        m.insert(unit, 5.0);
    }
    for unit in ["tbsp", "tablespoon", "tablespoons"] {
        m.insert(unit, 15.0);
    }
    m.insert("piece", DEFAULT_GRAMS_PER_ITEM);
    m.insert("whole", DEFAULT_GRAMS_PER_ITEM);
    m
});

/// Convert a quantity in `unit` of `ingredient_name` to grams
///
/// Always returns a finite value for a finite `quantity`. Zero and negative
/// quantities pass through proportionally.
#[must_use]
pub fn to_grams(quantity: f64, unit: &str, ingredient_name: &str) -> f64 {
    let unit = unit.trim().to_lowercase();
    let name = ingredient_name.to_lowercase();

    if let Some(factor) = MASS_UNITS.get(unit.as_str()) {
        return quantity * factor;
    }

    if unit.contains("cup") {
        return quantity * grams_per_cup(&name);
    }

    if let Some(ml) = to_milliliters(quantity, &unit) {
        let density = if name.contains("oil") {
            OIL_GRAMS_PER_ML
        } else {
            1.0
        };
        return ml * density;
    }

    if is_count_unit(&unit) {
        return quantity * grams_per_item(&name);
    }

    quantity
        * FIXED_UNITS
            .get(unit.as_str())
            .copied()
            .unwrap_or(DEFAULT_GRAMS_PER_UNIT)
}

/// Whether `unit` is one of the recognised mass units
#[must_use]
pub fn is_mass_unit(unit: &str) -> bool {
    MASS_UNITS.contains_key(unit.trim().to_lowercase().as_str())
}

/// Grams per cup for an ingredient name (lowercase)
#[must_use]
pub fn grams_per_cup(name: &str) -> f64 {
    CUP_DENSITIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map_or(DEFAULT_GRAMS_PER_CUP, |(_, grams)| *grams)
}

/// Weight of one item for an ingredient name (lowercase)
#[must_use]
pub fn grams_per_item(name: &str) -> f64 {
    ITEM_WEIGHTS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or(DEFAULT_GRAMS_PER_ITEM, |(_, grams)| *grams)
}

fn to_milliliters(quantity: f64, unit: &str) -> Option<f64> {
    if unit.contains("ml") || unit.contains("milliliter") || unit.contains("millilitre") {
        Some(quantity)
    } else if unit == "l" || unit.contains("liter") || unit.contains("litre") {
        Some(quantity * ML_PER_LITER)
    } else {
        None
    }
}

fn is_count_unit(unit: &str) -> bool {
    matches!(unit, "" | "whole" | "piece" | "pieces")
}
