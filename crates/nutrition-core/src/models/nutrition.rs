// ABOUTME: Nutrition models for recipe ingredient analysis
// ABOUTME: IngredientLine, NutritionMacros, ReferenceIngredient, MatchCandidate, and result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ops::AddAssign;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// Round to one decimal place, halves rounding toward positive infinity
///
/// Non-finite values pass through unchanged, so an unguarded division by
/// zero servings surfaces as `inf`/`NaN` rather than a panic.
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Accept a quantity as either a JSON string or a JSON number
fn deserialize_quantity_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum QuantityText {
        Text(String),
        Number(Number),
    }

    match QuantityText::deserialize(deserializer)? {
        QuantityText::Text(text) => Ok(text),
        QuantityText::Number(number) => Ok(number.to_string()),
    }
}

/// One ingredient line of a recipe as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Free-text ingredient name ("chicken breast")
    pub item: String,
    /// Free-text quantity, optionally with a trailing unit ("200", "2 cups")
    ///
    /// JSON numbers are accepted and kept as their decimal text.
    #[serde(deserialize_with = "deserialize_quantity_text")]
    pub quantity: String,
    /// Explicit unit; takes precedence over a unit parsed from `quantity`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl IngredientLine {
    /// Create a line without an explicit unit
    pub fn new(item: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            quantity: quantity.into(),
            unit: None,
        }
    }

    /// Set the explicit unit
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Explicit unit, ignoring empty or whitespace-only values
    #[must_use]
    pub fn explicit_unit(&self) -> Option<&str> {
        self.unit
            .as_deref()
            .map(str::trim)
            .filter(|unit| !unit.is_empty())
    }
}

/// Macro-nutrient amounts, either per 100g or absolute
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionMacros {
    /// Energy in kcal
    pub calories: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Sodium in milligrams
    pub sodium_mg: f64,
}

impl NutritionMacros {
    /// Apply `f` to every macro
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            carbs_g: f(self.carbs_g),
            protein_g: f(self.protein_g),
            fat_g: f(self.fat_g),
            sodium_mg: f(self.sodium_mg),
        }
    }

    /// Multiply every macro by `factor`
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|value| value * factor)
    }

    /// Round every macro to one decimal place
    #[must_use]
    pub fn rounded(self) -> Self {
        self.map(round1)
    }
}

impl AddAssign for NutritionMacros {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.carbs_g += rhs.carbs_g;
        self.protein_g += rhs.protein_g;
        self.fat_g += rhs.fat_g;
        self.sodium_mg += rhs.sodium_mg;
    }
}

/// Row of the external nutrition reference collection
///
/// Any column may be null upstream. Rows with a missing macro are not
/// eligible for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceIngredient {
    /// Reference name ("Chicken, broilers or fryers, breast, meat only")
    pub name: String,
    /// Energy per 100g (kcal)
    pub calories_per_100g: Option<f64>,
    /// Protein per 100g (g)
    pub protein_g_per_100g: Option<f64>,
    /// Carbohydrates per 100g (g)
    pub carbs_g_per_100g: Option<f64>,
    /// Fat per 100g (g)
    pub fat_g_per_100g: Option<f64>,
    /// Sodium per 100g (mg)
    pub sodium_mg_per_100g: Option<f64>,
}

impl ReferenceIngredient {
    /// Create a fully populated reference row
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        sodium_mg: f64,
    ) -> Self {
        Self {
            name: name.into(),
            calories_per_100g: Some(calories),
            protein_g_per_100g: Some(protein_g),
            carbs_g_per_100g: Some(carbs_g),
            fat_g_per_100g: Some(fat_g),
            sodium_mg_per_100g: Some(sodium_mg),
        }
    }

    /// Per-100g macros, or `None` when any column is missing
    #[must_use]
    pub fn macros_per_100g(&self) -> Option<NutritionMacros> {
        Some(NutritionMacros {
            calories: self.calories_per_100g?,
            carbs_g: self.carbs_g_per_100g?,
            protein_g: self.protein_g_per_100g?,
            fat_g: self.fat_g_per_100g?,
            sodium_mg: self.sodium_mg_per_100g?,
        })
    }

    /// Whether every macro column is present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.macros_per_100g().is_some()
    }
}

/// Which matching pass produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Found through a synonym fragment
    Synonym,
    /// Found through raw substring search on the input name
    Fuzzy,
}

/// Scored reference row considered for an ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    /// Name of the reference row
    pub reference_name: String,
    /// Reference macros per 100g
    pub macros_per_100g: NutritionMacros,
    /// Pass that produced this candidate
    pub match_type: MatchType,
    /// Similarity score in [0, 1]
    pub similarity: f64,
}

/// Ingredient line that was matched and converted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIngredient {
    /// Ingredient name as supplied
    pub input_name: String,
    /// Name of the matched reference row
    pub matched_name: String,
    /// Similarity of the chosen match
    pub confidence: f64,
    /// Parsed numeric quantity
    pub quantity: f64,
    /// Effective unit used for conversion
    pub unit: String,
    /// Quantity converted to grams
    pub grams_used: f64,
    /// Absolute contribution of this line, rounded to one decimal
    pub nutrition: NutritionMacros,
}

/// Output of a smart nutrition calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartNutritionResult {
    /// Recipe totals
    pub total_nutrition: NutritionMacros,
    /// Totals divided by servings
    pub per_serving: NutritionMacros,
    /// Matched lines in input order
    pub ingredient_breakdown: Vec<ResolvedIngredient>,
    /// Names of lines that could not be matched, in input order
    pub unmatched_ingredients: Vec<String>,
}

impl SmartNutritionResult {
    /// Number of input lines this result accounts for
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.ingredient_breakdown.len() + self.unmatched_ingredients.len()
    }
}

/// Calculation request in the JSON shape used by API callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartNutritionRequest {
    /// Recipe ingredient lines
    pub ingredients: Vec<IngredientLine>,
    /// Servings; the engine default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_line_accepts_numeric_quantity() {
        let line: IngredientLine =
            serde_json::from_str(r#"{"item": "chicken breast", "quantity": 200, "unit": "g"}"#)
                .unwrap();
        assert_eq!(line.quantity, "200");
        assert_eq!(line.explicit_unit(), Some("g"));

        let line: IngredientLine =
            serde_json::from_str(r#"{"item": "milk", "quantity": 1.5}"#).unwrap();
        assert_eq!(line.quantity, "1.5");

        let line: IngredientLine =
            serde_json::from_str(r#"{"item": "flour", "quantity": "2 cups"}"#).unwrap();
        assert_eq!(line.quantity, "2 cups");

        assert!(serde_json::from_str::<IngredientLine>(r#"{"item": "salt", "quantity": true}"#).is_err());
    }

    #[test]
    fn test_round1_half_rounds_up() {
        assert!((round1(7.25) - 7.3).abs() < 1e-9);
        assert!((round1(-0.25) - -0.2).abs() < 1e-9);
        assert!((round1(148.0) - 148.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round1_passes_non_finite_through() {
        assert!(round1(f64::INFINITY).is_infinite());
        assert!(round1(f64::NAN).is_nan());
    }

    #[test]
    fn test_incomplete_reference_has_no_macros() {
        let mut row = ReferenceIngredient::new("Salt, table", 0.0, 0.0, 0.0, 0.0, 38_758.0);
        assert!(row.is_complete());
        row.fat_g_per_100g = None;
        assert!(row.macros_per_100g().is_none());
    }

    #[test]
    fn test_explicit_unit_ignores_blank() {
        let line = IngredientLine::new("flour", "2 cups").with_unit("  ");
        assert_eq!(line.explicit_unit(), None);
        let line = IngredientLine::new("flour", "2").with_unit(" cup ");
        assert_eq!(line.explicit_unit(), Some("cup"));
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let json = serde_json::to_value(SmartNutritionResult::default()).unwrap();
        assert!(json.get("totalNutrition").is_some());
        assert!(json.get("unmatchedIngredients").is_some());
        assert!(json["perServing"].get("sodium_mg").is_some());
    }

    #[test]
    fn test_request_servings_optional() {
        let request: SmartNutritionRequest =
            serde_json::from_str(r#"{"ingredients":[{"item":"apple","quantity":"1"}]}"#).unwrap();
        assert_eq!(request.servings, None);
        assert_eq!(request.ingredients[0].unit, None);
    }
}
