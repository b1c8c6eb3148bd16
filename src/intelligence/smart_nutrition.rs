// ABOUTME: Smart nutrition calculator aggregating recipe ingredients into macro totals
// ABOUTME: Parses quantities, matches ingredients, converts to grams, and sums per-line nutrition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Smart Nutrition Calculator
//!
//! For each ingredient line:
//!
//! 1. Parse the leading number from the quantity text. No number means the
//!    line is unmatched and no lookup is made.
//! 2. Pick the unit: explicit `unit`, else the token after the number, else
//!    `"piece"`.
//! 3. Match the name. No match, or confidence below the acceptance floor,
//!    means the line is unmatched.
//! 4. Convert to grams and scale the per-100g macros, rounding each to one
//!    decimal.
//!
//! Totals are the rounded sum of the rounded per-line values. Per-serving
//! values are the rounded totals divided by servings. Zero servings are not
//! guarded and yield `inf`/`NaN`.
//!
//! The calculation never fails: repository errors degrade to unmatched lines.

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use nutrition_core::constants::{defaults, thresholds};
use nutrition_core::models::{
    round1, IngredientLine, NutritionMacros, ResolvedIngredient, SmartNutritionRequest,
    SmartNutritionResult,
};
use tracing::debug;

use super::matching::IngredientMatcher;
use super::recipes::{parse_quantity, to_grams};
use crate::config::environment::EngineConfig;
use crate::config::matching::MatchingConfig;
use crate::database::NutritionReferenceRepository;
use crate::logging::NutritionLogger;

/// Outcome of resolving one ingredient line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Line matched and converted
    Matched(ResolvedIngredient),
    /// Line could not be matched; holds the input name
    Unmatched(String),
}

/// Recipe nutrition calculator
#[derive(Clone)]
pub struct SmartNutritionCalculator {
    matcher: IngredientMatcher,
    acceptance_floor: f64,
    default_servings: f64,
    concurrent_lookups: bool,
}

impl SmartNutritionCalculator {
    /// Create a calculator with default thresholds
    #[must_use]
    pub fn new(
        repository: Arc<dyn NutritionReferenceRepository>,
        matching: Arc<MatchingConfig>,
    ) -> Self {
        Self {
            matcher: IngredientMatcher::new(repository, matching),
            acceptance_floor: thresholds::MATCH_ACCEPTANCE_FLOOR,
            default_servings: defaults::SERVINGS,
            concurrent_lookups: false,
        }
    }

    /// Create a calculator from the engine configuration
    #[must_use]
    pub fn from_config(
        repository: Arc<dyn NutritionReferenceRepository>,
        config: &EngineConfig,
    ) -> Self {
        Self::new(repository, Arc::new(config.matching.clone()))
            .with_acceptance_floor(config.acceptance_floor)
            .with_default_servings(config.default_servings)
            .with_concurrent_lookups(config.concurrent_lookups)
    }

    /// Set the minimum confidence for a match to contribute
    #[must_use]
    pub const fn with_acceptance_floor(mut self, floor: f64) -> Self {
        self.acceptance_floor = floor;
        self
    }

    /// Set the servings used by [`Self::calculate_request`] when none are given
    #[must_use]
    pub const fn with_default_servings(mut self, servings: f64) -> Self {
        self.default_servings = servings;
        self
    }

    /// Resolve lines concurrently in [`Self::calculate_request`]
    #[must_use]
    pub const fn with_concurrent_lookups(mut self, enabled: bool) -> Self {
        self.concurrent_lookups = enabled;
        self
    }

    /// Underlying ingredient matcher
    #[must_use]
    pub const fn matcher(&self) -> &IngredientMatcher {
        &self.matcher
    }

    /// Servings applied when a request omits them
    #[must_use]
    pub const fn default_servings(&self) -> f64 {
        self.default_servings
    }

    /// Calculate nutrition for `lines`, resolving one line at a time
    pub async fn calculate(&self, lines: &[IngredientLine], servings: f64) -> SmartNutritionResult {
        let started = Instant::now();
        let mut outcomes = Vec::with_capacity(lines.len());
        for line in lines {
            outcomes.push(self.resolve_line(line).await);
        }
        Self::finish(outcomes, servings, started)
    }

    /// Calculate nutrition for `lines`, resolving all lines concurrently
    ///
    /// Produces the same result as [`Self::calculate`]; breakdown and
    /// unmatched lists keep input order.
    pub async fn calculate_concurrent(
        &self,
        lines: &[IngredientLine],
        servings: f64,
    ) -> SmartNutritionResult {
        let started = Instant::now();
        let outcomes = join_all(lines.iter().map(|line| self.resolve_line(line))).await;
        Self::finish(outcomes, servings, started)
    }

    /// Calculate nutrition for a request, applying the default servings
    pub async fn calculate_request(&self, request: &SmartNutritionRequest) -> SmartNutritionResult {
        let servings = request.servings.unwrap_or(self.default_servings);
        if self.concurrent_lookups {
            self.calculate_concurrent(&request.ingredients, servings).await
        } else {
            self.calculate(&request.ingredients, servings).await
        }
    }

    /// Resolve one ingredient line
    pub async fn resolve_line(&self, line: &IngredientLine) -> LineOutcome {
        let Some(parsed) = parse_quantity(&line.quantity) else {
            debug!(ingredient = %line.item, quantity = %line.quantity, "Unparseable quantity");
            return LineOutcome::Unmatched(line.item.clone());
        };

        let unit = line
            .explicit_unit()
            .map(str::to_owned)
            .or(parsed.unit)
            .unwrap_or_else(|| defaults::FALLBACK_UNIT.to_owned());

        let Some(candidate) = self.matcher.find_match(&line.item).await else {
            return LineOutcome::Unmatched(line.item.clone());
        };
        if candidate.similarity < self.acceptance_floor {
            debug!(
                ingredient = %line.item,
                similarity = candidate.similarity,
                "Match below acceptance floor"
            );
            return LineOutcome::Unmatched(line.item.clone());
        }

        let grams_used = to_grams(parsed.amount, &unit, &line.item);
        let nutrition = candidate
            .macros_per_100g
            .scaled(grams_used / 100.0)
            .rounded();

        LineOutcome::Matched(ResolvedIngredient {
            input_name: line.item.clone(),
            matched_name: candidate.reference_name,
            confidence: candidate.similarity,
            quantity: parsed.amount,
            unit,
            grams_used,
            nutrition,
        })
    }

    fn finish(outcomes: Vec<LineOutcome>, servings: f64, started: Instant) -> SmartNutritionResult {
        let line_count = outcomes.len();
        let result = summarize(outcomes, servings);
        NutritionLogger::log_calculation(
            line_count,
            result.ingredient_breakdown.len(),
            result.unmatched_ingredients.len(),
            started.elapsed().as_millis(),
        );
        result
    }
}

/// Fold line outcomes into a result
///
/// Totals are rounded after summing the already-rounded line values, and
/// per-serving values are derived from the rounded totals.
#[must_use]
pub fn summarize(outcomes: Vec<LineOutcome>, servings: f64) -> SmartNutritionResult {
    let mut sum = NutritionMacros::default();
    let mut ingredient_breakdown = Vec::new();
    let mut unmatched_ingredients = Vec::new();

    for outcome in outcomes {
        match outcome {
            LineOutcome::Matched(resolved) => {
                sum += resolved.nutrition;
                ingredient_breakdown.push(resolved);
            }
            LineOutcome::Unmatched(name) => unmatched_ingredients.push(name),
        }
    }

    let total_nutrition = sum.rounded();
    let per_serving = total_nutrition.map(|value| round1(value / servings));

    SmartNutritionResult {
        total_nutrition,
        per_serving,
        ingredient_breakdown,
        unmatched_ingredients,
    }
}
