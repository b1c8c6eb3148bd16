// ABOUTME: Ingredient matching configuration with synonym table and keyword scoring rules
// ABOUTME: Injected into the matcher so tables can be swapped per locale or replaced in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Ingredient Matching Configuration
//!
//! Holds the synonym table (common recipe phrasing mapped to fragments of
//! reference-collection names), the important keyword list that earns a
//! similarity bonus, and the wrong-type rules that penalise implausible
//! matches such as "oil" resolving to a fish product.
//!
//! The defaults target USDA SR Legacy style names ("Oil, olive, salad or
//! cooking"). A JSON file with the same shape can replace them at runtime.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use nutrition_core::constants::{limits, thresholds};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Penalty applied when the input names one kind of ingredient and the
/// candidate names an incompatible one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrongTypeRule {
    /// Terms that trigger the rule when found in the normalized input
    pub input_terms: Vec<String>,
    /// Terms that mark the candidate as the wrong type
    pub candidate_terms: Vec<String>,
    /// Amount subtracted from the similarity score
    pub penalty: f64,
}

impl WrongTypeRule {
    fn new(input_terms: &[&str], candidate_terms: &[&str], penalty: f64) -> Self {
        Self {
            input_terms: input_terms.iter().map(|t| (*t).to_owned()).collect(),
            candidate_terms: candidate_terms.iter().map(|t| (*t).to_owned()).collect(),
            penalty,
        }
    }

    /// Whether this rule fires for the given normalized names
    #[must_use]
    pub fn applies(&self, input: &str, candidate: &str) -> bool {
        self.input_terms.iter().any(|term| input.contains(term.as_str()))
            && self
                .candidate_terms
                .iter()
                .any(|term| candidate.contains(term.as_str()))
    }
}

/// Matching configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Lowercase recipe phrase to reference-name fragments
    pub synonyms: HashMap<String, Vec<String>>,
    /// Keywords that earn `keyword_bonus` when both names contain one
    pub important_keywords: Vec<String>,
    /// Wrong-type penalties; the first applicable rule wins
    pub wrong_type_rules: Vec<WrongTypeRule>,
    /// Bonus for a shared important keyword
    pub keyword_bonus: f64,
    /// Candidates below this similarity never enter selection
    pub admission_floor: f64,
    /// A synonym candidate at or above this score skips the fuzzy pass
    pub synonym_short_circuit: f64,
    /// Rows requested per synonym fragment
    pub synonym_limit: u32,
    /// Rows requested by the fuzzy pass
    pub fuzzy_limit: u32,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            synonyms: default_synonyms(),
            important_keywords: [
                "chicken", "beef", "oil", "cheese", "tomato", "onion", "butter",
            ]
            .iter()
            .map(|k| (*k).to_owned())
            .collect(),
            wrong_type_rules: vec![
                WrongTypeRule::new(&["oil"], &["fish", "sardine", "whale", "mayonnaise"], 0.6),
                WrongTypeRule::new(&["salt"], &["nut", "bean", "meat", "caramel", "gelato"], 0.5),
                WrongTypeRule::new(&["butter"], &["butterbur", "plant", "vegetable"], 0.7),
                WrongTypeRule::new(&["vinegar"], &["wine", "alcohol"], 0.4),
            ],
            keyword_bonus: thresholds::KEYWORD_BONUS,
            admission_floor: thresholds::CANDIDATE_ADMISSION_FLOOR,
            synonym_short_circuit: thresholds::SYNONYM_SHORT_CIRCUIT,
            synonym_limit: limits::SYNONYM_QUERY_LIMIT,
            fuzzy_limit: limits::FUZZY_QUERY_LIMIT,
        }
    }
}

impl MatchingConfig {
    /// Synonym fragments for an ingredient name (case-insensitive, trimmed)
    #[must_use]
    pub fn synonyms_for(&self, ingredient_name: &str) -> &[String] {
        self.synonyms
            .get(&ingredient_name.trim().to_lowercase())
            .map_or(&[], Vec::as_slice)
    }

    /// Load a configuration from a JSON file
    ///
    /// Fields missing from the file keep their default values. Synonym keys
    /// are lowercased so lookups stay case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
            path: display,
            source,
        })?;
        let config = config.with_normalized_synonyms();
        config.validate()?;
        Ok(config)
    }

    /// Lowercase and trim every synonym key
    #[must_use]
    pub fn with_normalized_synonyms(mut self) -> Self {
        self.synonyms = self
            .synonyms
            .into_iter()
            .map(|(phrase, fragments)| (phrase.trim().to_lowercase(), fragments))
            .collect();
        self
    }

    /// Validate thresholds and limits
    ///
    /// # Errors
    ///
    /// Returns an error if a threshold lies outside [0, 1] or a limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit_interval = 0.0..=1.0;
        if !unit_interval.contains(&self.admission_floor) {
            return Err(ConfigError::InvalidRange("admission_floor must be within [0, 1]"));
        }
        if !unit_interval.contains(&self.synonym_short_circuit) {
            return Err(ConfigError::InvalidRange(
                "synonym_short_circuit must be within [0, 1]",
            ));
        }
        if !unit_interval.contains(&self.keyword_bonus) {
            return Err(ConfigError::InvalidRange("keyword_bonus must be within [0, 1]"));
        }
        if self
            .wrong_type_rules
            .iter()
            .any(|rule| !unit_interval.contains(&rule.penalty))
        {
            return Err(ConfigError::InvalidRange(
                "wrong_type_rules penalties must be within [0, 1]",
            ));
        }
        if self.synonym_limit == 0 || self.fuzzy_limit == 0 {
            return Err(ConfigError::InvalidRange("query limits must be positive"));
        }
        Ok(())
    }
}

fn default_synonyms() -> HashMap<String, Vec<String>> {
    let table: &[(&[&str], &[&str])] = &[
        // === Proteins ===
        (
            &["chicken breast", "chicken breasts", "boneless chicken breast"],
            &["chicken breast", "chicken, broilers or fryers, breast"],
        ),
        (
            &["chicken thigh", "chicken thighs"],
            &["chicken thigh", "chicken, broilers or fryers, thigh"],
        ),
        (&["ground beef", "beef mince", "minced beef"], &["beef, ground", "ground beef"]),
        (&["bacon"], &["pork, cured, bacon"]),
        (&["salmon", "salmon fillet"], &["fish, salmon, atlantic"]),
        (&["egg", "eggs", "large egg", "large eggs"], &["egg, whole, raw"]),
        (&["tofu", "firm tofu"], &["tofu, firm"]),
        // === Dairy ===
        (&["milk", "whole milk"], &["milk, whole"]),
        (&["heavy cream", "whipping cream"], &["cream, fluid, heavy whipping"]),
        (&["butter", "unsalted butter"], &["butter, without salt", "butter, salted"]),
        (&["salted butter"], &["butter, salted"]),
        (&["cheddar", "cheddar cheese"], &["cheese, cheddar"]),
        (&["parmesan", "parmesan cheese"], &["cheese, parmesan"]),
        (&["mozzarella", "mozzarella cheese"], &["cheese, mozzarella"]),
        (&["greek yogurt", "plain yogurt", "yogurt"], &["yogurt, greek, plain"]),
        // === Fats & Oils ===
        (
            &["olive oil", "extra virgin olive oil", "evoo"],
            &["olive oil", "oil, olive"],
        ),
        (
            &["vegetable oil", "canola oil", "cooking oil"],
            &["oil, vegetable", "oil, canola"],
        ),
        // === Grains ===
        (
            &["flour", "all purpose flour", "all-purpose flour", "plain flour"],
            &["wheat flour, white, all-purpose"],
        ),
        (&["rice", "white rice"], &["rice, white, long-grain"]),
        (&["brown rice"], &["rice, brown, long-grain"]),
        (&["pasta", "spaghetti", "penne"], &["pasta, dry"]),
        (&["oats", "rolled oats", "oatmeal"], &["oats"]),
        (&["quinoa"], &["quinoa, uncooked"]),
        // === Vegetables & Fruit ===
        (&["onion", "onions", "yellow onion"], &["onions, raw"]),
        (&["garlic", "garlic clove", "garlic cloves"], &["garlic, raw"]),
        (&["tomato", "tomatoes"], &["tomatoes, red, ripe, raw"]),
        (&["potato", "potatoes"], &["potatoes, flesh and skin, raw"]),
        (&["carrot", "carrots"], &["carrots, raw"]),
        (&["bell pepper", "red bell pepper"], &["peppers, sweet, red, raw"]),
        (&["spinach", "baby spinach"], &["spinach, raw"]),
        (&["apple", "apples"], &["apples, raw, with skin"]),
        (&["banana", "bananas"], &["bananas, raw"]),
        (&["avocado", "avocados"], &["avocados, raw"]),
        (&["lemon juice"], &["lemon juice, raw"]),
        // === Pantry ===
        (&["salt", "table salt", "sea salt"], &["salt, table"]),
        (&["black pepper", "pepper"], &["spices, pepper, black"]),
        (&["sugar", "white sugar", "granulated sugar"], &["sugars, granulated"]),
        (&["brown sugar"], &["sugars, brown"]),
        (&["honey"], &["honey"]),
        (&["soy sauce"], &["soy sauce"]),
        (&["vinegar", "white vinegar"], &["vinegar, distilled"]),
        (&["chicken broth", "chicken stock"], &["soup, chicken broth"]),
        (&["water"], &["beverages, water, tap"]),
    ];

    let mut synonyms = HashMap::new();
    for (phrases, fragments) in table {
        let fragments: Vec<String> = fragments.iter().map(|f| (*f).to_owned()).collect();
        for phrase in *phrases {
            synonyms.insert((*phrase).to_owned(), fragments.clone());
        }
    }
    synonyms
}
