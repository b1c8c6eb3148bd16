// ABOUTME: Ingredient matching engine resolving free-text names to reference rows
// ABOUTME: Combines synonym and fuzzy candidate passes with threshold-based selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ingredient Matching
//!
//! [`IngredientMatcher::find_match`] resolves an ingredient name in up to
//! two passes:
//!
//! 1. **Synonym pass**: the name is looked up in the synonym table and each
//!    mapped fragment is searched in the repository.
//! 2. **Fuzzy pass**: skipped when a synonym candidate already scores at or
//!    above the short-circuit threshold; otherwise the raw name is searched.
//!
//! Candidates from both passes below the admission floor are dropped and the
//! highest-scoring survivor wins. On ties synonym candidates come first.

/// Ingredient name normalization
pub mod normalize;
/// Repository-backed candidate passes
pub mod search;
/// Similarity scoring
pub mod similarity;

use std::sync::Arc;

use nutrition_core::models::MatchCandidate;
use tracing::debug;

pub use normalize::normalize_name;
pub use search::CandidateSearch;
pub use similarity::{jaccard, score};

use crate::config::matching::MatchingConfig;
use crate::database::NutritionReferenceRepository;

/// Resolves ingredient names against a reference repository
#[derive(Clone)]
pub struct IngredientMatcher {
    repository: Arc<dyn NutritionReferenceRepository>,
    config: Arc<MatchingConfig>,
}

impl IngredientMatcher {
    /// Create a matcher over `repository` using `config`
    #[must_use]
    pub const fn new(
        repository: Arc<dyn NutritionReferenceRepository>,
        config: Arc<MatchingConfig>,
    ) -> Self {
        Self { repository, config }
    }

    /// Matching configuration in use
    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Every scored candidate for `ingredient_name`, synonym pass first
    pub async fn find_candidates(&self, ingredient_name: &str) -> Vec<MatchCandidate> {
        let search = CandidateSearch::new(self.repository.as_ref(), &self.config);

        let mut candidates = search.synonym_candidates(ingredient_name).await;
        let short_circuit = candidates
            .iter()
            .any(|c| c.similarity >= self.config.synonym_short_circuit);

        if short_circuit {
            debug!(
                ingredient = ingredient_name,
                "Synonym candidate above short-circuit threshold; skipping fuzzy pass"
            );
        } else {
            candidates.extend(search.fuzzy_candidates(ingredient_name).await);
        }
        candidates
    }

    /// Best candidate for `ingredient_name`, if any clears the admission floor
    pub async fn find_match(&self, ingredient_name: &str) -> Option<MatchCandidate> {
        let candidates = self.find_candidates(ingredient_name).await;
        let best = select_best(candidates, self.config.admission_floor);
        match &best {
            Some(candidate) => debug!(
                ingredient = ingredient_name,
                matched = %candidate.reference_name,
                similarity = candidate.similarity,
                match_type = ?candidate.match_type,
                "Ingredient matched"
            ),
            None => debug!(ingredient = ingredient_name, "No candidate cleared the admission floor"),
        }
        best
    }
}

/// Highest-scoring candidate at or above `admission_floor`
///
/// The sort is stable, so among equal scores the earliest candidate wins.
#[must_use]
pub fn select_best(candidates: Vec<MatchCandidate>, admission_floor: f64) -> Option<MatchCandidate> {
    let mut admitted: Vec<MatchCandidate> = candidates
        .into_iter()
        .filter(|c| c.similarity >= admission_floor)
        .collect();
    admitted.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    admitted.into_iter().next()
}
