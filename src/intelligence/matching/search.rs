// ABOUTME: Repository-backed candidate search for ingredient matching
// ABOUTME: Runs the synonym pass and the fuzzy substring pass and scores every row found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Candidate search
//!
//! A repository error ends the pass it occurred in. It is logged and the pass
//! contributes no candidates; the other pass still runs.

use nutrition_core::models::{MatchCandidate, MatchType, ReferenceIngredient};
use tracing::debug;

use super::similarity::score;
use crate::config::matching::MatchingConfig;
use crate::database::NutritionReferenceRepository;
use crate::errors::AppResult;
use crate::logging::NutritionLogger;

/// Candidate search over one repository with one matching configuration
pub struct CandidateSearch<'a> {
    repository: &'a dyn NutritionReferenceRepository,
    config: &'a MatchingConfig,
}

impl<'a> CandidateSearch<'a> {
    /// Create a search over `repository`
    #[must_use]
    pub const fn new(
        repository: &'a dyn NutritionReferenceRepository,
        config: &'a MatchingConfig,
    ) -> Self {
        Self { repository, config }
    }

    /// Synonym pass: look up each fragment mapped from `ingredient_name`
    ///
    /// Rows are scored against the fragment that found them, not the input.
    pub async fn synonym_candidates(&self, ingredient_name: &str) -> Vec<MatchCandidate> {
        let fragments = self.config.synonyms_for(ingredient_name);
        if fragments.is_empty() {
            return Vec::new();
        }

        match self.collect_synonyms(fragments).await {
            Ok(candidates) => {
                debug!(
                    ingredient = ingredient_name,
                    fragments = fragments.len(),
                    candidates = candidates.len(),
                    "Synonym pass complete"
                );
                candidates
            }
            Err(e) => {
                NutritionLogger::log_lookup_failure("synonym", ingredient_name, &e);
                Vec::new()
            }
        }
    }

    /// Fuzzy pass: substring lookup on the raw input, scored against the input
    pub async fn fuzzy_candidates(&self, ingredient_name: &str) -> Vec<MatchCandidate> {
        match self
            .repository
            .search_by_name(ingredient_name, self.config.fuzzy_limit)
            .await
        {
            Ok(rows) => {
                let candidates: Vec<_> = rows
                    .iter()
                    .filter_map(|row| self.candidate(row, ingredient_name, MatchType::Fuzzy))
                    .collect();
                debug!(
                    ingredient = ingredient_name,
                    rows = rows.len(),
                    candidates = candidates.len(),
                    "Fuzzy pass complete"
                );
                candidates
            }
            Err(e) => {
                NutritionLogger::log_lookup_failure("fuzzy", ingredient_name, &e);
                Vec::new()
            }
        }
    }

    async fn collect_synonyms(&self, fragments: &[String]) -> AppResult<Vec<MatchCandidate>> {
        let mut candidates = Vec::new();
        for fragment in fragments {
            let rows = self
                .repository
                .search_by_name(fragment, self.config.synonym_limit)
                .await?;
            candidates.extend(
                rows.iter()
                    .filter_map(|row| self.candidate(row, fragment, MatchType::Synonym)),
            );
        }
        Ok(candidates)
    }

    fn candidate(
        &self,
        row: &ReferenceIngredient,
        query: &str,
        match_type: MatchType,
    ) -> Option<MatchCandidate> {
        let macros_per_100g = row.macros_per_100g()?;
        Some(MatchCandidate {
            reference_name: row.name.clone(),
            macros_per_100g,
            match_type,
            similarity: score(query, &row.name, self.config),
        })
    }
}
