// ABOUTME: In-memory nutrition reference repository for tests, demos, and small fixture sets
// ABOUTME: Applies the same case-insensitive containment and completeness rules as SQL backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use nutrition_core::models::ReferenceIngredient;

use super::NutritionReferenceRepository;
use crate::errors::AppResult;

/// Reference rows held in a `Vec`
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceRepository {
    rows: Vec<ReferenceIngredient>,
}

impl InMemoryReferenceRepository {
    /// Create a repository over `rows`
    #[must_use]
    pub fn new(rows: Vec<ReferenceIngredient>) -> Self {
        let mut rows = rows;
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Self { rows }
    }

    /// Number of stored rows, including incomplete ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl NutritionReferenceRepository for InMemoryReferenceRepository {
    async fn search_by_name(
        &self,
        fragment: &str,
        limit: u32,
    ) -> AppResult<Vec<ReferenceIngredient>> {
        let needle = fragment.to_lowercase();
        Ok(self
            .rows
            .iter()
            .filter(|row| row.is_complete() && row.name.to_lowercase().contains(&needle))
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
