// ABOUTME: Core data models for the smart nutrition engine
// ABOUTME: Re-exports ingredient, reference, candidate, and result structures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! All models are created per calculation and discarded afterwards. Reference
//! rows mirror the external collection's columns; everything else is produced
//! by the engine.

mod nutrition;

pub use nutrition::{
    round1, IngredientLine, MatchCandidate, MatchType, NutritionMacros, ReferenceIngredient,
    ResolvedIngredient, SmartNutritionRequest, SmartNutritionResult,
};
