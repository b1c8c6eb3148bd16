// ABOUTME: Engine-wide constants for ingredient matching and nutrition aggregation
// ABOUTME: Similarity thresholds, repository query limits, and serving defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Default values for the matching and aggregation stages. Runtime overrides
//! live in the main crate's configuration layer; these are the fallbacks.

/// Similarity thresholds used by candidate selection and aggregation
pub mod thresholds {
    /// Candidates scoring below this are dropped from the pool before sorting
    pub const CANDIDATE_ADMISSION_FLOOR: f64 = 0.6;

    /// The aggregator rejects a selected match below this confidence
    pub const MATCH_ACCEPTANCE_FLOOR: f64 = 0.5;

    /// A synonym candidate at or above this score skips the fuzzy pass
    pub const SYNONYM_SHORT_CIRCUIT: f64 = 0.8;

    /// Bonus when both names share an important ingredient keyword
    pub const KEYWORD_BONUS: f64 = 0.1;

    /// Score for names identical after normalization
    pub const EXACT_MATCH_SCORE: f64 = 1.0;

    /// Score when the candidate name contains the input name
    pub const CANDIDATE_CONTAINS_INPUT_SCORE: f64 = 0.95;

    /// Score when the input name contains the candidate name
    pub const INPUT_CONTAINS_CANDIDATE_SCORE: f64 = 0.9;
}

/// Repository query limits
pub mod limits {
    /// Rows fetched per synonym fragment
    pub const SYNONYM_QUERY_LIMIT: u32 = 5;

    /// Rows fetched by the fuzzy substring pass
    pub const FUZZY_QUERY_LIMIT: u32 = 15;

    /// Tokens shorter than this are ignored by word-overlap scoring
    pub const MIN_TOKEN_CHARS: usize = 3;
}

/// Aggregation defaults
pub mod defaults {
    /// Servings used when the caller does not specify any
    pub const SERVINGS: f64 = 2.0;

    /// Unit assumed when neither the line nor its quantity text names one
    pub const FALLBACK_UNIT: &str = "piece";
}
