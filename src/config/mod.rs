// ABOUTME: Configuration module for the nutrition engine
// ABOUTME: Environment settings, matching tables, and configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: database location, servings, thresholds, cache settings
//! - **Matching**: synonym table, important keywords, wrong-type penalties

/// Environment-driven engine configuration
pub mod environment;
/// Configuration error types
pub mod error;
/// Ingredient matching tables and thresholds
pub mod matching;

pub use environment::{CacheConfig, DatabaseUrl, EngineConfig};
pub use error::ConfigError;
pub use matching::{MatchingConfig, WrongTypeRule};
