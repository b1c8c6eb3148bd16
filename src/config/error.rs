// ABOUTME: Configuration error types for engine and matching configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and unreadable config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.

use std::io;

use nutrition_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., threshold not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse an environment value
    #[error("Parse error for {key}: {message}")]
    Parse {
        /// Environment variable or field name
        key: &'static str,
        /// Parser message
        message: String,
    },

    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Config file is not valid JSON for the expected shape
    #[error("Invalid config file {path}: {source}")]
    Json {
        /// Path that failed
        path: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string()).with_source(error)
    }
}
