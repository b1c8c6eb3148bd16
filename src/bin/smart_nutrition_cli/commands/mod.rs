// ABOUTME: Command modules for the smart-nutrition CLI
// ABOUTME: Recipe calculation plus reference lookup, conversion, and import commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculate;
pub mod reference;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use smart_nutrition::errors::{AppError, AppResult};

/// Read and decode a JSON input file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        AppError::invalid_input(format!("Invalid JSON in {}: {e}", path.display()))
    })
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
