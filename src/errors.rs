// ABOUTME: Error handling re-exports for the smart nutrition engine
// ABOUTME: Exposes AppError, ErrorCode, and AppResult from nutrition-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error types live in `nutrition-core` so that every workspace crate
//! shares one definition. This module re-exports them under the main crate.

pub use nutrition_core::errors::{AppError, AppResult, ErrorCode};
