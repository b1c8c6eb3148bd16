// ABOUTME: Core types and constants for the smart nutrition calculation engine
// ABOUTME: Foundation crate with error handling, nutrition data models, and engine defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrition Core
//!
//! Foundation crate providing shared types and constants for the smart
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Matching thresholds and aggregation defaults
//! - **models**: Ingredient lines, reference rows, and calculation results

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants (thresholds, limits, defaults)
pub mod constants;

/// Nutrition data models shared by the engine and its repositories
pub mod models;
