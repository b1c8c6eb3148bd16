// ABOUTME: Free-text quantity parsing for recipe ingredient lines
// ABOUTME: Extracts a leading number and an optional trailing unit token ("2 cups", "200g")
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use regex::Regex;

/// Leading signed decimal, optionally followed by an alphabetic unit token
/// Stored as Option so a compile failure degrades to "unparseable"
static QUANTITY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*([A-Za-z]+)?").ok());

/// Number and unit extracted from a quantity string
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    /// Numeric amount
    pub amount: f64,
    /// Unit token immediately following the number, if any
    pub unit: Option<String>,
}

/// Parse a free-text quantity
///
/// Returns `None` when the text does not start with a number. Anything after
/// the first unit token is ignored, so "1/2 cup" parses as `1` with no unit.
#[must_use]
pub fn parse_quantity(text: &str) -> Option<ParsedQuantity> {
    let captures = QUANTITY_PATTERN.as_ref()?.captures(text)?;
    let amount = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = captures.get(2).map(|m| m.as_str().to_owned());
    Some(ParsedQuantity { amount, unit })
}
