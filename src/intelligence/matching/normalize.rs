// ABOUTME: Ingredient name normalization for similarity scoring
// ABOUTME: Lowercases, replaces non-letters with spaces, and collapses whitespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Normalize an ingredient or reference name for comparison
///
/// "Chicken, broilers or fryers (raw)" becomes "chicken broilers or fryers raw".
/// Digits and punctuation are treated as separators.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let spaced: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphabetic() { c } else { ' ' })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_case() {
        assert_eq!(
            normalize_name("Chicken, broilers or fryers (raw)"),
            "chicken broilers or fryers raw"
        );
        assert_eq!(normalize_name("  Olive   OIL  "), "olive oil");
    }

    #[test]
    fn test_digits_become_separators() {
        assert_eq!(normalize_name("Milk, 2% fat"), "milk fat");
        assert_eq!(normalize_name("123"), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_name("Wheat flour, white, all-purpose");
        assert_eq!(normalize_name(&once), once);
    }
}
