// ABOUTME: Similarity scoring between an ingredient name and a reference name
// ABOUTME: Combines containment, word-overlap Jaccard, keyword bonus, and wrong-type penalties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Similarity scoring
//!
//! Both names are normalized first. Identical names score 1.0 and containment
//! scores 0.95 or 0.9 depending on direction. Otherwise the score is the
//! Jaccard index over words longer than two characters, adjusted by the
//! keyword bonus and the first applicable wrong-type penalty, clamped to
//! [0, 1].

use std::collections::HashSet;

use nutrition_core::constants::{limits, thresholds};

use super::normalize::normalize_name;
use crate::config::matching::MatchingConfig;

/// Score how well `candidate` matches `input`, in [0, 1]
///
/// The score is asymmetric: the candidate containing the input scores higher
/// than the reverse, and wrong-type rules look for their trigger in `input`.
#[must_use]
pub fn score(input: &str, candidate: &str, config: &MatchingConfig) -> f64 {
    let a = normalize_name(input);
    let b = normalize_name(candidate);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return thresholds::EXACT_MATCH_SCORE;
    }
    if b.contains(a.as_str()) {
        return thresholds::CANDIDATE_CONTAINS_INPUT_SCORE;
    }
    if a.contains(b.as_str()) {
        return thresholds::INPUT_CONTAINS_CANDIDATE_SCORE;
    }

    let mut similarity = jaccard(&word_set(&a), &word_set(&b));

    let shares_keyword = config
        .important_keywords
        .iter()
        .any(|keyword| a.contains(keyword.as_str()) && b.contains(keyword.as_str()));
    if shares_keyword {
        similarity += config.keyword_bonus;
    }

    if let Some(rule) = config
        .wrong_type_rules
        .iter()
        .find(|rule| rule.applies(&a, &b))
    {
        similarity -= rule.penalty;
    }

    similarity.clamp(0.0, 1.0)
}

/// Jaccard index of two word sets; 0.0 when both are empty
#[must_use]
pub fn jaccard(a: &HashSet<&str>, b: &HashSet<&str>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

fn word_set(normalized: &str) -> HashSet<&str> {
    normalized
        .split(' ')
        .filter(|word| word.chars().count() >= limits::MIN_TOKEN_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> MatchingConfig {
        MatchingConfig::default()
    }

    #[test]
    fn test_exact_match_after_normalization() {
        let score = score("Chicken Breast", "chicken, breast", &config());
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_containment_is_directional() {
        let forward = score("olive oil", "oil olive olive oil extra virgin", &config());
        assert!((forward - 0.95).abs() < f64::EPSILON);

        let reverse = score("fresh roma tomato", "tomato", &config());
        assert!((reverse - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_jaccard_with_keyword_bonus() {
        // {chicken, thigh} vs {chicken, broilers, fryers, thigh}: 2/4, plus bonus
        let score = score("chicken thigh", "Chicken, broilers or fryers, thigh", &config());
        assert!((score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_type_penalty_is_applied() {
        // {olive, oil} vs {fish, oil, cod, liver}: 1/5 + 0.1 - 0.6, clamped to 0
        let score = score("olive oil", "Fish oil, cod liver", &config());
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_each_default_wrong_type_penalty() {
        let mut config = config();
        config.keyword_bonus = 0.0;

        // 3/4 shared words minus the salt penalty
        let salt = score("salt caramel sauce", "caramel sauce salt topping", &config);
        assert!((salt - 0.25).abs() < 1e-9, "salt: {salt}");

        // 4/5 shared words minus the butter penalty
        let butter = score(
            "butter spread sweet cream",
            "sweet cream butter spread vegetable",
            &config,
        );
        assert!((butter - 0.1).abs() < 1e-9, "butter: {butter}");

        // 3/4 shared words minus the vinegar penalty
        let vinegar = score("vinegar red aged", "red wine vinegar aged", &config);
        assert!((vinegar - 0.35).abs() < 1e-9, "vinegar: {vinegar}");
    }

    #[test]
    fn test_only_first_wrong_type_rule_applies() {
        let mut config = config();
        config.wrong_type_rules[1].input_terms = vec!["oil".into()];
        config.wrong_type_rules[1].candidate_terms = vec!["cod".into()];
        config.keyword_bonus = 0.0;
        config.wrong_type_rules[0].penalty = 0.1;
        // {canola, oil} vs {fish, oil, cod}: 1/4 - 0.1, second rule ignored
        let score = score("canola oil", "fish oil cod", &config);
        assert!((score - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_empty_names_score_zero() {
        assert!(score("", "salt", &config()).abs() < f64::EPSILON);
        assert!(score("123", "salt", &config()).abs() < f64::EPSILON);
        assert!(score("salt", "  ", &config()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_tokens_are_ignored() {
        let a: HashSet<&str> = ["of", "rice"].into_iter().collect();
        let b: HashSet<&str> = ["rice"].into_iter().collect();
        assert!((jaccard(&a, &b) - 0.5).abs() < f64::EPSILON);
        let expected: HashSet<&str> = ["cup", "rice"].into_iter().collect();
        assert_eq!(word_set("cup of rice"), expected);
        assert!(jaccard(&HashSet::new(), &HashSet::new()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_stays_in_unit_interval() {
        let mut config = config();
        config.keyword_bonus = 1.0;
        let score = score("chicken soup base", "chicken stock cube", &config);
        assert!((0.0..=1.0).contains(&score));
    }
}
