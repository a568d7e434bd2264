//! Property tests for edit distances and ranking.
//!
//! `strsim::levenshtein` is the oracle. Substring distance, bounded or not,
//! is checked against a brute-force minimum over every window of the text,
//! which is slow but obviously correct for short strings.

use proptest::prelude::*;

use itinera::fuzzy::substring_distance_within;
use itinera::{substring_distance, FieldWeight, FuzzyMatcher, MatcherOptions};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so random strings actually share characters.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcde]{0,7}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcde ]{0,12}").unwrap()
}

/// Minimum Levenshtein distance from `pattern` to any substring of `text`,
/// including the empty one.
fn brute_force_substring_distance(pattern: &str, text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut best = pattern.chars().count();
    for start in 0..=chars.len() {
        for end in start..=chars.len() {
            let window: String = chars[start..end].iter().collect();
            best = best.min(strsim::levenshtein(pattern, &window));
        }
    }
    best
}

fn text_matcher(threshold: f64) -> FuzzyMatcher<String> {
    let options = MatcherOptions {
        threshold,
        ..MatcherOptions::default()
    };
    FuzzyMatcher::new(&[FieldWeight::new("text", 1.0)], options).unwrap()
}

// ============================================================================
// EDIT DISTANCE
// ============================================================================

proptest! {
    /// Property: substring distance equals the brute-force window minimum
    #[test]
    fn prop_substring_distance_matches_oracle(
        pattern in word_strategy(),
        text in text_strategy()
    ) {
        prop_assert_eq!(
            substring_distance(&pattern, &text),
            brute_force_substring_distance(&pattern, &text)
        );
    }

    /// Property: distance is zero exactly when the pattern occurs verbatim
    #[test]
    fn prop_zero_iff_contained(pattern in word_strategy(), text in text_strategy()) {
        prop_assert_eq!(substring_distance(&pattern, &text) == 0, text.contains(&pattern));
    }

    /// Property: never worse than matching the whole text, never worse than
    /// deleting the whole pattern
    #[test]
    fn prop_substring_distance_bounds(pattern in word_strategy(), text in text_strategy()) {
        let d = substring_distance(&pattern, &text);
        prop_assert!(d <= strsim::levenshtein(&pattern, &text));
        prop_assert!(d <= pattern.chars().count());
    }

    /// Property: the cut-off never changes a distance that fits the bound
    #[test]
    fn prop_bounded_distance_matches_oracle(
        pattern in word_strategy(),
        text in text_strategy(),
        max in 0usize..=4
    ) {
        let expected = brute_force_substring_distance(&pattern, &text);
        prop_assert_eq!(
            substring_distance_within(&pattern, &text, max),
            (expected <= max).then_some(expected)
        );
    }
}

// ============================================================================
// RANKING
// ============================================================================

proptest! {
    /// Property: every score is in [0, 1]
    #[test]
    fn prop_scores_bounded(
        query in "[abcde]{2,6}",
        text in text_strategy(),
        threshold in 0.0f64..=1.0
    ) {
        if let Some(score) = text_matcher(threshold).score(&text, &query) {
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }

    /// Property: rank output is sorted ascending and drawn from the input
    #[test]
    fn prop_rank_sorted_subset(
        query in "[abcde]{2,5}",
        texts in prop::collection::vec(text_strategy(), 0..12)
    ) {
        let ranked = text_matcher(0.4).rank(texts.clone(), &query);

        prop_assert!(ranked.len() <= texts.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].relevance_score <= pair[1].relevance_score);
        }
        for hit in &ranked {
            prop_assert!(texts.contains(&hit.item));
        }
    }

    /// Property: a text containing the query verbatim always matches
    #[test]
    fn prop_verbatim_always_matches(
        query in "[abcde]{2,6}",
        prefix in text_strategy(),
        suffix in text_strategy()
    ) {
        let text = format!("{prefix}{query}{suffix}");
        prop_assert!(text_matcher(0.0).score(&text, &query).is_some());
    }
}
