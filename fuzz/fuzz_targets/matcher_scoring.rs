// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for substring distance and fuzzy ranking.
//!
//! Arbitrary Unicode in, invariants out: distances stay within their bounds,
//! scores stay in [0, 1], rankings come back sorted and never invent items.

#![no_main]

use arbitrary::Arbitrary;
use itinera::{substring_distance, FieldWeight, FuzzyMatcher, MatcherOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RankInput {
    query: String,
    texts: Vec<String>,
    /// Mapped onto [0, 1]
    threshold: u8,
}

fuzz_target!(|input: RankInput| {
    // Cap sizes to avoid timeouts on the quadratic DP
    let query: String = input.query.chars().take(32).collect();
    let texts: Vec<String> = input
        .texts
        .into_iter()
        .take(32)
        .map(|t| t.chars().take(200).collect())
        .collect();

    // INVARIANT 1: distance never exceeds the pattern length
    for text in &texts {
        let d = substring_distance(&query, text);
        assert!(d <= query.chars().count());
        if text.contains(query.as_str()) {
            assert_eq!(d, 0);
        }
    }

    let options = MatcherOptions {
        threshold: f64::from(input.threshold) / 255.0,
        ..MatcherOptions::default()
    };
    let Ok(matcher) = FuzzyMatcher::<String>::new(&[FieldWeight::new("text", 1.0)], options) else {
        return;
    };

    let ranked = matcher.rank(texts.clone(), &query);

    // INVARIANT 2: scores bounded, output sorted, items drawn from input
    assert!(ranked.len() <= texts.len());
    for hit in &ranked {
        assert!((0.0..=1.0).contains(&hit.relevance_score));
        assert!(texts.contains(&hit.item));
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].relevance_score <= pair[1].relevance_score);
    }
});
