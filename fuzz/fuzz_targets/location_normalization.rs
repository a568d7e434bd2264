// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for location expansion and matching.
//!
//! Location strings are user-typed free text. Nothing here may panic on odd
//! Unicode or punctuation, and the variant set must keep its shape.

#![no_main]

use arbitrary::Arbitrary;
use itinera::{extract_location, location_matches, normalize_location};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct LocationInput {
    location: String,
    other: String,
}

fuzz_target!(|input: LocationInput| {
    let variants = normalize_location(&input.location);

    // INVARIANT 1: blank input gives nothing, otherwise the literal comes first
    if input.location.trim().is_empty() {
        assert!(variants.is_empty());
    } else {
        assert_eq!(variants.original(), Some(input.location.as_str()));
    }

    // INVARIANT 2: no case-insensitive duplicates
    let lowered: Vec<String> = variants.iter().map(str::to_lowercase).collect();
    for (i, v) in lowered.iter().enumerate() {
        assert!(!lowered[i + 1..].contains(v));
    }

    // INVARIANT 3: matching is symmetric
    assert_eq!(
        location_matches(&input.location, &input.other),
        location_matches(&input.other, &input.location)
    );

    let _ = extract_location(&input.location);
});
