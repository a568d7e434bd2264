// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! The edit-distance primitives live in `levenshtein`; `matcher` turns them into
//! a weighted multi-field ranker over any [`Searchable`](crate::types::Searchable)
//! candidate.

mod levenshtein;
pub mod matcher;

pub use levenshtein::*;
pub use matcher::{FuzzyMatcher, MatcherOptions, PreparedQuery};
