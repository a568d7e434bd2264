// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions from recent itinerary titles and locations.
//!
//! Suggestions match the raw strings users typed, not alias-expanded
//! locations: typing "TX" suggests nothing unless some title or location
//! literally says something close to "TX". Full search does expand aliases.

use std::collections::HashSet;

use tracing::debug;

use super::orchestrator::{degrade, SearchService};
use crate::store::{FetchFilters, FetchOutcome, RecordStore};
use crate::types::ItineraryRow;

/// Insertion-ordered set of suggestion strings.
///
/// A string appears at most once, at the position it was first inserted.
/// Blank strings are ignored.
///
/// **Invariant**: `into_vec()` has no duplicates and preserves first-seen
/// order.
#[derive(Debug, Clone, Default)]
pub struct SuggestionSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            ordered: Vec::with_capacity(capacity),
        }
    }

    /// Add a string. Returns `false` if it was blank or already present.
    pub fn insert(&mut self, value: &str) -> bool {
        if value.trim().is_empty() || self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.ordered.push(value.to_string());
        true
    }

    pub fn insert_all<'a>(&mut self, values: impl IntoIterator<Item = &'a str>) {
        for value in values {
            self.insert(value);
        }
    }

    /// Titles then locations, row by row.
    pub fn from_rows(rows: &[ItineraryRow]) -> Self {
        let mut set = Self::with_capacity(rows.len() * 2);
        set.insert_all(
            rows.iter()
                .flat_map(|row| std::iter::once(row.title.as_str()).chain(row.location.as_deref())),
        );
        set
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.seen.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl<S: RecordStore, P> SearchService<S, P> {
    /// Up to `limit` (default `config.default_suggestion_limit`) titles or
    /// locations that fuzzily match a partial query, most relevant first.
    ///
    /// Fewer than `min_match_chars` characters, or a failed fetch, give an
    /// empty list.
    pub async fn suggest(&self, partial_query: &str, limit: Option<usize>) -> Vec<String> {
        let partial = partial_query.trim();
        if partial.chars().count() < self.config.min_match_chars.max(1) {
            return Vec::new();
        }
        let limit = limit.unwrap_or(self.config.default_suggestion_limit);

        let outcome = FetchOutcome::from(
            self.store
                .fetch_recent_itineraries(&FetchFilters::public(), self.config.suggestion_window)
                .await,
        );
        let rows = degrade("suggestion", outcome);
        let pool = SuggestionSet::from_rows(&rows);
        debug!(pool = pool.len(), "collected suggestion pool");

        self.suggestion_matcher
            .rank(pool.into_vec(), partial)
            .into_iter()
            .take(limit)
            .map(|hit| hit.item)
            .collect()
    }
}
