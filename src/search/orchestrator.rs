// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full search over itineraries and users.
//!
//! ```text
//! query ──▶ guard ──▶ fetch (itineraries ∥ users) ──▶ enrich ──▶ rank
//!                                                                  │
//!            SearchResults ◀── truncate ◀── location post-filter ◀─┘
//! ```
//!
//! Each stage is synchronous except the fetch. The two fetches run together
//! under `tokio::join!`; dropping the returned future drops both.

use std::sync::Arc;

use tracing::{debug, warn};

use super::history::StaticPopularSearches;
use crate::config::{FieldWeight, SearchConfig};
use crate::error::ConfigError;
use crate::fuzzy::{FuzzyMatcher, MatcherOptions};
use crate::location::location_matches;
use crate::store::{FetchFilters, FetchOutcome, RecordStore};
use crate::types::{
    ItineraryCandidate, ItineraryRow, ProfileRow, SearchFilters, SearchResults, UserCandidate,
};

/// Search, suggestion and search-log operations over one record store.
pub struct SearchService<S, P = StaticPopularSearches> {
    pub(super) store: Arc<S>,
    pub(super) config: SearchConfig,
    pub(super) itinerary_matcher: FuzzyMatcher<ItineraryCandidate>,
    pub(super) user_matcher: FuzzyMatcher<UserCandidate>,
    pub(super) suggestion_matcher: FuzzyMatcher<String>,
    pub(super) popular: P,
}

impl<S: RecordStore> SearchService<S> {
    /// Build a service. Fails if the configuration or either weight table is
    /// invalid; nothing is fetched until the first call.
    pub fn new(store: Arc<S>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let options = MatcherOptions::from(&config);

        Ok(Self {
            itinerary_matcher: FuzzyMatcher::new(&config.itinerary_weights, options)?,
            user_matcher: FuzzyMatcher::new(&config.user_weights, options)?,
            suggestion_matcher: FuzzyMatcher::new(&[FieldWeight::new("text", 1.0)], options)?,
            popular: StaticPopularSearches::new(config.popular_searches.clone()),
            store,
            config,
        })
    }
}

impl<S: RecordStore, P> SearchService<S, P> {
    /// Swap the popular-searches source.
    pub fn with_popular<Q>(self, popular: Q) -> SearchService<S, Q> {
        SearchService {
            store: self.store,
            config: self.config,
            itinerary_matcher: self.itinerary_matcher,
            user_matcher: self.user_matcher,
            suggestion_matcher: self.suggestion_matcher,
            popular,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Ranked itineraries and users for a free-text query.
    ///
    /// `limit` caps each list separately and defaults to
    /// `config.default_limit`. A blank query returns nothing without
    /// touching the store. A failed fetch empties that kind only; this never
    /// fails as a whole.
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        limit: Option<usize>,
    ) -> SearchResults {
        let query = query.trim();
        if query.is_empty() {
            return SearchResults::empty();
        }
        let limit = limit.unwrap_or(self.config.default_limit);

        let (itinerary_rows, profile_rows) = tokio::join!(
            self.fetch_itineraries(filters),
            self.fetch_profiles(filters),
        );
        let itinerary_rows = degrade("itinerary", itinerary_rows);
        let profile_rows = degrade("user", profile_rows);
        debug!(
            itineraries = itinerary_rows.len(),
            users = profile_rows.len(),
            "fetched candidates"
        );

        let itineraries: Vec<ItineraryCandidate> = itinerary_rows
            .into_iter()
            .map(ItineraryCandidate::from_row)
            .collect();
        let users: Vec<UserCandidate> = profile_rows
            .into_iter()
            .map(UserCandidate::from_row)
            .collect();

        let mut ranked_itineraries = self.itinerary_matcher.rank(itineraries, query);
        let mut ranked_users = self.user_matcher.rank(users, query);

        if let Some(location) = filters.location_filter() {
            let before = ranked_itineraries.len();
            ranked_itineraries.retain(|hit| location_matches(location, &hit.item.location));
            debug!(
                location,
                before,
                after = ranked_itineraries.len(),
                "applied location filter"
            );
        }

        ranked_itineraries.truncate(limit);
        ranked_users.truncate(limit);

        let results = SearchResults::new(ranked_itineraries, ranked_users);
        debug!(query, total = results.total_count, "search complete");
        results
    }

    async fn fetch_itineraries(&self, filters: &SearchFilters) -> FetchOutcome<ItineraryRow> {
        if !filters.entity_type.includes_itineraries() {
            return FetchOutcome::skipped();
        }
        let fetch = FetchFilters::public().with_date_range(filters.date_range());
        self.store
            .fetch_recent_itineraries(&fetch, self.config.fetch_window)
            .await
            .into()
    }

    async fn fetch_profiles(&self, filters: &SearchFilters) -> FetchOutcome<ProfileRow> {
        if !filters.entity_type.includes_users() {
            return FetchOutcome::skipped();
        }
        self.store
            .fetch_recent_profiles(self.config.fetch_window)
            .await
            .into()
    }
}

/// Rows on success; on failure, a warning and nothing.
pub(super) fn degrade<T>(kind: &'static str, outcome: FetchOutcome<T>) -> Vec<T> {
    match outcome {
        FetchOutcome::Ok(rows) => rows,
        FetchOutcome::Failed(reason) => {
            warn!(kind, error = %reason, "fetch failed, continuing without these results");
            Vec::new()
        }
    }
}
