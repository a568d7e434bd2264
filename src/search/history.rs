// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search log writes and the popular-searches list.
//!
//! Logging a search is best effort: a failed write is a warning, never an
//! error for the user who searched. Popular searches come from an injected
//! provider; the default serves a fixed list from configuration.

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::orchestrator::SearchService;
use crate::config::default_popular_searches;
use crate::location::extract_location;
use crate::store::RecordStore;
use crate::types::SearchLogEntry;

/// Source of the "popular searches" list.
pub trait PopularSearchesProvider: Send + Sync {
    /// Most popular first.
    fn popular_searches(&self) -> Vec<String>;
}

/// A fixed list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPopularSearches {
    searches: Vec<String>,
}

impl StaticPopularSearches {
    pub fn new(searches: Vec<String>) -> Self {
        Self { searches }
    }
}

impl Default for StaticPopularSearches {
    fn default() -> Self {
        Self::new(default_popular_searches())
    }
}

impl PopularSearchesProvider for StaticPopularSearches {
    fn popular_searches(&self) -> Vec<String> {
        self.searches.clone()
    }
}

fn log_entry(user_id: &str, query: &str) -> Option<SearchLogEntry> {
    if query.trim().is_empty() {
        return None;
    }
    Some(SearchLogEntry {
        user_id: user_id.to_string(),
        query: query.to_string(),
        location: extract_location(query),
        searched_at: Utc::now(),
    })
}

async fn append<S: RecordStore + ?Sized>(store: &S, entry: SearchLogEntry) {
    match store.append_search_log(&entry).await {
        Ok(()) => debug!(user_id = %entry.user_id, location = ?entry.location, "search logged"),
        Err(error) => warn!(user_id = %entry.user_id, %error, "failed to log search"),
    }
}

impl<S: RecordStore, P> SearchService<S, P> {
    /// Append a query to the search log with its extracted location.
    /// Blank queries are ignored.
    pub async fn record_query(&self, user_id: &str, query: &str) {
        if let Some(entry) = log_entry(user_id, query) {
            append(self.store.as_ref(), entry).await;
        }
    }
}

impl<S: RecordStore, P: PopularSearchesProvider> SearchService<S, P> {
    /// Up to `limit` (default `config.default_popular_limit`) popular searches.
    pub fn popular_searches(&self, limit: Option<usize>) -> Vec<String> {
        let limit = limit.unwrap_or(self.config.default_popular_limit);
        let mut searches = self.popular.popular_searches();
        searches.truncate(limit);
        searches
    }
}

impl<S: RecordStore + 'static, P> SearchService<S, P> {
    /// [`record_query`](Self::record_query) on a background task.
    ///
    /// Must be called inside a tokio runtime. Awaiting the handle is
    /// optional; dropping it does not cancel the write.
    pub fn record_query_detached(&self, user_id: &str, query: &str) -> JoinHandle<()> {
        let entry = log_entry(user_id, query);
        let store = self.store.clone();
        tokio::spawn(async move {
            if let Some(entry) = entry {
                append(store.as_ref(), entry).await;
            }
        })
    }
}
