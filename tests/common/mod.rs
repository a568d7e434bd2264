//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use itinera::{
    FetchFilters, ItineraryRow, ProfileRow, RecordStore, SearchConfig, SearchLogEntry,
    SearchService, StoreError,
};

// Re-export canonical row builders from itinera::testing
pub use itinera::testing::*;

// ============================================================================
// SCRIPTED STORE
// ============================================================================

/// A record store that returns canned rows, counts calls and can be told to
/// fail. Rows are returned in the order given (callers list newest first),
/// capped at the requested limit. Filters are recorded, not applied.
#[derive(Default)]
pub struct StubStore {
    itineraries: Vec<ItineraryRow>,
    profiles: Vec<ProfileRow>,
    itinerary_error: Option<StoreError>,
    profile_error: Option<StoreError>,
    log_error: Option<StoreError>,
    itinerary_calls: AtomicUsize,
    profile_calls: AtomicUsize,
    log_calls: AtomicUsize,
    fetches: Mutex<Vec<(FetchFilters, usize)>>,
    log: Mutex<Vec<SearchLogEntry>>,
}

impl StubStore {
    pub fn new(itineraries: Vec<ItineraryRow>, profiles: Vec<ProfileRow>) -> Self {
        Self {
            itineraries,
            profiles,
            ..Self::default()
        }
    }

    pub fn failing_itineraries(mut self, error: StoreError) -> Self {
        self.itinerary_error = Some(error);
        self
    }

    pub fn failing_profiles(mut self, error: StoreError) -> Self {
        self.profile_error = Some(error);
        self
    }

    pub fn failing_log(mut self, error: StoreError) -> Self {
        self.log_error = Some(error);
        self
    }

    pub fn itinerary_calls(&self) -> usize {
        self.itinerary_calls.load(Ordering::SeqCst)
    }

    pub fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub fn log_calls(&self) -> usize {
        self.log_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.itinerary_calls() + self.profile_calls() + self.log_calls()
    }

    /// Every itinerary fetch as `(filters, limit)`, in call order.
    pub fn fetches(&self) -> Vec<(FetchFilters, usize)> {
        self.fetches.lock().clone()
    }

    pub fn logged(&self) -> Vec<SearchLogEntry> {
        self.log.lock().clone()
    }
}

#[async_trait]
impl RecordStore for StubStore {
    async fn fetch_recent_itineraries(
        &self,
        filters: &FetchFilters,
        limit: usize,
    ) -> Result<Vec<ItineraryRow>, StoreError> {
        self.itinerary_calls.fetch_add(1, Ordering::SeqCst);
        self.fetches.lock().push((*filters, limit));
        match &self.itinerary_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.itineraries.iter().take(limit).cloned().collect()),
        }
    }

    async fn fetch_recent_profiles(&self, limit: usize) -> Result<Vec<ProfileRow>, StoreError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        match &self.profile_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.profiles.iter().take(limit).cloned().collect()),
        }
    }

    async fn append_search_log(&self, entry: &SearchLogEntry) -> Result<(), StoreError> {
        self.log_calls.fetch_add(1, Ordering::SeqCst);
        match &self.log_error {
            Some(error) => Err(error.clone()),
            None => {
                self.log.lock().push(entry.clone());
                Ok(())
            }
        }
    }
}

// ============================================================================
// SERVICE BUILDERS
// ============================================================================

/// A service over `store` with default configuration. The store handle is
/// returned too so tests can inspect call counts afterwards.
pub fn service(store: StubStore) -> (Arc<StubStore>, SearchService<StubStore>) {
    let store = Arc::new(store);
    let service = SearchService::new(store.clone(), SearchConfig::default())
        .expect("default config is valid");
    (store, service)
}

/// Titles of ranked itineraries, in rank order.
pub fn titles<T>(hits: &[itinera::RankedResult<T>], title: impl Fn(&T) -> &str) -> Vec<String> {
    hits.iter().map(|hit| title(&hit.item).to_string()).collect()
}
