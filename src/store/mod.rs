// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: where candidates come from and search logs go.
//!
//! The search service never builds its own client. It is handed something
//! that implements [`RecordStore`], which keeps the ranking logic testable
//! with a scripted store and runnable against a JSON file via [`MemoryStore`].

mod memory;

pub use memory::{Dataset, MemoryStore};

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{DateRange, ItineraryRow, ProfileRow, SearchLogEntry};

/// Predicates pushed down to the store for itinerary fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchFilters {
    pub public_only: bool,
    /// Passed through unvalidated; an inverted range is the store's problem.
    pub date_range: DateRange,
}

impl FetchFilters {
    pub fn public() -> Self {
        Self {
            public_only: true,
            date_range: DateRange::default(),
        }
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = date_range;
        self
    }
}

/// Read and log access to the backing records.
///
/// Fetches return rows ordered by `created_at`, newest first, capped at
/// `limit`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch_recent_itineraries(
        &self,
        filters: &FetchFilters,
        limit: usize,
    ) -> Result<Vec<ItineraryRow>, StoreError>;

    async fn fetch_recent_profiles(&self, limit: usize) -> Result<Vec<ProfileRow>, StoreError>;

    async fn append_search_log(&self, entry: &SearchLogEntry) -> Result<(), StoreError>;
}

/// What one entity kind's fetch produced.
///
/// The orchestrator branches on this explicitly: `Failed` becomes an empty
/// list for that kind and a warning, never an error for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Ok(Vec<T>),
    Failed(StoreError),
}

impl<T> FetchOutcome<T> {
    /// An outcome for a kind the caller did not ask for.
    pub fn skipped() -> Self {
        FetchOutcome::Ok(Vec::new())
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    /// Rows on success, empty on failure.
    pub fn into_rows(self) -> Vec<T> {
        match self {
            FetchOutcome::Ok(rows) => rows,
            FetchOutcome::Failed(_) => Vec::new(),
        }
    }
}

impl<T> From<Result<Vec<T>, StoreError>> for FetchOutcome<T> {
    fn from(result: Result<Vec<T>, StoreError>) -> Self {
        match result {
            Ok(rows) => FetchOutcome::Ok(rows),
            Err(reason) => FetchOutcome::Failed(reason),
        }
    }
}
