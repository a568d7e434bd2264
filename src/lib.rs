// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search and suggestion ranking for travel itineraries and profiles.
//!
//! Records are fetched fresh from a [`RecordStore`] on every call, ranked in
//! memory by a typo-tolerant multi-field matcher, and returned as two lists.
//! There is no index to build or keep in sync.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  store/     │────▶│  types.rs    │────▶│  fuzzy/      │
//! │ (RecordStore│     │ (rows →      │     │ (FuzzyMatcher│
//! │ MemoryStore)│     │  candidates) │     │  rank)       │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        ▲                   │                    │
//!        │                   ▼                    ▼
//! ┌──────┴──────────────────────────────────────────────┐
//! │                      search/                        │
//! │  (SearchService: search, suggest, record_query,     │
//! │   popular_searches)                                 │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//!                     location/ (aliases,
//!                     normalize_location)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use itinera::{MemoryStore, SearchConfig, SearchFilters, SearchService};
//!
//! let store = Arc::new(MemoryStore::from_path("dataset.json")?);
//! let service = SearchService::new(store, SearchConfig::default())?;
//!
//! let results = service.search("beach", &SearchFilters::default(), None).await;
//! let suggestions = service.suggest("bea", None).await;
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod location;
pub mod scoring;
pub mod search;
pub mod store;
pub mod testing;
mod types;
mod utils;

pub use config::{FieldWeight, SearchConfig};
pub use error::{ConfigError, Error, Result, StoreError};
pub use fuzzy::{substring_distance, FuzzyMatcher, MatcherOptions};
pub use location::{extract_location, location_matches, normalize_location, LocationVariants};
pub use search::{PopularSearchesProvider, SearchService, StaticPopularSearches, SuggestionSet};
pub use store::{Dataset, FetchFilters, FetchOutcome, MemoryStore, RecordStore};
pub use types::{
    DateRange, EntityType, ItineraryCandidate, ItineraryRow, OwnerSummary, ProfileRow,
    RankedResult, SearchFilters, SearchLogEntry, SearchResults, Searchable, UserCandidate,
    UNKNOWN_USER_TITLE,
};
pub use utils::normalize;
