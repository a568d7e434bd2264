// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory record store backed by a JSON dataset.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FetchFilters, RecordStore};
use crate::error::{Error, Result, StoreError};
use crate::types::{ItineraryRow, ProfileRow, SearchLogEntry};

/// The on-disk shape: `{"itineraries": [...], "profiles": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub itineraries: Vec<ItineraryRow>,
    pub profiles: Vec<ProfileRow>,
}

/// A [`RecordStore`] over a fixed dataset, applying the same predicates a
/// database query would. Search log entries are kept in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    dataset: Dataset,
    log: Mutex<Vec<SearchLogEntry>>,
}

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Dataset = serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            itineraries = dataset.itineraries.len(),
            profiles = dataset.profiles.len(),
            "loaded dataset"
        );
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Snapshot of everything appended so far, oldest first.
    pub fn search_log(&self) -> Vec<SearchLogEntry> {
        self.log.lock().clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_recent_itineraries(
        &self,
        filters: &FetchFilters,
        limit: usize,
    ) -> Result<Vec<ItineraryRow>, StoreError> {
        let mut rows: Vec<&ItineraryRow> = self
            .dataset
            .itineraries
            .iter()
            .filter(|row| !filters.public_only || row.is_public)
            .filter(|row| filters.date_range.admits(row.start_date, row.end_date))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows.into_iter().take(limit).cloned().collect())
    }

    async fn fetch_recent_profiles(&self, limit: usize) -> Result<Vec<ProfileRow>, StoreError> {
        let mut rows: Vec<&ProfileRow> = self.dataset.profiles.iter().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows.into_iter().take(limit).cloned().collect())
    }

    async fn append_search_log(&self, entry: &SearchLogEntry) -> Result<(), StoreError> {
        self.log.lock().push(entry.clone());
        Ok(())
    }
}
