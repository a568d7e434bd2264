// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every knob has a default, so an empty JSON object is a valid config file
//! and `SearchConfig::default()` is what the library uses out of the box.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Error, Result};
use crate::scoring::{DEFAULT_MIN_MATCH_CHARS, DEFAULT_THRESHOLD};

/// A field name and how much a hit in it counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWeight {
    pub field: String,
    pub weight: f64,
}

impl FieldWeight {
    pub fn new(field: impl Into<String>, weight: f64) -> Self {
        Self {
            field: field.into(),
            weight,
        }
    }
}

/// Tunables for [`SearchService`](crate::SearchService).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Most recent rows fetched per entity kind before ranking.
    pub fetch_window: usize,
    /// Most recent itineraries scanned for suggestions.
    pub suggestion_window: usize,
    /// Match tolerance in `[0, 1]`; 0 is exact, 1 matches anything.
    pub threshold: f64,
    /// Shorter queries match nothing.
    pub min_match_chars: usize,
    pub default_limit: usize,
    pub default_suggestion_limit: usize,
    pub default_popular_limit: usize,
    pub itinerary_weights: Vec<FieldWeight>,
    pub user_weights: Vec<FieldWeight>,
    /// Served by the default popular-searches provider.
    pub popular_searches: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fetch_window: 100,
            suggestion_window: 50,
            threshold: DEFAULT_THRESHOLD,
            min_match_chars: DEFAULT_MIN_MATCH_CHARS,
            default_limit: 20,
            default_suggestion_limit: 5,
            default_popular_limit: 10,
            itinerary_weights: default_itinerary_weights(),
            user_weights: default_user_weights(),
            popular_searches: default_popular_searches(),
        }
    }
}

impl SearchConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "loaded search config");
        Ok(config)
    }

    /// Check the scalar knobs. Field weights are checked when the matchers
    /// are built, against the fields each entity actually has.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        let windows = [
            ("fetch_window", self.fetch_window),
            ("suggestion_window", self.suggestion_window),
        ];
        for (name, value) in windows {
            if value == 0 {
                return Err(ConfigError::InvalidWindow { name });
            }
        }
        Ok(())
    }
}

pub fn default_itinerary_weights() -> Vec<FieldWeight> {
    vec![
        FieldWeight::new("title", 3.0),
        FieldWeight::new("location_variants", 2.0),
        FieldWeight::new("description", 1.5),
        FieldWeight::new("owner_username", 1.0),
        FieldWeight::new("owner_name", 0.8),
    ]
}

pub fn default_user_weights() -> Vec<FieldWeight> {
    vec![
        FieldWeight::new("username", 2.0),
        FieldWeight::new("display_name", 2.0),
        FieldWeight::new("bio", 1.0),
    ]
}

pub fn default_popular_searches() -> Vec<String> {
    [
        "Beach vacation",
        "Mountain hiking",
        "City break",
        "Road trip",
        "New York",
        "Paris",
        "Tokyo",
        "National parks",
        "Weekend getaway",
        "Family vacation",
        "Ski trip",
        "Wine country",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
