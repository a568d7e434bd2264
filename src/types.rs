// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search call.
//!
//! Rows come out of the record store, candidates go into the matcher, ranked
//! results come back out. The three layers are kept separate on purpose: rows
//! mirror storage (everything optional), candidates are what the matcher is
//! allowed to see (every text field present, possibly empty), and results wrap
//! a candidate with the score it earned.
//!
//! # Invariants
//!
//! - **Candidates**: every matchable field is a `&str`, never missing. Absent
//!   text becomes `""` during conversion from a row.
//! - **ItineraryCandidate**: `location_variants` starts with the literal
//!   `location` whenever the location is non-empty.
//! - **SearchResults**: `total_count == itineraries.len() + users.len()`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::location::{normalize_location, LocationVariants};

/// Display title for a profile with neither a display name nor a username.
pub const UNKNOWN_USER_TITLE: &str = "Unknown User";

// =============================================================================
// FILTERS
// =============================================================================

/// Which entity kinds a search should cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Itinerary,
    User,
    #[default]
    All,
}

impl EntityType {
    pub fn includes_itineraries(self) -> bool {
        matches!(self, EntityType::Itinerary | EntityType::All)
    }

    pub fn includes_users(self) -> bool {
        matches!(self, EntityType::User | EntityType::All)
    }
}

/// Caller-supplied narrowing for [`search`](crate::SearchService::search).
///
/// `start_date`/`end_date` are pushed down to the store as
/// `start_date >= filter.start_date` and `end_date <= filter.end_date`.
/// An inverted range is passed through as-is; the store decides what a
/// contradictory predicate returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, rename = "type")]
    pub entity_type: EntityType,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl SearchFilters {
    pub fn for_type(entity_type: EntityType) -> Self {
        Self {
            entity_type,
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_dates(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    /// The location filter, if one was given and is not blank.
    pub fn location_filter(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    pub fn date_range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

/// Storage-level date predicate. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Does a row with these dates pass the predicate?
    ///
    /// A bound applies to the matching column only, and a missing column value
    /// never satisfies a bound (SQL NULL semantics).
    pub fn admits(&self, start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> bool {
        let start_ok = match self.start {
            Some(bound) => start_date.is_some_and(|d| d >= bound),
            None => true,
        };
        let end_ok = match self.end {
            Some(bound) => end_date.is_some_and(|d| d <= bound),
            None => true,
        };
        start_ok && end_ok
    }
}

// =============================================================================
// STORAGE ROWS
// =============================================================================

/// Denormalized owner fields joined onto an itinerary row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// An itinerary as the record store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryRow {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub owner: Option<OwnerSummary>,
}

/// A user profile as the record store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRow {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// CANDIDATES
// =============================================================================

/// Something the fuzzy matcher can rank.
///
/// `FIELDS` names the matchable fields; `field_text(i)` returns the text of
/// `FIELDS[i]`. Matchers resolve configured field names against `FIELDS` once,
/// at construction, so a typo in a weight table fails fast instead of silently
/// never matching.
pub trait Searchable: Send + Sync {
    /// Entity name used in configuration errors and logs.
    const KIND: &'static str;
    /// Names of the matchable fields, in `field_text` index order.
    const FIELDS: &'static [&'static str];

    /// Text of field `index`. Out-of-range indices return `""`.
    fn field_text(&self, index: usize) -> &str;
}

/// An itinerary enriched for ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryCandidate {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: String,
    /// Alias-expanded location forms. Matching only, never displayed.
    #[serde(skip)]
    pub location_variants: LocationVariants,
    #[serde(skip)]
    location_text: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub owner_username: String,
    pub owner_name: String,
}

impl ItineraryCandidate {
    /// Enrich a storage row: expand the location and fill missing text with `""`.
    pub fn from_row(row: ItineraryRow) -> Self {
        let location = row.location.unwrap_or_default();
        let location_variants = normalize_location(&location);
        let location_text = location_variants.joined();
        let owner = row.owner.unwrap_or_default();

        Self {
            id: row.id,
            owner_id: row.owner_id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            image_url: row.image_url,
            location,
            location_variants,
            location_text,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            owner_username: owner.username.unwrap_or_default(),
            owner_name: owner.name.unwrap_or_default(),
        }
    }

    /// The alias-expanded location joined into one matchable string.
    pub fn location_text(&self) -> &str {
        &self.location_text
    }
}

impl From<ItineraryRow> for ItineraryCandidate {
    fn from(row: ItineraryRow) -> Self {
        Self::from_row(row)
    }
}

impl Searchable for ItineraryCandidate {
    const KIND: &'static str = "itinerary";
    const FIELDS: &'static [&'static str] = &[
        "title",
        "location_variants",
        "description",
        "owner_username",
        "owner_name",
    ];

    fn field_text(&self, index: usize) -> &str {
        match index {
            0 => &self.title,
            1 => &self.location_text,
            2 => &self.description,
            3 => &self.owner_username,
            4 => &self.owner_name,
            _ => "",
        }
    }
}

/// A user profile prepared for ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCandidate {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Display name, else username, else [`UNKNOWN_USER_TITLE`].
    pub title: String,
    /// Same as `bio`.
    pub description: String,
}

impl UserCandidate {
    pub fn from_row(row: ProfileRow) -> Self {
        let username = non_blank(row.username);
        let display_name = non_blank(row.display_name);
        let title = display_name
            .clone()
            .or_else(|| username.clone())
            .unwrap_or_else(|| UNKNOWN_USER_TITLE.to_string());
        let bio = row.bio.unwrap_or_default();

        Self {
            id: row.id,
            username: username.unwrap_or_default(),
            display_name: display_name.unwrap_or_default(),
            description: bio.clone(),
            bio,
            avatar_url: row.avatar_url,
            created_at: row.created_at,
            title,
        }
    }
}

impl From<ProfileRow> for UserCandidate {
    fn from(row: ProfileRow) -> Self {
        Self::from_row(row)
    }
}

impl Searchable for UserCandidate {
    const KIND: &'static str = "user";
    const FIELDS: &'static [&'static str] = &["username", "display_name", "bio"];

    fn field_text(&self, index: usize) -> &str {
        match index {
            0 => &self.username,
            1 => &self.display_name,
            2 => &self.bio,
            _ => "",
        }
    }
}

/// Suggestions rank raw strings as single-field records.
impl Searchable for String {
    const KIND: &'static str = "suggestion";
    const FIELDS: &'static [&'static str] = &["text"];

    fn field_text(&self, index: usize) -> &str {
        if index == 0 {
            self.as_str()
        } else {
            ""
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// =============================================================================
// RESULTS
// =============================================================================

/// A candidate together with the score it earned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult<T> {
    pub item: T,
    /// In `[0, 1]`; lower is more relevant.
    pub relevance_score: f64,
    /// Fields that matched within tolerance, in field order.
    pub matched_fields: Vec<&'static str>,
}

/// What [`search`](crate::SearchService::search) returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub itineraries: Vec<RankedResult<ItineraryCandidate>>,
    pub users: Vec<RankedResult<UserCandidate>>,
    pub total_count: usize,
}

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-truncated lists; the count is derived, never passed in.
    pub fn new(
        itineraries: Vec<RankedResult<ItineraryCandidate>>,
        users: Vec<RankedResult<UserCandidate>>,
    ) -> Self {
        let total_count = itineraries.len() + users.len();
        Self {
            itineraries,
            users,
            total_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

/// One recorded search, as written to the search log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchLogEntry {
    pub user_id: String,
    pub query: String,
    pub location: Option<String>,
    pub searched_at: DateTime<Utc>,
}
