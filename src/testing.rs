//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Rows are built newest-first friendly: `age` counts hours before a fixed
//! reference instant, so a smaller age means a more recent row.

#![doc(hidden)]

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::{ItineraryRow, OwnerSummary, ProfileRow};

/// 2024-06-01T12:00:00Z
const REFERENCE_TS: i64 = 1_717_243_200;

/// `age` hours before the reference instant.
pub fn timestamp(age: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(REFERENCE_TS - age * 3600, 0).unwrap_or_default()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// A public itinerary with only a title.
pub fn make_itinerary(id: &str, title: &str, age: i64) -> ItineraryRow {
    ItineraryRow {
        id: id.to_string(),
        owner_id: format!("owner-{id}"),
        title: title.to_string(),
        description: None,
        image_url: None,
        location: None,
        start_date: None,
        end_date: None,
        created_at: timestamp(age),
        is_public: true,
        owner: None,
    }
}

/// A public itinerary with a location.
pub fn make_itinerary_at(id: &str, title: &str, location: &str, age: i64) -> ItineraryRow {
    ItineraryRow {
        location: Some(location.to_string()),
        ..make_itinerary(id, title, age)
    }
}

/// Attach an owner's username and display name.
pub fn with_owner(row: ItineraryRow, username: &str, name: &str) -> ItineraryRow {
    ItineraryRow {
        owner: Some(OwnerSummary {
            username: Some(username.to_string()),
            name: Some(name.to_string()),
        }),
        ..row
    }
}

pub fn make_profile(
    id: &str,
    username: Option<&str>,
    display_name: Option<&str>,
    age: i64,
) -> ProfileRow {
    ProfileRow {
        id: id.to_string(),
        username: username.map(String::from),
        display_name: display_name.map(String::from),
        bio: None,
        avatar_url: None,
        created_at: timestamp(age),
    }
}
