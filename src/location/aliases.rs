// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Static alias tables: US states and city nicknames.
//!
//! Lookups are linear scans. The tables are tiny (51 states, a few dozen
//! nicknames) and a scan over contiguous `&'static` data beats building a map
//! on every call.

/// `(abbreviation, full name)` for the 50 states plus DC.
pub const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// `(nickname, canonical city)`. Nicknames are stored lowercase and matched
/// as whole words against normalized text.
pub const CITY_ALIASES: &[(&str, &str)] = &[
    ("nyc", "New York"),
    ("big apple", "New York"),
    ("the big apple", "New York"),
    ("la", "Los Angeles"),
    ("l a", "Los Angeles"),
    ("sf", "San Francisco"),
    ("san fran", "San Francisco"),
    ("frisco", "San Francisco"),
    ("philly", "Philadelphia"),
    ("vegas", "Las Vegas"),
    ("sin city", "Las Vegas"),
    ("nola", "New Orleans"),
    ("big easy", "New Orleans"),
    ("chi town", "Chicago"),
    ("chitown", "Chicago"),
    ("windy city", "Chicago"),
    ("atl", "Atlanta"),
    ("h town", "Houston"),
    ("htown", "Houston"),
    ("motor city", "Detroit"),
    ("beantown", "Boston"),
    ("mile high city", "Denver"),
    ("music city", "Nashville"),
    ("emerald city", "Seattle"),
    ("slc", "Salt Lake City"),
    ("kc", "Kansas City"),
    ("okc", "Oklahoma City"),
    ("pdx", "Portland"),
    ("atx", "Austin"),
    ("dtla", "Los Angeles"),
    ("twin cities", "Minneapolis"),
    ("magic city", "Miami"),
];

/// Words that mark a query as location-flavoured even without a place name.
pub const LOCATION_KEYWORDS: &[&str] = &[
    "beach",
    "mountain",
    "mountains",
    "lake",
    "island",
    "islands",
    "coast",
    "desert",
    "forest",
    "canyon",
    "valley",
    "park",
    "downtown",
    "countryside",
];

/// Full state name for a two-letter abbreviation, case-insensitive.
pub fn state_name_for_abbreviation(abbreviation: &str) -> Option<&'static str> {
    let abbreviation = abbreviation.trim();
    STATE_ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(abbreviation))
        .map(|(_, name)| *name)
}

/// Two-letter abbreviation for a full state name, case-insensitive.
pub fn abbreviation_for_state_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    STATE_ABBREVIATIONS
        .iter()
        .find(|(_, full)| full.eq_ignore_ascii_case(name))
        .map(|(abbr, _)| *abbr)
}
