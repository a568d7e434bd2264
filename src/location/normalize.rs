// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Location normalization: one free-text place, many equivalent spellings.
//!
//! "TX", "Texas" and "Austin, TX" should all find an itinerary located in
//! "Austin, Texas". Rather than teach the matcher about geography, every
//! location is expanded into a small ordered set of variants up front, and
//! comparisons run over the variants.

use serde::Serialize;

use super::aliases::{
    abbreviation_for_state_name, state_name_for_abbreviation, CITY_ALIASES, LOCATION_KEYWORDS,
    STATE_ABBREVIATIONS,
};
use crate::utils::{contains_either_way, normalize};

/// Ordered, de-duplicated set of equivalent location strings.
///
/// The first element is always the literal input. Duplicates are detected
/// case-insensitively and the first spelling wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationVariants(Vec<String>);

impl LocationVariants {
    fn push(&mut self, variant: &str) {
        if variant.trim().is_empty() {
            return;
        }
        let exists = self
            .0
            .iter()
            .any(|existing| existing.to_lowercase() == variant.to_lowercase());
        if !exists {
            self.0.push(variant.to_string());
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The literal location this set was built from.
    pub fn original(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// All variants joined by a single space, ready to be matched as one field.
    pub fn joined(&self) -> String {
        self.0.join(" ")
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a LocationVariants {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Expand a free-text location into its search-equivalent variants.
///
/// In order:
/// 1. the input itself, unmodified;
/// 2. the state counterpart when the whole input is a state abbreviation or name;
/// 3. the state counterpart of every comma-separated component ("Austin, TX"
///    adds "Texas"), and of every upper-case two-letter token ("Austin TX");
/// 4. the canonical city for every nickname appearing as whole words ("NYC").
///
/// Blank input gives an empty set, so callers can tell "no location" apart
/// from a location that simply has no aliases.
pub fn normalize_location(location: &str) -> LocationVariants {
    let mut variants = LocationVariants::default();
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return variants;
    }

    variants.push(location);
    push_state_counterpart(&mut variants, trimmed);

    for component in trimmed.split(',').map(str::trim) {
        push_state_counterpart(&mut variants, component);
    }

    for token in raw_tokens(trimmed) {
        if is_upper_abbreviation(token) {
            if let Some(name) = state_name_for_abbreviation(token) {
                variants.push(name);
            }
        }
    }

    // Whole words, not raw substrings: "la" must not fire inside "Atlanta"
    let words = word_text(trimmed);
    for (nickname, city) in CITY_ALIASES {
        if contains_words(&words, nickname) {
            variants.push(city);
        }
    }

    variants
}

/// Does a candidate's location satisfy a location search term?
///
/// Both sides are expanded with [`normalize_location`]; the result is true when
/// any pair of variants is a case-insensitive substring of one another, in
/// either direction. That makes "TX" find "Austin, Texas" and "Texas" find
/// "Austin, TX".
pub fn location_matches(search_term: &str, candidate_location: &str) -> bool {
    let terms = normalize_location(search_term);
    let candidates = normalize_location(candidate_location);
    if terms.is_empty() || candidates.is_empty() {
        return false;
    }

    for term in &terms {
        if candidates.iter().any(|c| contains_either_way(term, c)) {
            return true;
        }
    }
    false
}

/// Pull a location out of a raw search query, for the search log.
///
/// Heuristic, checked in order:
/// 1. a "City, ST" shape with a known state returns the whole trimmed query;
/// 2. an upper-case state abbreviation or a state name returns the full state name;
/// 3. a city nickname returns the canonical city;
/// 4. a location keyword ("beach", "mountain", ...) returns the keyword.
///
/// Abbreviations must be written upper-case here: "things to do in LA" and
/// "fun in the sun" should not both decide the user is looking at Indiana.
pub fn extract_location(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some((place, state)) = trimmed.rsplit_once(',') {
        let state = state.trim();
        let known_state = state_name_for_abbreviation(state).is_some()
            || abbreviation_for_state_name(state).is_some();
        if known_state && !place.trim().is_empty() {
            return Some(trimmed.to_string());
        }
    }

    if let Some(name) = raw_tokens(trimmed)
        .filter(|t| is_upper_abbreviation(t))
        .find_map(state_name_for_abbreviation)
    {
        return Some(name.to_string());
    }

    let words = word_text(trimmed);

    // Longest name wins so "West Virginia" is not reported as "Virginia"
    if let Some((_, name)) = STATE_ABBREVIATIONS
        .iter()
        .filter(|(_, name)| contains_words(&words, &normalize(name)))
        .max_by_key(|(_, name)| name.len())
    {
        return Some((*name).to_string());
    }

    if let Some((_, city)) = CITY_ALIASES
        .iter()
        .find(|(nickname, _)| contains_words(&words, nickname))
    {
        return Some((*city).to_string());
    }

    LOCATION_KEYWORDS
        .iter()
        .find(|keyword| contains_words(&words, keyword))
        .map(|keyword| (*keyword).to_string())
}

fn push_state_counterpart(variants: &mut LocationVariants, value: &str) {
    if let Some(name) = state_name_for_abbreviation(value) {
        variants.push(name);
    } else if let Some(abbr) = abbreviation_for_state_name(value) {
        variants.push(abbr);
    }
}

/// Split on anything that is not a letter or digit.
fn raw_tokens(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
}

fn is_upper_abbreviation(token: &str) -> bool {
    token.len() == 2 && token.chars().all(|c| c.is_ascii_uppercase())
}

/// Normalized text with punctuation turned into spaces and padded on both
/// ends, so whole-word checks are a plain `contains(" word ")`.
fn word_text(value: &str) -> String {
    let cleaned: String = normalize(value)
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    format!(" {} ", cleaned.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn contains_words(padded: &str, phrase: &str) -> bool {
    !phrase.is_empty() && padded.contains(&format!(" {phrase} "))
}
