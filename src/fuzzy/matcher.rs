// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted multi-field fuzzy ranking.
//!
//! A [`FuzzyMatcher`] is built once per entity kind from a weight table and
//! then ranks any number of candidate lists. Field names are resolved against
//! [`Searchable::FIELDS`] at construction, so the hot loop works on indices
//! and a misspelled field is a [`ConfigError`] instead of a silent miss.
//!
//! # Matching
//!
//! For each field the normalized query is aligned against the best-matching
//! window of the normalized field text ([`substring_distance_within`](super::substring_distance_within)). A field
//! matches when the edits needed stay within `threshold × query length`.
//! Where in the field the window sits does not matter.
//!
//! # Scoring
//!
//! See [`crate::scoring`]. Lower is better, always in `[0, 1]`.

use std::marker::PhantomData;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::levenshtein::substring_distance_within;
use crate::config::{FieldWeight, SearchConfig};
use crate::error::ConfigError;
use crate::scoring::ranking::compare_scored;
use crate::scoring::{
    combine_factors, field_norm, field_score, max_edits, normalize_weights, weighted_factor,
    DEFAULT_MIN_MATCH_CHARS, DEFAULT_THRESHOLD,
};
use crate::types::{RankedResult, Searchable};
use crate::utils::{normalize, token_count};

/// Tolerance settings shared by every matcher of a service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatcherOptions {
    pub threshold: f64,
    pub min_match_chars: usize,
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_match_chars: DEFAULT_MIN_MATCH_CHARS,
        }
    }
}

impl From<&SearchConfig> for MatcherOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            threshold: config.threshold,
            min_match_chars: config.min_match_chars,
        }
    }
}

/// A query normalized once and reused across every candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    text: String,
    len: usize,
    max_edits: usize,
}

impl PreparedQuery {
    /// `None` when the normalized query is shorter than `min_match_chars`.
    pub fn new(query: &str, options: &MatcherOptions) -> Option<Self> {
        let text = normalize(query);
        let len = text.chars().count();
        if len == 0 || len < options.min_match_chars {
            return None;
        }
        Some(Self {
            max_edits: max_edits(options.threshold, len),
            text,
            len,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn max_edits(&self) -> usize {
        self.max_edits
    }
}

#[derive(Debug, Clone, Copy)]
struct ResolvedField {
    index: usize,
    name: &'static str,
    weight: f64,
}

/// Ranks candidates of one kind by fuzzy relevance to a query.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher<T> {
    fields: Vec<ResolvedField>,
    options: MatcherOptions,
    _kind: PhantomData<fn() -> T>,
}

impl<T: Searchable> FuzzyMatcher<T> {
    /// Build a matcher from a weight table.
    ///
    /// Fails on an empty table, a field `T` does not have, the same field
    /// listed twice, a weight that is not finite and positive, or a threshold
    /// outside `[0, 1]`.
    pub fn new(weights: &[FieldWeight], options: MatcherOptions) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&options.threshold) {
            return Err(ConfigError::InvalidThreshold(options.threshold));
        }
        if weights.is_empty() {
            return Err(ConfigError::EmptyFields(T::KIND));
        }

        let mut resolved: Vec<(usize, &'static str, f64)> = Vec::with_capacity(weights.len());
        for entry in weights {
            let Some(index) = T::FIELDS.iter().position(|name| *name == entry.field) else {
                return Err(ConfigError::UnknownField {
                    kind: T::KIND,
                    field: entry.field.clone(),
                    expected: T::FIELDS.join(", "),
                });
            };
            if !entry.weight.is_finite() || entry.weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    field: entry.field.clone(),
                    weight: entry.weight,
                });
            }
            if resolved.iter().any(|(i, _, _)| *i == index) {
                return Err(ConfigError::DuplicateField {
                    kind: T::KIND,
                    field: entry.field.clone(),
                });
            }
            resolved.push((index, T::FIELDS[index], entry.weight));
        }

        let raw: Vec<f64> = resolved.iter().map(|(_, _, w)| *w).collect();
        let fields = resolved
            .into_iter()
            .zip(normalize_weights(&raw))
            .map(|((index, name, _), weight)| ResolvedField {
                index,
                name,
                weight,
            })
            .collect();

        Ok(Self {
            fields,
            options,
            _kind: PhantomData,
        })
    }

    pub fn options(&self) -> MatcherOptions {
        self.options
    }

    /// Configured field names with their normalized weights, in table order.
    pub fn field_weights(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.fields.iter().map(|f| (f.name, f.weight))
    }

    pub fn prepare(&self, query: &str) -> Option<PreparedQuery> {
        PreparedQuery::new(query, &self.options)
    }

    /// Score one candidate. `None` when no field matches or the query is too
    /// short to match anything.
    pub fn score(&self, candidate: &T, query: &str) -> Option<f64> {
        let prepared = self.prepare(query)?;
        self.score_prepared(candidate, &prepared).map(|(score, _)| score)
    }

    /// Matching candidates, most relevant first. Equal scores keep their
    /// input order, so newest-first input stays newest-first among ties.
    pub fn rank(&self, candidates: Vec<T>, query: &str) -> Vec<RankedResult<T>> {
        let Some(prepared) = self.prepare(query) else {
            return Vec::new();
        };

        #[cfg(feature = "parallel")]
        let scores: Vec<_> = candidates
            .par_iter()
            .map(|c| self.score_prepared(c, &prepared))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let scores: Vec<_> = candidates
            .iter()
            .map(|c| self.score_prepared(c, &prepared))
            .collect();

        let mut hits: Vec<(usize, RankedResult<T>)> = candidates
            .into_iter()
            .zip(scores)
            .enumerate()
            .filter_map(|(i, (item, scored))| {
                scored.map(|(relevance_score, matched_fields)| {
                    (
                        i,
                        RankedResult {
                            item,
                            relevance_score,
                            matched_fields,
                        },
                    )
                })
            })
            .collect();

        hits.sort_by(|(ia, a), (ib, b)| {
            compare_scored((*ia, a.relevance_score), (*ib, b.relevance_score))
        });
        hits.into_iter().map(|(_, hit)| hit).collect()
    }

    fn score_prepared(
        &self,
        candidate: &T,
        query: &PreparedQuery,
    ) -> Option<(f64, Vec<&'static str>)> {
        let mut matched = Vec::new();
        let mut factors = Vec::new();

        for field in &self.fields {
            let text = normalize(candidate.field_text(field.index));
            if text.is_empty() {
                continue;
            }
            let max_edits = query.max_edits();
            let Some(distance) = substring_distance_within(query.text(), &text, max_edits) else {
                continue;
            };
            let score = field_score(distance, query.len());
            factors.push(weighted_factor(
                score,
                field.weight,
                field_norm(token_count(&text)),
            ));
            matched.push(field.name);
        }

        if matched.is_empty() {
            return None;
        }
        Some((combine_factors(factors), matched))
    }
}
