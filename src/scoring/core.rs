// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance scores.
//!
//! A record's score is a product of per-field factors:
//!
//! ```text
//! score = Π  max(s_f, ε) ^ (w_f · norm_f)      over fields that matched
//!
//! s_f    = substring edit distance / query length     (field score)
//! w_f    = field weight / sum of weights               (normalized weight)
//! norm_f = 1 / √(tokens in field), 3 decimals          (field-length norm)
//! ```
//!
//! # Invariant: Bounded Score
//!
//! A field only contributes when `s_f ≤ threshold ≤ 1`, and every exponent is
//! positive, so each factor is in `(0, 1]` and so is their product. Adding a
//! matched field can only lower (improve) the score.
//!
//! # Why ε
//!
//! An exact hit has `s_f = 0`, and `0^x = 0` would erase the difference
//! between "exact in the title" and "exact in the bio". Clamping to
//! `f64::EPSILON` keeps the weights meaningful.

/// Default tolerance: up to 40% of the query's characters may be edits.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Queries shorter than this (after normalization) match nothing.
pub const DEFAULT_MIN_MATCH_CHARS: usize = 2;

/// Floor applied to field scores before exponentiation.
pub const MIN_FIELD_SCORE: f64 = f64::EPSILON;

/// Edit budget for a query of `query_len` chars at the given threshold.
///
/// The small epsilon absorbs float error so `0.4 * 5` is 2, not 1.
pub fn max_edits(threshold: f64, query_len: usize) -> usize {
    (threshold * query_len as f64 + 1e-9).floor() as usize
}

/// Field score: fraction of the query that had to be edited.
///
/// Returns 1.0 for an empty query so it can never look like a perfect hit.
pub fn field_score(distance: usize, query_len: usize) -> f64 {
    if query_len == 0 {
        return 1.0;
    }
    (distance as f64 / query_len as f64).min(1.0)
}

/// Field-length norm: `1 / √tokens`, rounded to three decimals.
///
/// Short fields get exponents near 1, long ones near 0, so the same hit in
/// a three-word title lowers the score much more than in a long description.
pub fn field_norm(token_count: usize) -> f64 {
    let tokens = token_count.max(1) as f64;
    (1.0 / tokens.sqrt() * 1000.0).round() / 1000.0
}

/// Rescale weights so they sum to one. Callers validate that every weight is
/// finite and positive first.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return vec![0.0; weights.len()];
    }
    weights.iter().map(|w| w / total).collect()
}

/// One field's multiplicative contribution to the record score.
pub fn weighted_factor(score: f64, weight: f64, norm: f64) -> f64 {
    score.max(MIN_FIELD_SCORE).powf(weight * norm)
}

/// Fold field factors into a record score. An empty iterator yields 1.0,
/// the worst possible score; callers only fold records with a match.
pub fn combine_factors(factors: impl IntoIterator<Item = f64>) -> f64 {
    factors.into_iter().product::<f64>().clamp(0.0, 1.0)
}
