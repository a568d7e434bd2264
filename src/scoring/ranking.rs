// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering.
//!
//! Candidates arrive newest first. Sorting by score alone with an unstable
//! sort would shuffle equal scores; the index tiebreaker pins them to
//! arrival order so recency survives ranking.

use std::cmp::Ordering;

/// Compare two `(candidate index, score)` pairs for ranking.
///
/// Sort order:
/// 1. **Score** - ascending (lower is more relevant)
/// 2. **Index** - ascending (earlier candidate wins the tie)
///
/// NaN never comes out of the scorer; if it did, it sorts as equal and the
/// index decides.
pub fn compare_scored(a: (usize, f64), b: (usize, f64)) -> Ordering {
    match a.1.partial_cmp(&b.1) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.0.cmp(&b.0),
    }
}
