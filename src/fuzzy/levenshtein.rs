// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring distance with an early-exit cut-off.
//!
//! `substring_distance` aligns a pattern against the *best-matching window* of
//! a longer text, which is what makes a search for "beach" hit "Sunny Miami
//! Beach Getaway" with zero edits no matter where the word sits.
//!
//! Works on `char`s, not bytes, so "café" is four symbols long.

/// Fewest edits needed to turn `pattern` into *some* substring of `text`.
///
/// Semi-global alignment (Sellers): the pattern must be consumed in full, but
/// the match may start and end anywhere in the text at no cost. The result is
/// therefore never larger than `pattern.chars().count()` (delete everything)
/// and is zero exactly when the pattern occurs verbatim.
pub fn substring_distance(pattern: &str, text: &str) -> usize {
    let m = pattern.chars().count();
    substring_distance_within(pattern, text, m).unwrap_or(m)
}

/// Like [`substring_distance`], but `None` when the best alignment needs more
/// than `max` edits.
///
/// Bounded with two early-exit paths:
/// 1. Only rows up to the last one still within `max` are computed per text
///    char (Ukkonen's cut-off), so a hopeless field costs O(max · |text|)
/// 2. An exact occurrence stops the scan
pub fn substring_distance_within(pattern: &str, text: &str, max: usize) -> Option<usize> {
    let p: Vec<char> = pattern.chars().collect();
    let m = p.len();
    if m == 0 {
        return Some(0);
    }

    // Cells are saturated at `cap`; every row past `last` holds `cap`
    let cap = max + 1;
    let mut col: Vec<usize> = (0..=m).map(|i| i.min(cap)).collect();
    let mut last = max.min(m);
    let mut best = if last == m { col[m] } else { cap };

    for tc in text.chars() {
        // Row 0 stays 0: a match may start at any text position
        let mut diag = 0;
        let top = (last + 1).min(m);
        for i in 1..=top {
            let above = col[i];
            let cost = if p[i - 1] == tc { 0 } else { 1 };
            col[i] = (diag + cost).min(col[i - 1] + 1).min(above + 1).min(cap);
            diag = above;
        }

        last = top;
        while last > 0 && col[last] > max {
            last -= 1;
        }

        if last == m && col[m] < best {
            best = col[m];
            if best == 0 {
                break;
            }
        }
    }

    (best <= max).then_some(best)
}
