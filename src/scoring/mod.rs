// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers.
//!
//! Scores live in `[0, 1]` and lower is better. Zero means an exact hit in
//! every field that matched; one means "barely inside tolerance". The field
//! weights decide how much each hit pulls the product towards zero.

mod core;
pub mod ranking;

pub use self::core::*;
