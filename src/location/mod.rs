// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Location aliases and normalization.
//!
//! `aliases` is the static data, `normalize` turns a location string into the
//! set of variants the rest of the crate compares against.

pub mod aliases;
mod normalize;

pub use normalize::{extract_location, location_matches, normalize_location, LocationVariants};
