// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search service: where queries meet records.
//!
//! One [`SearchService`] wraps a record store, a configuration and the
//! per-kind matchers built from it. Its operations are spread over three
//! files by concern: full search in `orchestrator`, autocomplete in
//! `suggest`, the search log and popular searches in `history`.

mod history;
mod orchestrator;
mod suggest;

pub use history::{PopularSearchesProvider, StaticPopularSearches};
pub use orchestrator::SearchService;
pub use suggest::SuggestionSet;
