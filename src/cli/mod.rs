// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the itinera command-line interface.
//!
//! `search` and `suggest` run against a JSON dataset loaded into a
//! [`MemoryStore`](itinera::MemoryStore). `popular` prints the configured list
//! and `locations` shows how a location string is expanded, which is handy
//! when a location filter does not match what you expected.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use itinera::EntityType;

#[derive(Parser)]
#[command(
    name = "itinera",
    about = "Fuzzy search and suggestions over travel itineraries and profiles",
    version
)]
pub struct Cli {
    /// JSON search configuration (missing keys take defaults)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which entity kinds to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Itinerary,
    User,
    All,
}

impl From<KindArg> for EntityType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Itinerary => EntityType::Itinerary,
            KindArg::User => EntityType::User,
            KindArg::All => EntityType::All,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search itineraries and users in a dataset
    Search {
        /// Path to a JSON dataset: {"itineraries": [...], "profiles": [...]}
        dataset: String,

        /// Search query
        query: String,

        /// Restrict to one entity kind
        #[arg(long = "type", value_enum, default_value = "all")]
        kind: KindArg,

        /// Keep only itineraries whose location matches (aliases understood)
        #[arg(long)]
        location: Option<String>,

        /// Earliest trip start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<String>,

        /// Latest trip end date (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<String>,

        /// Maximum results per entity kind
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete a partial query from recent titles and locations
    Suggest {
        /// Path to a JSON dataset
        dataset: String,

        /// Partial query
        query: String,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List popular searches
    Popular {
        /// Maximum number of entries
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the variants a location expands to
    Locations {
        /// Location text, e.g. "Austin, TX" or "NYC"
        location: String,
    },
}
