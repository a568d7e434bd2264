// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! `StoreError` comes from the record store and never escapes a search call:
//! the orchestrator turns it into an empty list and a log line. `ConfigError`
//! is raised once, when a service or matcher is built. `Error` covers loading
//! datasets and configuration files, and is what the binary reports.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a [`RecordStore`](crate::store::RecordStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("record store timed out")]
    Timeout,
}

/// Invalid matcher or service configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown {kind} field `{field}` (expected one of: {expected})")]
    UnknownField {
        kind: &'static str,
        field: String,
        expected: String,
    },

    #[error("weight for field `{field}` must be finite and positive, got {weight}")]
    InvalidWeight { field: String, weight: f64 },

    #[error("duplicate {kind} field `{field}`")]
    DuplicateField { kind: &'static str, field: String },

    #[error("no fields configured for {0}")]
    EmptyFields(&'static str),

    #[error("threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    #[error("{name} must be at least 1")]
    InvalidWindow { name: &'static str },
}

/// Errors from loading data or configuration from disk.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
