// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only caller mistakes surface as errors: asking for results before the
//! catalog is loaded, or handing over a nonsensical configuration. Anything
//! that goes wrong *inside* a search is a [`DegradedSearch`]: logged, the
//! offending record or term skipped, and the search finishes with what is left.

use crate::config::ConfigError;

/// Errors returned by the public engine API.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// An operation was called out of order (e.g. search before the records loaded).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The engine configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The catalog could not be read or parsed.
    #[error("catalog error: {0}")]
    Catalog(String),
}

impl EngineError {
    pub(crate) fn not_loaded() -> Self {
        EngineError::Precondition("records are not loaded yet".to_string())
    }

    pub(crate) fn not_built() -> Self {
        EngineError::Precondition("search index has not been built".to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Catalog(err.to_string())
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Catalog(err.to_string())
    }
}

/// A recoverable problem found while matching or ranking.
///
/// Never returned to callers. Whoever hits one logs it and skips the item.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum DegradedSearch {
    #[error("posting for term '{term}' points at record {record}, but only {records} exist")]
    DanglingPosting {
        term: String,
        record: usize,
        records: usize,
    },

    #[error("non-finite score {score} for record '{record_id}'")]
    NonFiniteScore { record_id: String, score: f64 },
}
