// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where records come from.
//!
//! The engine never parses anything itself. It asks a [`RecordProvider`] for
//! an already-typed slice of records, and only once the provider says it is
//! loaded. [`Catalog`] is the in-crate provider: an in-memory list that can be
//! filled from JSON.
//!
//! Accepted JSON shapes:
//!
//! ```json
//! [{ "id": "paella", "primary": "Paella", "attributes": { "containsPork": false } }]
//! ```
//!
//! or the same array wrapped as `{ "records": [...] }`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::EngineError;
use crate::types::Record;

/// A source of records with a load lifecycle.
pub trait RecordProvider {
    fn is_loaded(&self) -> bool;

    /// All records. Fails with [`EngineError::Precondition`] before load.
    fn records(&self) -> Result<&[Record], EngineError>;
}

/// In-memory record list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Option<Vec<Record>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Record>),
    Wrapped { records: Vec<Record> },
}

impl Catalog {
    /// A catalog that has not been loaded yet.
    pub fn pending() -> Self {
        Catalog { records: None }
    }

    pub fn new(records: Vec<Record>) -> Self {
        Catalog {
            records: Some(records),
        }
    }

    /// Replace the contents. The catalog counts as loaded afterwards, even if empty.
    pub fn load(&mut self, records: Vec<Record>) {
        self.records = Some(records);
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let records = match serde_json::from_str::<CatalogFile>(json)? {
            CatalogFile::Bare(records) | CatalogFile::Wrapped { records } => records,
        };
        Ok(Catalog::new(records))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| EngineError::Catalog(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordProvider for Catalog {
    fn is_loaded(&self) -> bool {
        self.records.is_some()
    }

    fn records(&self) -> Result<&[Record], EngineError> {
        self.records.as_deref().ok_or_else(EngineError::not_loaded)
    }
}
