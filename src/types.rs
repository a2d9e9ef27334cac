// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks: records, their fields, and the postings that point at them.
//!
//! Records belong to whoever loaded the catalog. The index only ever holds
//! shared, read-only handles (`Arc<Record>`) captured at build time, so a
//! result can outlive the index generation that produced it.
//!
//! # Invariants
//!
//! - **RecordId**: unique and stable for the lifetime of one index generation.
//!   Duplicates are dropped at build time.
//! - **Posting**: `record < records.len()` of the generation it belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Stable identifier of a catalog record (e.g. `"paella-valenciana"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        RecordId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        RecordId(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        RecordId(id)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// Boolean dietary flags. Absent flags deserialize as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attributes {
    pub vegetarian: bool,
    pub vegan: bool,
    pub gluten_free: bool,
    pub contains_pork: bool,
    pub contains_dairy: bool,
    pub contains_nuts: bool,
    pub contains_seafood: bool,
    pub spicy: bool,
}

/// One catalog entry: a dish with a name, an optional second-language name,
/// and an optional free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    /// Primary name, e.g. the name printed on the menu.
    pub primary: String,
    /// Secondary name, typically a translation ("rice dish").
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attributes: Attributes,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, primary: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            primary: primary.into(),
            secondary: None,
            description: None,
            attributes: Attributes::default(),
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// Which part of a record a term came from.
///
/// The derived `Ord` follows field importance (Primary first), which is what
/// autocomplete uses to put full names ahead of loose words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    /// The full primary name.
    Primary,
    /// The full secondary name.
    Secondary,
    /// A single word from the primary or secondary name.
    NameWord,
    /// A single word from the description.
    BodyWord,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Primary => "primary",
            FieldKind::Secondary => "secondary",
            FieldKind::NameWord => "name word",
            FieldKind::BodyWord => "description",
        }
    }

    /// Full-field terms (as opposed to single extracted words).
    pub fn is_full_field(&self) -> bool {
        matches!(self, FieldKind::Primary | FieldKind::Secondary)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(record, field, weight)` entry attached to a term.
///
/// `record` indexes into the records of the index generation that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Posting {
    pub record: usize,
    pub field: FieldKind,
    pub weight: f64,
}

// =============================================================================
// PREFERENCES
// =============================================================================

/// What the user thinks of a record, as reported by the preference provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceState {
    Liked,
    Disliked,
    #[default]
    Neutral,
}
