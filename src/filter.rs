// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Post-ranking filters: dietary flags and like/dislike state.
//!
//! A [`FilterSet`] is ANDed: a result survives only if every filter accepts
//! it. Filters are named, and the name is their identity. Two sets with the
//! same names are the same set regardless of insertion order, which is what
//! makes [`FilterSet::cache_key`] safe to use in the result cache.
//!
//! The engine knows nothing about preferences beyond what a
//! [`PreferenceProvider`] reports. Callers compose the predicates.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::scoring::ScoredResult;
use crate::types::{PreferenceState, Record, RecordId};

/// Source of per-record like/dislike state.
pub trait PreferenceProvider {
    fn state(&self, id: &RecordId) -> PreferenceState;
}

/// Every record is neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreferences;

impl PreferenceProvider for NoPreferences {
    fn state(&self, _id: &RecordId) -> PreferenceState {
        PreferenceState::Neutral
    }
}

impl PreferenceProvider for HashMap<RecordId, PreferenceState> {
    fn state(&self, id: &RecordId) -> PreferenceState {
        self.get(id).copied().unwrap_or_default()
    }
}

type PredicateFn = dyn Fn(&Record, PreferenceState) -> bool + Send + Sync;

/// A named boolean predicate over a record and its preference state.
#[derive(Clone)]
pub enum Filter {
    Vegetarian,
    Vegan,
    GlutenFree,
    NoPork,
    NoDairy,
    NoNuts,
    NoSeafood,
    NotSpicy,
    /// Only records the user liked.
    Liked,
    /// Hide records the user disliked.
    NotDisliked,
    /// Caller-defined predicate, identified by `name`.
    Custom { name: String, predicate: Arc<PredicateFn> },
}

impl Filter {
    /// Wrap a closure as a named filter.
    pub fn custom<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Record, PreferenceState) -> bool + Send + Sync + 'static,
    {
        Filter::Custom {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Parse a built-in filter by name (`"vegetarian"`, `"no-pork"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        let filter = match name.trim().to_lowercase().replace('_', "-").as_str() {
            "vegetarian" => Filter::Vegetarian,
            "vegan" => Filter::Vegan,
            "gluten-free" => Filter::GlutenFree,
            "no-pork" => Filter::NoPork,
            "no-dairy" => Filter::NoDairy,
            "no-nuts" => Filter::NoNuts,
            "no-seafood" => Filter::NoSeafood,
            "not-spicy" => Filter::NotSpicy,
            "liked" => Filter::Liked,
            "not-disliked" => Filter::NotDisliked,
            _ => return None,
        };
        Some(filter)
    }

    pub fn name(&self) -> &str {
        match self {
            Filter::Vegetarian => "vegetarian",
            Filter::Vegan => "vegan",
            Filter::GlutenFree => "gluten-free",
            Filter::NoPork => "no-pork",
            Filter::NoDairy => "no-dairy",
            Filter::NoNuts => "no-nuts",
            Filter::NoSeafood => "no-seafood",
            Filter::NotSpicy => "not-spicy",
            Filter::Liked => "liked",
            Filter::NotDisliked => "not-disliked",
            Filter::Custom { name, .. } => name,
        }
    }

    pub fn accepts(&self, record: &Record, preference: PreferenceState) -> bool {
        let attributes = &record.attributes;
        match self {
            Filter::Vegetarian => attributes.vegetarian,
            Filter::Vegan => attributes.vegan,
            Filter::GlutenFree => attributes.gluten_free,
            Filter::NoPork => !attributes.contains_pork,
            Filter::NoDairy => !attributes.contains_dairy,
            Filter::NoNuts => !attributes.contains_nuts,
            Filter::NoSeafood => !attributes.contains_seafood,
            Filter::NotSpicy => !attributes.spicy,
            Filter::Liked => preference == PreferenceState::Liked,
            Filter::NotDisliked => preference != PreferenceState::Disliked,
            Filter::Custom { predicate, .. } => predicate(record, preference),
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Filter({})", self.name())
    }
}

impl PartialEq for Filter {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Filter {}

/// An order-independent set of filters, ANDed together.
///
/// Adding a filter whose name is already present replaces the old one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    filters: BTreeMap<String, Filter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: Filter) -> Self {
        self.insert(filter);
        self
    }

    pub fn insert(&mut self, filter: Filter) {
        self.filters.insert(filter.name().to_string(), filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.values()
    }

    /// Canonical key: sorted, comma-joined filter names. Empty set → `""`.
    ///
    /// `\\` and `,` inside a name are backslash-escaped, so a custom filter
    /// named `"a,b"` never shares a key with the pair `"a"`, `"b"`.
    pub fn cache_key(&self) -> String {
        self.filters
            .keys()
            .map(|name| escape_key_part(name))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Does every filter accept this record?
    pub fn accepts(&self, record: &Record, preference: PreferenceState) -> bool {
        self.filters.values().all(|filter| filter.accepts(record, preference))
    }
}

fn escape_key_part(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '\\' || c == ',' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl FromIterator<Filter> for FilterSet {
    fn from_iter<I: IntoIterator<Item = Filter>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for filter in iter {
            set.insert(filter);
        }
        set
    }
}

/// Keep the results every filter accepts, preserving order.
pub fn apply_filters(
    results: Vec<ScoredResult>,
    filters: &FilterSet,
    preferences: &dyn PreferenceProvider,
) -> Vec<ScoredResult> {
    if filters.is_empty() {
        return results;
    }
    results
        .into_iter()
        .filter(|result| filters.accepts(&result.record, preferences.state(&result.record.id)))
        .collect()
}
