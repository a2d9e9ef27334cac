// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Set once when the engine is constructed and read-only afterwards. Invalid
//! values are rejected up front by [`EngineConfig::validate`] so nothing has to
//! be re-checked on the search path.

use serde::{Deserialize, Serialize};

use crate::types::FieldKind;

/// Per-field posting weights. Primary names count most, description words least.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldWeights {
    pub primary: f64,
    pub secondary: f64,
    pub name_word: f64,
    pub body_word: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            primary: 1.0,
            secondary: 0.8,
            name_word: 0.7,
            body_word: 0.4,
        }
    }
}

impl FieldWeights {
    pub fn weight(&self, field: FieldKind) -> f64 {
        match field {
            FieldKind::Primary => self.primary,
            FieldKind::Secondary => self.secondary,
            FieldKind::NameWord => self.name_word,
            FieldKind::BodyWord => self.body_word,
        }
    }
}

/// Search engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Queries shorter than this (in chars, after normalization) return nothing.
    pub min_query_length: usize,

    /// Maximum suggestions attached to a search response.
    pub max_suggestions: usize,

    /// Maximum results returned per search.
    pub max_results: usize,

    /// Minimum similarity for a term to count as a match candidate.
    pub fuzzy_threshold: f64,

    /// Added to a match whose term equals the query.
    pub exact_match_bonus: f64,

    /// Added to a match where the query is a prefix of the term or vice versa.
    pub prefix_bonus: f64,

    /// Number of `(query, filters)` results kept in the result cache.
    pub cache_capacity: usize,

    pub field_weights: FieldWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            min_query_length: 2,
            max_suggestions: 5,
            max_results: 50,
            fuzzy_threshold: 0.3,
            exact_match_bonus: 0.5,
            prefix_bonus: 0.2,
            cache_capacity: 100,
            field_weights: FieldWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_query_length(mut self, length: usize) -> Self {
        self.min_query_length = length;
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    pub fn with_exact_match_bonus(mut self, bonus: f64) -> Self {
        self.exact_match_bonus = bonus;
        self
    }

    pub fn with_prefix_bonus(mut self, bonus: f64) -> Self {
        self.prefix_bonus = bonus;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    pub fn with_field_weights(mut self, weights: FieldWeights) -> Self {
        self.field_weights = weights;
        self
    }

    /// Check every value. Called by `Engine::new`, so an engine never holds a bad config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.fuzzy_threshold));
        }
        for (name, bonus) in [
            ("exactMatchBonus", self.exact_match_bonus),
            ("prefixBonus", self.prefix_bonus),
        ] {
            if !bonus.is_finite() || bonus < 0.0 {
                return Err(ConfigError::InvalidBonus { name, value: bonus });
            }
        }
        let weights = &self.field_weights;
        for (name, weight) in [
            ("primary", weights.primary),
            ("secondary", weights.secondary),
            ("nameWord", weights.name_word),
            ("bodyWord", weights.body_word),
        ] {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::InvalidFieldWeight { name, value: weight });
            }
        }
        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::ZeroMaxSuggestions);
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// `fuzzyThreshold` must be within `[0, 1]` (NaN is rejected too).
    #[error("fuzzyThreshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidBonus { name: &'static str, value: f64 },

    #[error("field weight {name} must be a finite, positive number, got {value}")]
    InvalidFieldWeight { name: &'static str, value: f64 },

    #[error("maxResults must be at least 1")]
    ZeroMaxResults,

    #[error("maxSuggestions must be at least 1")]
    ZeroMaxSuggestions,

    #[error("cacheCapacity must be at least 1")]
    ZeroCacheCapacity,
}
