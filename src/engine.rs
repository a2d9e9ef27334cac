// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine facade: build, search, autocomplete, rebuild.
//!
//! # Search pipeline
//!
//! ```text
//! query ──▶ normalize ──▶ too short? ──▶ empty response
//!                │
//!                ▼
//!          cache lookup ──hit──▶ memoized response (fresh `elapsed`)
//!                │ miss
//!                ▼
//!   match_query ─▶ rank ─▶ apply_filters ─▶ truncate ─▶ cache store
//! ```
//!
//! `autocomplete` skips everything after the index: no ranking, no filters,
//! no cache.
//!
//! # Generations
//!
//! A rebuild constructs a complete new [`TermIndex`] while the old one stays
//! installed, then swaps it in with one assignment. Every mutating call takes
//! `&mut self`, so no search can run between the start of a build and the
//! swap. If the provider fails, the previous generation stays live.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::cache::{CacheEntry, CacheKey, CacheStats, ResultCache};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::filter::{apply_filters, FilterSet, NoPreferences, PreferenceProvider};
use crate::index::{IndexStats, TermIndex};
use crate::provider::RecordProvider;
use crate::scoring::{rank, Bonuses, ScoredResult};
use crate::search::{autocomplete, match_query, suggestions, Completion};
use crate::utils::{char_len, normalize};

/// Lifecycle of the live index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// Nothing built yet.
    Empty,
    /// A build is in progress.
    Building,
    /// A generation is installed and searchable.
    Ready,
}

/// Output of [`Engine::search`].
#[derive(Debug, Clone, Default)]
pub struct SearchResponse {
    /// At most `max_results`, best first.
    pub results: Vec<ScoredResult>,
    /// At most `max_suggestions` display strings.
    pub suggestions: Vec<String>,
    /// Results that passed the filters, before truncation.
    pub total_match_count: usize,
    pub elapsed: Duration,
}

impl SearchResponse {
    fn empty(elapsed: Duration) -> Self {
        SearchResponse {
            elapsed,
            ..SearchResponse::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Search engine over one record provider.
pub struct Engine<P: RecordProvider> {
    provider: P,
    config: EngineConfig,
    preferences: Box<dyn PreferenceProvider>,
    index: Option<TermIndex>,
    state: IndexState,
    cache: ResultCache,
    generation: u64,
}

impl<P: RecordProvider> Engine<P> {
    /// Create an engine. Fails if `config` does not validate.
    ///
    /// No index is built here, since the provider may not be loaded yet.
    pub fn new(provider: P, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let cache = ResultCache::new(config.cache_capacity);
        Ok(Engine {
            provider,
            config,
            preferences: Box::new(NoPreferences),
            index: None,
            state: IndexState::Empty,
            cache,
            generation: 0,
        })
    }

    pub fn with_preferences(mut self, preferences: impl PreferenceProvider + 'static) -> Self {
        self.set_preferences(preferences);
        self
    }

    /// Install a new preference source. Cached results may depend on the old
    /// one, so the cache is cleared.
    pub fn set_preferences(&mut self, preferences: impl PreferenceProvider + 'static) {
        self.preferences = Box::new(preferences);
        self.cache.clear();
    }

    /// Build a new index generation from the provider and install it.
    ///
    /// Clears the result cache. Fails with [`EngineError::Precondition`] if the
    /// provider is not loaded, in which case the current generation is kept.
    pub fn build_index(&mut self) -> Result<IndexStats, EngineError> {
        let previous = self.state;
        self.state = IndexState::Building;

        let records = match self.provider.records() {
            Ok(records) => records,
            Err(err) => {
                self.state = previous;
                return Err(err);
            }
        };

        let started = Instant::now();
        let next = TermIndex::build_generation(records, &self.config.field_weights, self.generation + 1);
        let stats = next.stats();

        self.index = Some(next);
        self.generation += 1;
        self.cache.clear();
        self.state = IndexState::Ready;

        debug!(
            generation = stats.generation,
            elapsed_us = started.elapsed().as_micros() as u64,
            "installed index generation"
        );
        Ok(stats)
    }

    /// Re-index after a data refresh. Same as [`build_index`](Self::build_index):
    /// the cache is always dropped, whatever changed.
    pub fn rebuild_index(&mut self) -> Result<IndexStats, EngineError> {
        self.build_index()
    }

    /// Ranked, filtered search.
    ///
    /// Queries shorter than `min_query_length` after normalization return an
    /// empty response without checking anything else. Otherwise the provider
    /// must be loaded and an index built.
    pub fn search(&mut self, query: &str, filters: &FilterSet) -> Result<SearchResponse, EngineError> {
        let started = Instant::now();
        let normalized = normalize(query);
        if normalized.is_empty() || char_len(&normalized) < self.config.min_query_length {
            return Ok(SearchResponse::empty(started.elapsed()));
        }

        if !self.provider.is_loaded() {
            return Err(EngineError::not_loaded());
        }
        let Some(index) = self.index.as_ref() else {
            return Err(EngineError::not_built());
        };

        let key = CacheKey::new(normalized, filters.cache_key());
        if let Some(entry) = self.cache.get(&key) {
            return Ok(SearchResponse {
                results: entry.results.clone(),
                suggestions: entry.suggestions.clone(),
                total_match_count: entry.total_match_count,
                elapsed: started.elapsed(),
            });
        }

        let acc = match_query(index, &key.query, self.config.fuzzy_threshold);
        let matched_at = started.elapsed();

        let bonuses = Bonuses {
            exact: self.config.exact_match_bonus,
            prefix: self.config.prefix_bonus,
        };
        let ranked = rank(index, &acc, &bonuses);
        let mut results = apply_filters(ranked, filters, self.preferences.as_ref());
        let total_match_count = results.len();
        results.truncate(self.config.max_results);
        let suggestions = suggestions(&acc, self.config.max_suggestions);

        let elapsed = started.elapsed();
        debug!(
            query = %key.query,
            filters = %key.filters,
            candidates = acc.len(),
            total_match_count,
            match_us = matched_at.as_micros() as u64,
            total_us = elapsed.as_micros() as u64,
            "search finished"
        );

        self.cache.insert(
            key,
            CacheEntry {
                results: results.clone(),
                suggestions: suggestions.clone(),
                total_match_count,
                inserted_at: Instant::now(),
            },
        );

        Ok(SearchResponse {
            results,
            suggestions,
            total_match_count,
            elapsed,
        })
    }

    /// Prefix completions with one example record each. Empty before the first build.
    pub fn autocomplete(&self, prefix: &str, limit: usize) -> Vec<Completion> {
        match &self.index {
            Some(index) => autocomplete(index, prefix, limit),
            None => Vec::new(),
        }
    }

    pub fn state(&self) -> IndexState {
        self.state
    }

    /// The live index generation, if any.
    pub fn index(&self) -> Option<&TermIndex> {
        self.index.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access for reloading data. Call [`rebuild_index`](Self::rebuild_index)
    /// afterwards; searches keep using the old generation until then.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
