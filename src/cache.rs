// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded result cache keyed by `(normalized query, filter set)`.
//!
//! Eviction is by insertion order: when full, the entry stored longest ago
//! goes first. A hit does not move an entry to the back. The engine clears
//! the whole cache on rebuild; there is no per-key invalidation.

use std::collections::{HashMap, VecDeque};
use std::time::Instant;

use tracing::debug;

use crate::scoring::ScoredResult;

/// Cache key. `filters` is [`FilterSet::cache_key`](crate::filter::FilterSet::cache_key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub query: String,
    pub filters: String,
}

impl CacheKey {
    pub fn new(query: impl Into<String>, filters: impl Into<String>) -> Self {
        CacheKey {
            query: query.into(),
            filters: filters.into(),
        }
    }
}

/// A memoized search output.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub results: Vec<ScoredResult>,
    pub suggestions: Vec<String>,
    pub total_match_count: usize,
    pub inserted_at: Instant,
}

/// Counters for `carta inspect` and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub len: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<CacheKey, CacheEntry>,
    /// Insertion order (front = oldest)
    order: VecDeque<CacheKey>,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl ResultCache {
    /// A capacity of zero is clamped to one; `EngineConfig::validate` rejects it earlier.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        ResultCache {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<&CacheEntry> {
        match self.entries.get(key) {
            Some(entry) => {
                self.hits += 1;
                debug!(query = %key.query, filters = %key.filters, "result cache hit");
                Some(entry)
            }
            None => {
                self.misses += 1;
                debug!(query = %key.query, filters = %key.filters, "result cache miss");
                None
            }
        }
    }

    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry) {
        // A replaced key must not count toward the bound
        if self.entries.remove(&key).is_some() {
            self.order.retain(|k| k != &key);
        }

        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.evictions += 1;
            debug!(query = %oldest.query, filters = %oldest.filters, "evicted cached result");
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, entry);
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            debug!(entries = self.entries.len(), "cleared result cache");
        }
        self.entries.clear();
        self.order.clear();
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            len: self.entries.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }
}
