// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term index construction.
//!
//! Maps every normalized term (a full name, or a single word) to the postings
//! that mention it. Terms live in a `BTreeMap`: the matcher scans them in a
//! stable order, and autocomplete answers prefix queries with a range scan
//! instead of touching the whole vocabulary.
//!
//! # What gets indexed, per record
//!
//! | Source                      | FieldKind   | Rule                       |
//! |-----------------------------|-------------|----------------------------|
//! | primary name                | `Primary`   | whole normalized value     |
//! | secondary name              | `Secondary` | whole normalized value     |
//! | words of primary/secondary  | `NameWord`  | words longer than 1 char   |
//! | words of the description    | `BodyWord`  | words longer than 2 chars  |
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY_TERMS**: every key is non-empty and produced by `normalize`
//! 2. **NON_EMPTY_POSTINGS**: every term has at least one posting
//! 3. **POSTING_WELLFORMED**: every posting's `record` indexes into `records`
//! 4. **UNIQUE_IDS**: no two records in one generation share an id

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::FieldWeights;
use crate::types::{FieldKind, Posting, Record, RecordId};
use crate::utils::{char_len, extract_words, normalize};

/// Name words must be longer than this many chars to be indexed.
pub const MIN_NAME_WORD_LEN: usize = 1;

/// Description words must be longer than this many chars to be indexed.
pub const MIN_BODY_WORD_LEN: usize = 2;

/// Everything the index knows about one term.
#[derive(Debug, Clone)]
pub struct TermEntry {
    /// Surface form shown to users. Full-field terms keep the catalog's casing.
    pub display: String,
    pub postings: Vec<Posting>,
}

/// Summary of one index generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub records: usize,
    /// Records dropped at build time (duplicate id, blank primary name).
    pub skipped: usize,
    pub terms: usize,
    pub postings: usize,
    pub generation: u64,
}

/// One immutable generation of the term index.
#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    terms: BTreeMap<String, TermEntry>,
    records: Vec<Arc<Record>>,
    skipped: usize,
    generation: u64,
}

impl TermIndex {
    /// Build an index over `records` using the given field weights.
    ///
    /// Malformed records are skipped with a warning rather than failing the
    /// build: one bad menu entry should not take search down for the rest.
    pub fn build(records: &[Record], weights: &FieldWeights) -> Self {
        Self::build_generation(records, weights, 0)
    }

    pub(crate) fn build_generation(records: &[Record], weights: &FieldWeights, generation: u64) -> Self {
        let mut index = TermIndex {
            generation,
            ..TermIndex::default()
        };
        let mut seen_ids: HashSet<&RecordId> = HashSet::with_capacity(records.len());

        for record in records {
            if normalize(&record.primary).is_empty() {
                warn!(record_id = %record.id, "skipping record with blank primary name");
                index.skipped += 1;
                continue;
            }
            if !seen_ids.insert(&record.id) {
                warn!(record_id = %record.id, "skipping record with duplicate id");
                index.skipped += 1;
                continue;
            }

            let slot = index.records.len();
            index.records.push(Arc::new(record.clone()));
            index.add_record(slot, record, weights);
        }

        let stats = index.stats();
        info!(
            generation = stats.generation,
            records = stats.records,
            skipped = stats.skipped,
            terms = stats.terms,
            postings = stats.postings,
            "built term index"
        );
        index
    }

    fn add_record(&mut self, slot: usize, record: &Record, weights: &FieldWeights) {
        // One posting per (term, field) per record, however often the word repeats
        let mut added: HashSet<(String, FieldKind)> = HashSet::new();

        let names = [
            (Some(record.primary.as_str()), FieldKind::Primary),
            (record.secondary.as_deref(), FieldKind::Secondary),
        ];
        for (name, field) in names {
            let Some(name) = name else { continue };
            let normalized = normalize(name);
            if normalized.is_empty() {
                continue;
            }

            let display = name.split_whitespace().collect::<Vec<_>>().join(" ");
            self.add_posting(&mut added, &normalized, &display, slot, field, weights);

            for word in extract_words(&normalized) {
                if char_len(word) > MIN_NAME_WORD_LEN {
                    self.add_posting(&mut added, word, word, slot, FieldKind::NameWord, weights);
                }
            }
        }

        if let Some(description) = record.description.as_deref() {
            let normalized = normalize(description);
            for word in extract_words(&normalized) {
                if char_len(word) > MIN_BODY_WORD_LEN {
                    self.add_posting(&mut added, word, word, slot, FieldKind::BodyWord, weights);
                }
            }
        }
    }

    fn add_posting(
        &mut self,
        added: &mut HashSet<(String, FieldKind)>,
        term: &str,
        display: &str,
        record: usize,
        field: FieldKind,
        weights: &FieldWeights,
    ) {
        if !added.insert((term.to_string(), field)) {
            return;
        }

        let posting = Posting {
            record,
            field,
            weight: weights.weight(field),
        };
        match self.terms.get_mut(term) {
            Some(entry) => {
                // A full name beats a bare word as the surface form
                if field.is_full_field() && !entry.postings.iter().any(|p| p.field.is_full_field()) {
                    entry.display = display.to_string();
                }
                entry.postings.push(posting);
            }
            None => {
                self.terms.insert(
                    term.to_string(),
                    TermEntry {
                        display: display.to_string(),
                        postings: vec![posting],
                    },
                );
            }
        }
    }

    /// Look up an exact (already normalized) term.
    pub fn get(&self, term: &str) -> Option<&TermEntry> {
        self.terms.get(term)
    }

    /// All terms in lexicographic order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &TermEntry)> {
        self.terms.iter().map(|(term, entry)| (term.as_str(), entry))
    }

    /// Terms starting with `prefix` (already normalized), in lexicographic order.
    pub fn terms_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a TermEntry)> + 'a {
        self.terms
            .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, entry)| (term.as_str(), entry))
    }

    /// Records of this generation, in catalog order.
    pub fn records(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn record(&self, slot: usize) -> Option<&Arc<Record>> {
        self.records.get(slot)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            records: self.records.len(),
            skipped: self.skipped,
            terms: self.terms.len(),
            postings: self.terms.values().map(|entry| entry.postings.len()).sum(),
            generation: self.generation,
        }
    }
}
