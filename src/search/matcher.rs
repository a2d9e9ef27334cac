// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matcher: query → per-record match evidence.
//!
//! Two passes over the vocabulary:
//!
//! 1. **Whole query.** Every term is compared with the full normalized query.
//! 2. **Per word.** Only when the query has two or more words. Each word is
//!    compared on its own and the similarity is scaled by
//!    [`PARTIAL_WORD_PENALTY`], so "paella verduras" can find the word
//!    "verduras" without letting loose word hits outweigh a full-name match.
//!
//! Both passes are O(terms × similarity cost). That is fine for a menu-sized
//! vocabulary (low thousands of terms); anything much larger would want a
//! trigram or prefix pre-filter before calling `similarity`.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::DegradedSearch;
use crate::fuzzy::similarity;
use crate::index::TermIndex;
use crate::types::FieldKind;
use crate::utils::{char_len, extract_words, normalize};

/// Similarity multiplier for matches found through a single query word.
pub const PARTIAL_WORD_PENALTY: f64 = 0.8;

/// Query words this short are ignored by the per-word pass.
///
/// A lone letter is a containment hit on every short word ("a" scores 0.5
/// against "al"), so it only adds noise. It still counts in the whole-query pass.
const MIN_QUERY_WORD_LEN: usize = 1;

/// One piece of evidence that a record matches the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchEntry {
    pub similarity: f64,
    pub field: FieldKind,
    pub weight: f64,
    /// The term equals the (normalized) query or query word.
    pub is_exact: bool,
    /// One of term and query is a prefix of the other.
    pub is_prefix: bool,
    /// Found by the per-word pass.
    pub is_partial_word: bool,
}

/// A vocabulary term that cleared the threshold, kept for suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct TermHit {
    pub term: String,
    pub display: String,
    pub similarity: f64,
    pub is_prefix: bool,
}

/// Transient per-search evidence, keyed by record slot.
///
/// Slots iterate in catalog order, which is what gives the ranker its
/// "ties broken by input order" behavior.
#[derive(Debug, Clone, Default)]
pub struct MatchAccumulator {
    query: String,
    entries: BTreeMap<usize, Vec<MatchEntry>>,
    hits: Vec<TermHit>,
}

impl MatchAccumulator {
    /// The normalized query this evidence was collected for.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// `(record slot, entries)` pairs in catalog order.
    pub fn records(&self) -> impl Iterator<Item = (usize, &[MatchEntry])> {
        self.entries.iter().map(|(slot, entries)| (*slot, entries.as_slice()))
    }

    pub fn entries_for(&self, slot: usize) -> Option<&[MatchEntry]> {
        self.entries.get(&slot).map(Vec::as_slice)
    }

    pub fn hits(&self) -> &[TermHit] {
        &self.hits
    }

    /// Number of records with at least one entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, slot: usize, entry: MatchEntry) {
        self.entries.entry(slot).or_default().push(entry);
    }
}

/// Collect match evidence for `query` against every term in `index`.
pub fn match_query(index: &TermIndex, query: &str, threshold: f64) -> MatchAccumulator {
    let normalized = normalize(query);
    let mut acc = MatchAccumulator {
        query: normalized.clone(),
        ..MatchAccumulator::default()
    };
    if normalized.is_empty() {
        return acc;
    }

    scan(index, &normalized, threshold, false, &mut acc);

    let words: Vec<&str> = extract_words(&normalized).collect();
    if words.len() >= 2 {
        for word in words.iter().filter(|w| char_len(w) > MIN_QUERY_WORD_LEN) {
            scan(index, word, threshold, true, &mut acc);
        }
    }

    acc
}

fn scan(index: &TermIndex, needle: &str, threshold: f64, partial: bool, acc: &mut MatchAccumulator) {
    let record_count = index.records().len();

    for (term, entry) in index.terms() {
        let raw = similarity(needle, term);
        if raw < threshold {
            continue;
        }

        let similarity = if partial { raw * PARTIAL_WORD_PENALTY } else { raw };
        let is_exact = term == needle;
        let is_prefix = term.starts_with(needle) || needle.starts_with(term);

        acc.hits.push(TermHit {
            term: term.to_string(),
            display: entry.display.clone(),
            similarity,
            is_prefix,
        });

        for posting in &entry.postings {
            if posting.record >= record_count {
                let issue = DegradedSearch::DanglingPosting {
                    term: term.to_string(),
                    record: posting.record,
                    records: record_count,
                };
                warn!(%issue, "skipping posting");
                continue;
            }
            acc.push(
                posting.record,
                MatchEntry {
                    similarity,
                    field: posting.field,
                    weight: posting.weight,
                    is_exact,
                    is_prefix,
                    is_partial_word: partial,
                },
            );
        }
    }
}
