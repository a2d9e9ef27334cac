// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestions: short lists of terms, not ranked records.
//!
//! Two flavors:
//!
//! - [`suggestions`] piggybacks on a finished match pass. Terms that extend
//!   what the user typed come first, then the closest fuzzy hits.
//! - [`autocomplete`] is a pure prefix lookup: a range scan on the term map,
//!   no similarity, no ranking, no cache. It has to keep up with keystrokes.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use crate::index::TermIndex;
use crate::search::matcher::{MatchAccumulator, TermHit};
use crate::types::{FieldKind, Record};
use crate::utils::{char_len, normalize};

/// An autocomplete candidate plus one record that contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// Normalized term.
    pub term: String,
    /// Surface form for display.
    pub display: String,
    /// Example record, so the dropdown can say where the term comes from.
    pub example: Arc<Record>,
}

/// Deduplicated, prefix-first suggestions from a match pass.
///
/// Order: prefix hits before fuzzy hits, then higher similarity, then
/// alphabetical. The term equal to the query is left out, since suggesting
/// what was just typed helps nobody.
pub fn suggestions(acc: &MatchAccumulator, limit: usize) -> Vec<String> {
    if limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<&TermHit> = acc.hits().iter().filter(|hit| hit.term != acc.query()).collect();
    hits.sort_by(|a, b| compare_hits(a, b));

    let mut seen = HashSet::new();
    hits.into_iter()
        .filter(|hit| seen.insert(hit.term.as_str()))
        .take(limit)
        .map(|hit| hit.display.clone())
        .collect()
}

fn compare_hits(a: &TermHit, b: &TermHit) -> Ordering {
    b.is_prefix
        .cmp(&a.is_prefix)
        .then_with(|| b.similarity.total_cmp(&a.similarity))
        .then_with(|| a.term.cmp(&b.term))
}

/// Up to `limit` terms starting with `prefix`, excluding `prefix` itself.
///
/// Full names come before loose words, shorter terms before longer ones, ties
/// alphabetical. Blank prefixes return nothing.
pub fn autocomplete(index: &TermIndex, prefix: &str, limit: usize) -> Vec<Completion> {
    let prefix = normalize(prefix);
    if prefix.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(FieldKind, usize, Completion)> = index
        .terms_with_prefix(&prefix)
        .filter(|(term, _)| *term != prefix)
        .filter_map(|(term, entry)| {
            let best_field = entry.postings.iter().map(|p| p.field).min()?;
            let example = entry
                .postings
                .iter()
                .find_map(|posting| index.record(posting.record))?;
            Some((
                best_field,
                char_len(term),
                Completion {
                    term: term.to_string(),
                    display: entry.display.clone(),
                    example: Arc::clone(example),
                },
            ))
        })
        .collect();

    candidates.sort_by(|(field_a, len_a, a), (field_b, len_b, b)| {
        let full_a = field_a.is_full_field();
        let full_b = field_b.is_full_field();
        full_b
            .cmp(&full_a)
            .then_with(|| len_a.cmp(len_b))
            .then_with(|| a.term.cmp(&b.term))
    });
    candidates.truncate(limit);
    candidates.into_iter().map(|(_, _, completion)| completion).collect()
}
