// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: accumulated evidence → sorted results.
//!
//! Sort order is score descending. The sort is stable and the accumulator
//! yields records in catalog order, so equal scores keep catalog order.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::warn;

use super::core::{adjusted_score, normalize_by_count, Bonuses};
use crate::error::DegradedSearch;
use crate::index::TermIndex;
use crate::search::matcher::{MatchAccumulator, MatchEntry};
use crate::types::{FieldKind, Record};

/// One ranked record.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult {
    pub record: Arc<Record>,
    pub score: f64,
    /// Field of the single highest-scoring entry ("why this matched").
    pub best_field: FieldKind,
    /// Number of match entries that contributed.
    pub match_count: usize,
}

/// Score every record in `acc` and sort by score, highest first.
///
/// Records that cannot be scored (dangling slot, non-finite score) are logged
/// and left out; the rest of the ranking is unaffected.
pub fn rank(index: &TermIndex, acc: &MatchAccumulator, bonuses: &Bonuses) -> Vec<ScoredResult> {
    let mut results: Vec<ScoredResult> = acc
        .records()
        .filter_map(|(slot, entries)| match score_record(index, slot, entries, bonuses) {
            Ok(result) => Some(result),
            Err(issue) => {
                warn!(%issue, "skipping record during ranking");
                None
            }
        })
        .collect();

    results.sort_by(compare_results);
    results
}

fn score_record(
    index: &TermIndex,
    slot: usize,
    entries: &[MatchEntry],
    bonuses: &Bonuses,
) -> Result<ScoredResult, DegradedSearch> {
    let record = index.record(slot).ok_or_else(|| DegradedSearch::DanglingPosting {
        term: String::new(),
        record: slot,
        records: index.records().len(),
    })?;

    let mut raw = 0.0;
    let mut best: Option<(f64, FieldKind)> = None;
    for entry in entries {
        let adjusted = adjusted_score(entry, bonuses);
        raw += adjusted;
        // strict > keeps the first of equal entries
        if best.map_or(true, |(top, _)| adjusted > top) {
            best = Some((adjusted, entry.field));
        }
    }

    let score = normalize_by_count(raw, entries.len());
    if !score.is_finite() {
        return Err(DegradedSearch::NonFiniteScore {
            record_id: record.id.to_string(),
            score,
        });
    }

    Ok(ScoredResult {
        record: Arc::clone(record),
        score,
        best_field: best.map_or(FieldKind::Primary, |(_, field)| field),
        match_count: entries.len(),
    })
}

/// Higher score first. Equal scores compare equal so a stable sort keeps input order.
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score.total_cmp(&a.score)
}
