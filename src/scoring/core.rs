// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind ranking.
//!
//! Per entry:
//!
//! ```text
//! adjusted = similarity × field_weight
//!          + exact_bonus   (term == query)
//!          + prefix_bonus  (term/query prefix of the other)
//! adjusted ×= 0.9          (found through a single query word)
//! ```
//!
//! Per record:
//!
//! ```text
//! final = Σ adjusted / √(entry count)
//! ```
//!
//! # Key property: many weak hits don't add up
//!
//! With `n` entries of score `s`, the final score is `s·√n`. It grows, but
//! sub-linearly, so a record that mentions "rice" in five places does not
//! bury the dish actually called "Rice".

use crate::search::matcher::MatchEntry;

/// Multiplier applied to entries from the per-word pass.
pub const PARTIAL_WORD_MULTIPLIER: f64 = 0.9;

/// Bonuses added on top of weighted similarity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bonuses {
    pub exact: f64,
    pub prefix: f64,
}

/// Score of a single match entry.
pub fn adjusted_score(entry: &MatchEntry, bonuses: &Bonuses) -> f64 {
    let mut score = entry.similarity * entry.weight;
    if entry.is_exact {
        score += bonuses.exact;
    }
    if entry.is_prefix {
        score += bonuses.prefix;
    }
    if entry.is_partial_word {
        score *= PARTIAL_WORD_MULTIPLIER;
    }
    score
}

/// Square-root count normalization: `raw / √count`. Zero entries score zero.
pub fn normalize_by_count(raw: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    raw / (count as f64).sqrt()
}
