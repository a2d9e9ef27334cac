// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Composite string similarity in `[0, 1]`.
//!
//! Edit distance alone is harsh on swapped letters and partial words; bigram
//! overlap alone is too forgiving of scrambled ones. Blending the two (70/30)
//! tolerates single-character typos and OCR noise while still rewarding
//! shared fragments. Containment short-circuits the DP entirely, which is the
//! common case while someone is still typing.
//!
//! Callers pass normalized (lowercased, accent-folded) strings.

use std::collections::HashSet;

use super::levenshtein::levenshtein_distance;

/// Weight of the edit-distance component in the blended score.
pub const EDIT_DISTANCE_WEIGHT: f64 = 0.7;

/// Weight of the bigram-overlap component in the blended score.
pub const BIGRAM_WEIGHT: f64 = 0.3;

/// Similarity between two normalized strings.
///
/// - Either string empty → `0.0`
/// - Equal → `1.0`
/// - One contains the other → `len(shorter) / len(longer)`
/// - Otherwise → `0.7 * edit_similarity + 0.3 * bigram_jaccard`
///
/// Symmetric and deterministic. Lengths are in chars.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (shorter, longer, short_len, long_len) = if a_len <= b_len {
        (a, b, a_len, b_len)
    } else {
        (b, a, b_len, a_len)
    };

    if longer.contains(shorter) {
        return short_len as f64 / long_len as f64;
    }

    let edit = edit_similarity(a, b, long_len);
    let overlap = bigram_jaccard(a, b);
    EDIT_DISTANCE_WEIGHT * edit + BIGRAM_WEIGHT * overlap
}

/// `1 - distance / max_len`, clamped to `[0, 1]`.
fn edit_similarity(a: &str, b: &str, max_len: usize) -> f64 {
    if max_len == 0 {
        return 0.0;
    }
    let distance = levenshtein_distance(a, b);
    (1.0 - distance as f64 / max_len as f64).clamp(0.0, 1.0)
}

/// Jaccard similarity of the two strings' character-bigram sets.
///
/// Single-char strings have no bigrams; an empty union scores `0.0`.
pub fn bigram_jaccard(a: &str, b: &str) -> f64 {
    let left = bigrams(a);
    let right = bigrams(b);

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = left.intersection(&right).count();
    intersection as f64 / union as f64
}

fn bigrams(value: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = value.chars().collect();
    chars.windows(2).map(|pair| (pair[0], pair[1])).collect()
}
