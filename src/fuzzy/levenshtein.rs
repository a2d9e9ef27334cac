// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over Unicode scalar values.
//!
//! Classic Wagner-Fischer with a single rolling row. Insert, delete and
//! substitute all cost 1; there is no transposition move, so "pealla" vs
//! "paella" costs 2. The bigram half of the similarity score makes up for that.

/// Levenshtein distance between two strings, counted in chars (not bytes).
///
/// O(len(a) * len(b)) time, O(len(b)) space. Terms in a menu index are short,
/// so the quadratic DP is cheap enough to run against every term per query.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut row: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != *bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b_len]
}
