// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: how close is a query to an indexed term?
//!
//! Two layers here: a plain Levenshtein edit distance, and the composite
//! similarity score that blends it with character-bigram overlap. Both are
//! pure functions over already-normalized strings.

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
