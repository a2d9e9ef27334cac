// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the string similarity metric.
//!
//! Every fuzzy match and every suggestion goes through `similarity`, so it
//! must stay bounded and symmetric for any pair of strings.

#![no_main]

use arbitrary::Arbitrary;
use carta::{bigram_jaccard, char_len, levenshtein_distance, similarity};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    left: String,
    right: String,
}

fuzz_target!(|input: PairInput| {
    // Edit distance is quadratic; keep inputs short enough to not time out
    if input.left.len() > 256 || input.right.len() > 256 {
        return;
    }
    let (a, b) = (input.left.as_str(), input.right.as_str());

    let forward = similarity(a, b);
    let backward = similarity(b, a);
    assert!(forward.is_finite(), "similarity({:?}, {:?}) is not finite", a, b);
    assert!((0.0..=1.0).contains(&forward), "similarity({:?}, {:?}) = {}", a, b, forward);
    assert_eq!(forward, backward, "similarity is not symmetric for {:?} / {:?}", a, b);

    if a.is_empty() || b.is_empty() {
        assert_eq!(forward, 0.0);
    } else if a == b {
        assert_eq!(forward, 1.0);
    }

    let distance = levenshtein_distance(a, b);
    assert!(distance <= char_len(a).max(char_len(b)));
    assert_eq!(distance, levenshtein_distance(b, a));

    let jaccard = bigram_jaccard(a, b);
    assert!((0.0..=1.0).contains(&jaccard));
});
