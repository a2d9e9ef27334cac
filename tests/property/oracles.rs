//! Obviously-correct reference implementations.
//!
//! Slow and simple on purpose. If an optimized function disagrees with its
//! oracle, the oracle is right.

use std::collections::HashSet;

/// Containment ratio, edit/bigram blend, with strsim's Levenshtein.
pub fn oracle_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);

    if a.contains(b) || b.contains(a) {
        return a_len.min(b_len) as f64 / max_len as f64;
    }

    let edit = 1.0 - strsim::levenshtein(a, b) as f64 / max_len as f64;
    0.7 * edit.clamp(0.0, 1.0) + 0.3 * oracle_bigram_jaccard(a, b)
}

/// Jaccard over bigram sets built by windowing a char vector.
pub fn oracle_bigram_jaccard(a: &str, b: &str) -> f64 {
    fn set(s: &str) -> HashSet<String> {
        let chars: Vec<char> = s.chars().collect();
        chars.windows(2).map(|w| w.iter().collect()).collect()
    }
    let left = set(a);
    let right = set(b);
    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }
    left.intersection(&right).count() as f64 / union as f64
}
