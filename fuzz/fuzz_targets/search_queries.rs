// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the engine to verify it never panics
//! and never returns results that break its own ordering or limits.

#![no_main]

use carta::testing::sample_menu;
use carta::{Catalog, Engine, EngineConfig, FilterSet};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    let Ok(query) = std::str::from_utf8(query) else {
        return;
    };
    if query.len() > 512 {
        return;
    }

    // Fresh engine per input so cache state never hides a bug
    let mut engine = match Engine::new(Catalog::new(sample_menu()), EngineConfig::default()) {
        Ok(engine) => engine,
        Err(_) => return,
    };
    if engine.build_index().is_err() {
        return;
    }
    let config = engine.config().clone();

    let response = match engine.search(query, &FilterSet::new()) {
        Ok(response) => response,
        Err(e) => panic!("search failed on a ready engine: {}", e),
    };

    assert!(response.results.len() <= config.max_results);
    assert!(response.suggestions.len() <= config.max_suggestions);
    assert!(response.total_match_count >= response.results.len());
    for pair in response.results.windows(2) {
        assert!(pair[0].score >= pair[1].score, "results out of order for {:?}", query);
    }
    for result in &response.results {
        assert!(result.score.is_finite() && result.score > 0.0);
    }

    // Same query again must come from the cache and agree
    let again = match engine.search(query, &FilterSet::new()) {
        Ok(response) => response,
        Err(e) => panic!("repeat search failed: {}", e),
    };
    assert_eq!(response.results, again.results);

    for completion in engine.autocomplete(query, 8) {
        assert!(!completion.term.is_empty());
    }
});
