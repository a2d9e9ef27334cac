//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::BTreeSet;

use carta::{Catalog, Engine, EngineConfig, FilterSet, Record, SearchResponse};

// Re-export canonical fixtures from carta::testing
pub use carta::testing::{make_record, paella, sample_menu, vegetarian};

/// Engine over `records` with the default config, index built.
pub fn ready_engine(records: Vec<Record>) -> Engine<Catalog> {
    ready_engine_with(records, EngineConfig::default())
}

pub fn ready_engine_with(records: Vec<Record>, config: EngineConfig) -> Engine<Catalog> {
    let mut engine = Engine::new(Catalog::new(records), config).expect("valid config");
    engine.build_index().expect("catalog is loaded");
    engine
}

/// Engine over the sample Spanish menu.
pub fn menu_engine() -> Engine<Catalog> {
    ready_engine(sample_menu())
}

/// Search with no filters, panicking on error.
pub fn search(engine: &mut Engine<Catalog>, query: &str) -> SearchResponse {
    engine
        .search(query, &FilterSet::new())
        .expect("search should not fail")
}

/// Result ids in ranked order.
pub fn ids(response: &SearchResponse) -> Vec<String> {
    response
        .results
        .iter()
        .map(|r| r.record.id.to_string())
        .collect()
}

/// Result ids as a set, for order-insensitive comparisons.
pub fn id_set(response: &SearchResponse) -> BTreeSet<String> {
    ids(response).into_iter().collect()
}

/// Assert scores never increase down the list.
pub fn assert_descending(response: &SearchResponse) {
    for pair in response.results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "scores out of order: {} ({}) before {} ({})",
            pair[0].record.id,
            pair[0].score,
            pair[1].record.id,
            pair[1].score
        );
    }
}
