//! Edge cases: odd queries, odd catalogs.

use carta::{EngineConfig, Record};

use crate::common::{ids, make_record, menu_engine, ready_engine, ready_engine_with, search};

#[test]
fn empty_and_whitespace_queries_return_empty() {
    let mut engine = menu_engine();
    for query in ["", " ", "\t\n", "p"] {
        let response = search(&mut engine, query);
        assert!(response.results.is_empty(), "query {:?}", query);
        assert!(response.suggestions.is_empty());
        assert_eq!(response.total_match_count, 0);
    }
}

#[test]
fn min_query_length_counts_chars_not_bytes() {
    let mut engine = ready_engine(vec![make_record("lamian", "拉面")]);
    // two chars, six bytes
    assert_eq!(ids(&search(&mut engine, "拉面")), vec!["lamian"]);
    // one char, three bytes
    assert!(search(&mut engine, "面").results.is_empty());
}

#[test]
fn min_query_length_is_configurable() {
    let mut engine = ready_engine_with(
        vec![make_record("pa", "Pa amb oli")],
        EngineConfig::default().with_min_query_length(4),
    );
    assert!(search(&mut engine, "pa a").results.len() == 1);
    assert!(search(&mut engine, "pa").results.is_empty());
}

#[test]
fn punctuation_only_query_finds_nothing() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "?!?!");
    assert!(response.results.is_empty());
}

#[test]
fn no_match_is_an_empty_result_not_an_error() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "zzzzzz");
    assert!(response.results.is_empty());
    assert_eq!(response.total_match_count, 0);
}

#[test]
fn duplicate_ids_and_blank_names_are_skipped() {
    let records = vec![
        make_record("flan", "Flan"),
        make_record("flan", "Flan de huevo"),
        make_record("blank", "   "),
        make_record("natillas", "Natillas"),
    ];
    let mut engine = carta::Engine::new(carta::Catalog::new(records), EngineConfig::default()).unwrap();
    let stats = engine.build_index().unwrap();

    assert_eq!(stats.records, 2);
    assert_eq!(stats.skipped, 2);
    assert_eq!(ids(&search(&mut engine, "flan")), vec!["flan"]);
}

#[test]
fn empty_catalog_builds_and_finds_nothing() {
    let mut engine = ready_engine(Vec::new());
    assert_eq!(engine.index().map(|i| i.len()), Some(0));
    assert!(search(&mut engine, "paella").results.is_empty());
    assert!(engine.autocomplete("pa", 5).is_empty());
}

#[test]
fn max_results_truncates_but_total_is_kept() {
    let records: Vec<Record> = (0..20)
        .map(|i| make_record(&format!("tapa-{}", i), &format!("Tapa {}", i)))
        .collect();
    let mut engine = ready_engine_with(records, EngineConfig::default().with_max_results(5));
    let response = search(&mut engine, "tapa");

    assert_eq!(response.results.len(), 5);
    assert_eq!(response.total_match_count, 20);
}

#[test]
fn very_long_query_does_not_panic() {
    let mut engine = menu_engine();
    let query = "paella ".repeat(200);
    let response = search(&mut engine, &query);
    assert!(response.total_match_count <= 10);
}
