//! Result cache behavior seen through the engine.

use carta::{EngineConfig, Filter, FilterSet, PreferenceState, RecordId};

use crate::common::{menu_engine, ready_engine_with, sample_menu, search};

#[test]
fn repeated_search_is_identical_and_cached() {
    let mut engine = menu_engine();
    let first = search(&mut engine, "tortilla");
    let second = search(&mut engine, "tortilla");

    assert_eq!(first.results, second.results);
    assert_eq!(first.suggestions, second.suggestions);
    assert_eq!(first.total_match_count, second.total_match_count);

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
}

#[test]
fn queries_differing_only_in_case_and_spacing_share_an_entry() {
    let mut engine = menu_engine();
    search(&mut engine, "crema catalana");
    search(&mut engine, "  Crema   CATALANA ");
    assert_eq!(engine.cache_stats().hits, 1);
    assert_eq!(engine.cache_stats().len, 1);
}

#[test]
fn filter_order_does_not_split_the_cache() {
    let mut engine = menu_engine();
    let a = FilterSet::new().with(Filter::NoPork).with(Filter::Vegetarian);
    let b = FilterSet::new().with(Filter::Vegetarian).with(Filter::NoPork);

    let first = engine.search("soup", &a).unwrap();
    let second = engine.search("soup", &b).unwrap();
    assert_eq!(first.results, second.results);
    assert_eq!(engine.cache_stats().hits, 1);
}

#[test]
fn different_filters_are_different_entries() {
    let mut engine = menu_engine();
    engine.search("paella", &FilterSet::new()).unwrap();
    engine
        .search("paella", &FilterSet::new().with(Filter::Vegan))
        .unwrap();
    assert_eq!(engine.cache_stats().len, 2);
    assert_eq!(engine.cache_stats().hits, 0);
}

#[test]
fn cache_never_exceeds_capacity() {
    let mut engine = ready_engine_with(sample_menu(), EngineConfig::default().with_cache_capacity(3));
    for query in ["paella", "gazpacho", "jamon", "tortilla", "churros", "gambas"] {
        search(&mut engine, query);
        assert!(engine.cache_stats().len <= 3);
    }
    let stats = engine.cache_stats();
    assert_eq!(stats.len, 3);
    assert_eq!(stats.evictions, 3);

    // oldest went first: "tortilla" is still cached, "paella" is not
    search(&mut engine, "tortilla");
    assert_eq!(engine.cache_stats().hits, 1);
    search(&mut engine, "paella");
    assert_eq!(engine.cache_stats().hits, 1);
}

#[test]
fn short_queries_bypass_the_cache() {
    let mut engine = menu_engine();
    search(&mut engine, "p");
    search(&mut engine, "");
    let stats = engine.cache_stats();
    assert_eq!((stats.len, stats.hits, stats.misses), (0, 0, 0));
}

#[test]
fn clear_cache_forces_recompute() {
    let mut engine = menu_engine();
    search(&mut engine, "gambas");
    engine.clear_cache();
    search(&mut engine, "gambas");
    assert_eq!(engine.cache_stats().misses, 2);
}

#[test]
fn new_preferences_are_not_served_stale() {
    let mut engine = menu_engine();
    let liked = FilterSet::new().with(Filter::Liked);
    assert!(engine.search("flan", &liked).unwrap().results.is_empty());
    assert!(engine.search("gazpacho", &liked).unwrap().results.is_empty());

    let mut prefs = std::collections::HashMap::new();
    prefs.insert(RecordId::new("gazpacho"), PreferenceState::Liked);
    engine.set_preferences(prefs);

    let response = engine.search("gazpacho", &liked).unwrap();
    assert_eq!(response.results.len(), 1);
}

#[test]
fn filter_names_containing_commas_get_their_own_entry() {
    let mut engine = menu_engine();
    let pair = FilterSet::new()
        .with(Filter::custom("a", |_: &carta::Record, _| true))
        .with(Filter::custom("b", |_: &carta::Record, _| true));
    let joined = FilterSet::new().with(Filter::custom("a,b", |_: &carta::Record, _| false));

    let open = engine.search("gazpacho", &pair).unwrap();
    assert!(!open.results.is_empty());

    let closed = engine.search("gazpacho", &joined).unwrap();
    assert!(closed.results.is_empty());
    assert_eq!(closed.total_match_count, 0);

    let stats = engine.cache_stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.len, 2);
}
