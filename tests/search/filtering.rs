//! Filter stage: dietary flags, preferences, custom predicates.

use std::collections::{BTreeSet, HashMap};

use carta::{Filter, FilterSet, PreferenceState, Record, RecordId};

use crate::common::{id_set, ids, menu_engine};

#[test]
fn vegetarian_filter_keeps_only_vegetarian_results() {
    let mut engine = menu_engine();
    let filters = FilterSet::new().with(Filter::Vegetarian);
    let response = engine.search("paella", &filters).unwrap();

    assert!(ids(&response).contains(&"paella-verduras".to_string()));
    assert!(!ids(&response).contains(&"paella-valenciana".to_string()));
    assert!(response.results.iter().all(|r| r.record.attributes.vegetarian));
}

#[test]
fn no_pork_hides_ham_dishes() {
    let mut engine = menu_engine();
    let unfiltered = engine.search("jamon", &FilterSet::new()).unwrap();
    assert!(ids(&unfiltered).contains(&"jamon".to_string()));

    let filters = FilterSet::new().with(Filter::NoPork);
    let response = engine.search("jamon", &filters).unwrap();
    assert!(response.results.iter().all(|r| !r.record.attributes.contains_pork));
}

#[test]
fn filters_compose_with_and() {
    let mut engine = menu_engine();
    let pairs = [
        (Filter::Vegetarian, Filter::GlutenFree),
        (Filter::NoDairy, Filter::NotSpicy),
        (Filter::Vegan, Filter::NoSeafood),
    ];
    for query in ["paella", "soup", "fried", "olive oil", "churros"] {
        for (first, second) in pairs.iter() {
            let only_first = engine
                .search(query, &FilterSet::new().with(first.clone()))
                .unwrap();
            let only_second = engine
                .search(query, &FilterSet::new().with(second.clone()))
                .unwrap();
            let both = engine
                .search(
                    query,
                    &FilterSet::new().with(first.clone()).with(second.clone()),
                )
                .unwrap();

            let expected: BTreeSet<String> = id_set(&only_first)
                .intersection(&id_set(&only_second))
                .cloned()
                .collect();
            assert_eq!(id_set(&both), expected, "query '{}'", query);
        }
    }
}

#[test]
fn filtering_preserves_rank_order() {
    let mut engine = menu_engine();
    let all = engine.search("fried", &FilterSet::new()).unwrap();
    let filtered = engine
        .search("fried", &FilterSet::new().with(Filter::NoPork))
        .unwrap();

    let expected: Vec<String> = all
        .results
        .iter()
        .filter(|r| !r.record.attributes.contains_pork)
        .map(|r| r.record.id.to_string())
        .collect();
    assert_eq!(ids(&filtered), expected);
}

#[test]
fn liked_and_disliked_preferences() {
    let mut prefs = HashMap::new();
    prefs.insert(RecordId::new("paella-verduras"), PreferenceState::Liked);
    prefs.insert(RecordId::new("paella-valenciana"), PreferenceState::Disliked);

    let mut engine = menu_engine().with_preferences(prefs);

    let liked = engine
        .search("paella", &FilterSet::new().with(Filter::Liked))
        .unwrap();
    assert_eq!(ids(&liked), vec!["paella-verduras"]);

    let not_disliked = engine
        .search("paella", &FilterSet::new().with(Filter::NotDisliked))
        .unwrap();
    assert!(!ids(&not_disliked).contains(&"paella-valenciana".to_string()));
    assert!(ids(&not_disliked).contains(&"paella-verduras".to_string()));
}

#[test]
fn custom_filter_is_applied() {
    let mut engine = menu_engine();
    let has_translation = Filter::custom("has-translation", |record: &Record, _| {
        record.secondary.is_some()
    });
    let spicy_only = Filter::custom("spicy-only", |record: &Record, _| record.attributes.spicy);

    let response = engine
        .search(
            "garlic",
            &FilterSet::new().with(has_translation).with(spicy_only),
        )
        .unwrap();
    assert_eq!(ids(&response), vec!["gambas"]);
}

#[test]
fn total_match_count_counts_after_filtering() {
    let mut engine = menu_engine();
    let all = engine.search("paella", &FilterSet::new()).unwrap();
    let vegan = engine
        .search("paella", &FilterSet::new().with(Filter::Vegan))
        .unwrap();

    assert_eq!(all.total_match_count, all.results.len());
    assert_eq!(vegan.total_match_count, vegan.results.len());
    assert!(vegan.total_match_count < all.total_match_count);
}
