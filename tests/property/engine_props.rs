//! Engine-level invariants: cache bound, filter composition, self-retrieval.

use std::collections::BTreeSet;
use std::time::Instant;

use carta::{CacheEntry, CacheKey, Filter, FilterSet, Record, ResultCache};
use proptest::prelude::*;

use crate::common::{id_set, menu_engine, ready_engine};

fn builtin_filter_strategy() -> impl Strategy<Value = Filter> {
    prop::sample::select(vec![
        Filter::Vegetarian,
        Filter::Vegan,
        Filter::GlutenFree,
        Filter::NoPork,
        Filter::NoDairy,
        Filter::NoNuts,
        Filter::NoSeafood,
        Filter::NotSpicy,
    ])
}

fn menu_query_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "paella", "paela", "soup", "ham", "fried", "chocolate", "garlic", "peppers", "rice",
        "tomato", "crema", "tortila", "olive oil", "green beans",
    ])
    .prop_map(str::to_string)
}

fn dish_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{3,7}", 1..4).prop_map(|words| words.join(" "))
}

fn entry() -> CacheEntry {
    CacheEntry {
        results: Vec::new(),
        suggestions: Vec::new(),
        total_match_count: 0,
        inserted_at: Instant::now(),
    }
}

proptest! {
    /// Property: the cache never holds more than its capacity, the most
    /// recent insert is always present, and replacing a key evicts nothing.
    #[test]
    fn prop_cache_bounded(capacity in 1usize..8, queries in prop::collection::vec("[a-z]{2,4}", 0..40)) {
        let mut cache = ResultCache::new(capacity);
        for query in &queries {
            let key = CacheKey::new(query.clone(), "");
            let present = cache.contains(&key);
            let before = cache.stats();
            cache.insert(key.clone(), entry());
            prop_assert!(cache.len() <= capacity);
            prop_assert!(cache.contains(&key));
            if present {
                // replacing an entry never pushes another one out
                prop_assert_eq!(cache.stats().evictions, before.evictions);
                prop_assert_eq!(cache.len(), before.len);
            }
        }
    }

    /// Property: distinct keys are evicted strictly oldest first.
    #[test]
    fn prop_cache_evicts_oldest(capacity in 1usize..6, extra in 1usize..6) {
        let mut cache = ResultCache::new(capacity);
        let total = capacity + extra;
        for i in 0..total {
            cache.insert(CacheKey::new(format!("q{}", i), ""), entry());
        }
        for i in 0..total {
            let key = CacheKey::new(format!("q{}", i), "");
            prop_assert_eq!(cache.contains(&key), i >= extra);
        }
    }

    /// Property: a two-filter search returns exactly the intersection of
    /// the single-filter searches.
    #[test]
    fn prop_filters_compose_with_and(
        query in menu_query_strategy(),
        first in builtin_filter_strategy(),
        second in builtin_filter_strategy(),
    ) {
        let mut engine = menu_engine();
        let one = engine.search(&query, &FilterSet::new().with(first.clone())).unwrap();
        let two = engine.search(&query, &FilterSet::new().with(second.clone())).unwrap();
        let both = engine.search(&query, &FilterSet::new().with(first).with(second)).unwrap();

        let expected: BTreeSet<String> = id_set(&one).intersection(&id_set(&two)).cloned().collect();
        prop_assert_eq!(id_set(&both), expected);
    }

    /// Property: filtered results are a subset of unfiltered ones.
    #[test]
    fn prop_filtering_only_removes(query in menu_query_strategy(), filter in builtin_filter_strategy()) {
        let mut engine = menu_engine();
        let all = id_set(&engine.search(&query, &FilterSet::new()).unwrap());
        let some = id_set(&engine.search(&query, &FilterSet::new().with(filter)).unwrap());
        prop_assert!(some.is_subset(&all));
    }

    /// Property: searching a record's primary name returns that record.
    #[test]
    fn prop_primary_name_retrieves_record(names in prop::collection::vec(dish_strategy(), 1..10)) {
        let records: Vec<Record> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Record::new(format!("r{}", i), name.clone()))
            .collect();
        let mut engine = ready_engine(records.clone());

        for record in &records {
            let response = engine.search(&record.primary, &FilterSet::new()).unwrap();
            prop_assert!(
                response.results.iter().any(|r| r.record.id == record.id),
                "'{}' not retrieved", record.primary
            );
        }
    }

    /// Property: identical calls give identical answers.
    #[test]
    fn prop_search_idempotent(query in menu_query_strategy()) {
        let mut engine = menu_engine();
        let first = engine.search(&query, &FilterSet::new()).unwrap();
        let second = engine.search(&query, &FilterSet::new()).unwrap();
        prop_assert_eq!(first.results, second.results);
        prop_assert_eq!(first.suggestions, second.suggestions);
    }
}
