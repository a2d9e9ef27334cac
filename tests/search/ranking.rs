//! Ranking order on the sample menu.

use std::collections::BTreeSet;

use carta::{FieldKind, Record};

use crate::common::{assert_descending, ids, make_record, menu_engine, ready_engine, sample_menu, search};

#[test]
fn exact_name_ranks_first() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "gazpacho");

    assert_eq!(ids(&response)[0], "gazpacho");
    assert_eq!(response.results[0].best_field, FieldKind::Primary);
    assert_descending(&response);
}

#[test]
fn both_paellas_lead_a_paella_query() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "paella");

    let top: BTreeSet<String> = ids(&response).into_iter().take(2).collect();
    let expected: BTreeSet<String> = ["paella-valenciana", "paella-verduras"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(top, expected);
    assert_descending(&response);
}

#[test]
fn inserted_letter_typo_finds_dish() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "gazpatcho");
    assert_eq!(ids(&response)[0], "gazpacho");
}

#[test]
fn multi_word_query_prefers_record_with_both_words() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "paella verduras");
    assert_eq!(ids(&response)[0], "paella-verduras");
}

#[test]
fn best_field_explains_the_match() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "garlic");

    assert_eq!(ids(&response)[0], "gambas");
    assert_eq!(response.results[0].best_field, FieldKind::NameWord);
}

#[test]
fn description_only_match_is_found() {
    let mut engine = menu_engine();
    let response = search(&mut engine, "saffron");

    let found: BTreeSet<String> = ids(&response).into_iter().collect();
    assert!(found.contains("paella-valenciana"));
    assert!(found.contains("paella-verduras"));
    for result in response.results.iter().filter(|r| r.record.id.as_str().starts_with("paella")) {
        assert_eq!(result.best_field, FieldKind::BodyWord);
    }
}

#[test]
fn every_primary_name_finds_its_record() {
    let mut engine = menu_engine();
    for record in sample_menu() {
        let response = search(&mut engine, &record.primary);
        assert_eq!(
            ids(&response)[0],
            record.id.as_str(),
            "'{}' should rank its own record first",
            record.primary
        );
    }
}

#[test]
fn many_weak_hits_do_not_bury_the_named_dish() {
    let records = vec![
        Record::new("arroz-todo", "Arroz del senyoret")
            .with_description("rice rice with rice and rice, rice again"),
        make_record("rice", "Rice"),
    ];
    let mut engine = ready_engine(records);
    let response = search(&mut engine, "rice");
    assert_eq!(ids(&response)[0], "rice");
}

#[test]
fn equal_scores_keep_catalog_order() {
    let records = vec![
        make_record("second", "Flan casero"),
        make_record("first", "Flan casero"),
    ];
    let mut engine = ready_engine(records);
    let response = search(&mut engine, "flan casero");

    assert_eq!(ids(&response), vec!["second", "first"]);
    assert_eq!(response.results[0].score, response.results[1].score);
}
