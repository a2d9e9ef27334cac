//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::types::{Attributes, Record};

/// Create a record with just an id and a primary name.
pub fn make_record(id: &str, primary: &str) -> Record {
    Record::new(id, primary)
}

/// The single-record catalog from the paella scenario: not vegetarian, no pork.
pub fn paella() -> Record {
    Record::new("paella", "Paella").with_secondary("Rice dish")
}

/// Attribute set for a vegetarian dish without animal products.
pub fn vegetarian() -> Attributes {
    Attributes {
        vegetarian: true,
        ..Attributes::default()
    }
}

/// A small Spanish menu with translations, descriptions and dietary flags.
pub fn sample_menu() -> Vec<Record> {
    vec![
        Record::new("paella-valenciana", "Paella valenciana")
            .with_secondary("Valencian rice")
            .with_description("Saffron rice with chicken, rabbit and green beans")
            .with_attributes(Attributes {
                gluten_free: true,
                ..Attributes::default()
            }),
        Record::new("paella-verduras", "Paella de verduras")
            .with_secondary("Vegetable paella")
            .with_description("Saffron rice with seasonal vegetables")
            .with_attributes(Attributes {
                vegetarian: true,
                vegan: true,
                gluten_free: true,
                ..Attributes::default()
            }),
        Record::new("gazpacho", "Gazpacho")
            .with_secondary("Cold tomato soup")
            .with_description("Chilled soup of tomato, cucumber, pepper and olive oil")
            .with_attributes(Attributes {
                vegetarian: true,
                vegan: true,
                gluten_free: true,
                ..Attributes::default()
            }),
        Record::new("jamon", "Jamón ibérico")
            .with_secondary("Iberian ham")
            .with_description("Cured ham from acorn-fed pigs")
            .with_attributes(Attributes {
                contains_pork: true,
                gluten_free: true,
                ..Attributes::default()
            }),
        Record::new("croquetas", "Croquetas de jamón")
            .with_secondary("Ham croquettes")
            .with_description("Fried béchamel croquettes with cured ham")
            .with_attributes(Attributes {
                contains_pork: true,
                contains_dairy: true,
                ..Attributes::default()
            }),
        Record::new("tortilla", "Tortilla española")
            .with_secondary("Spanish omelette")
            .with_description("Potato and egg omelette with onion")
            .with_attributes(Attributes {
                vegetarian: true,
                gluten_free: true,
                ..Attributes::default()
            }),
        Record::new("gambas", "Gambas al ajillo")
            .with_secondary("Garlic prawns")
            .with_description("Prawns sizzled in olive oil with garlic and chili")
            .with_attributes(Attributes {
                contains_seafood: true,
                gluten_free: true,
                spicy: true,
                ..Attributes::default()
            }),
        Record::new("crema-catalana", "Crema catalana")
            .with_secondary("Catalan cream")
            .with_description("Custard with caramelized sugar crust")
            .with_attributes(Attributes {
                vegetarian: true,
                contains_dairy: true,
                gluten_free: true,
                ..Attributes::default()
            }),
        Record::new("churros", "Churros con chocolate")
            .with_secondary("Churros with hot chocolate")
            .with_description("Fried dough sticks with thick chocolate for dipping")
            .with_attributes(Attributes {
                vegetarian: true,
                contains_dairy: true,
                ..Attributes::default()
            }),
        Record::new("pimientos", "Pimientos de padrón")
            .with_secondary("Padron peppers")
            .with_description("Blistered green peppers with sea salt")
            .with_attributes(Attributes {
                vegetarian: true,
                vegan: true,
                gluten_free: true,
                ..Attributes::default()
            }),
    ]
}
