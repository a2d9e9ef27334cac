// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization shared by indexing and querying.
//!
//! Index terms and queries must go through the same function, otherwise an
//! exact match can silently become a fuzzy one. Everything that turns user or
//! catalog text into a term lives here.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search: strip diacritics, lowercase, trim, collapse whitespace.
///
/// Menus mix languages and people type without accents, so folding is what
/// lets "creme brulee" find "Crème brûlée":
/// - "Crème Brûlée" → "creme brulee"
/// - "  Paëlla   Valenciana " → "paella valenciana"
/// - "Jamón" → "jamon"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (accented letters stay distinct from their bases)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase and collapse whitespace. Accents are kept as-is.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Only the Latin-oriented blocks matter for menu text.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Split already-normalized text into words.
///
/// Anything that is not alphanumeric separates words. `char::is_alphanumeric`
/// is Unicode-aware, so "ñ", "ç" or "ø" stay inside their words even when the
/// text was not accent-folded.
pub fn extract_words(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Length in Unicode scalar values. Every length-based rule uses this, never bytes.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
