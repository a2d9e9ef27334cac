// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory fuzzy search over a small catalog of short-text records.
//!
//! Built for menus: a few thousand dishes with a name, a translated name, a
//! description and some dietary flags. A query that is partial, misspelled or
//! typed without accents still resolves to a ranked list of dishes, plus a
//! handful of suggestions, in well under ten milliseconds.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//! │ RecordProvider│──▶│  TermIndex  │──▶│   matcher    │──▶│   ranking   │
//! │   (Catalog)  │   │ (index.rs)  │   │ (similarity) │   │ (Σ / √n)    │
//! └──────────────┘   └─────────────┘   └──────────────┘   └─────────────┘
//!                           │                  │                  │
//!                           ▼                  ▼                  ▼
//!                    ┌─────────────┐   ┌──────────────┐   ┌─────────────┐
//!                    │autocomplete │   │ suggestions  │   │  FilterSet  │
//!                    └─────────────┘   └──────────────┘   └─────────────┘
//!                                                                 │
//!                                              ResultCache ◀──────┘
//! ```
//!
//! [`Engine`] ties it together and is the only type most callers need.
//!
//! # Usage
//!
//! ```
//! use carta::{Catalog, Engine, EngineConfig, Filter, FilterSet, Record};
//!
//! let catalog = Catalog::new(vec![
//!     Record::new("paella", "Paella").with_secondary("Rice dish"),
//! ]);
//! let mut engine = Engine::new(catalog, EngineConfig::default())?;
//! engine.build_index()?;
//!
//! let response = engine.search("paela", &FilterSet::new())?;
//! assert_eq!(response.results[0].record.id.as_str(), "paella");
//!
//! let vegetarian = FilterSet::new().with(Filter::Vegetarian);
//! assert!(engine.search("paella", &vegetarian)?.results.is_empty());
//! # Ok::<(), carta::EngineError>(())
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod index;
pub mod provider;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
mod utils;

pub use cache::{CacheEntry, CacheKey, CacheStats, ResultCache};
pub use config::{ConfigError, EngineConfig, FieldWeights};
pub use engine::{Engine, IndexState, SearchResponse};
pub use error::EngineError;
pub use filter::{apply_filters, Filter, FilterSet, NoPreferences, PreferenceProvider};
pub use fuzzy::{bigram_jaccard, levenshtein_distance, similarity};
pub use index::{IndexStats, TermEntry, TermIndex};
pub use provider::{Catalog, RecordProvider};
pub use scoring::{rank, Bonuses, ScoredResult};
pub use search::{autocomplete, match_query, suggestions, Completion, MatchAccumulator};
pub use types::{Attributes, FieldKind, Posting, PreferenceState, Record, RecordId};
pub use utils::{char_len, extract_words, normalize};
