// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query-time work: turning a raw query into match evidence and suggestions.
//!
//! The matcher scans the whole vocabulary with the composite similarity and
//! records every posting of every term that clears the fuzzy threshold. The
//! suggestion side reuses those term hits for "did you mean" lists, and has
//! its own prefix-only path for autocomplete that skips ranking entirely.

pub mod matcher;
pub mod suggest;

pub use matcher::{match_query, MatchAccumulator, MatchEntry, TermHit, PARTIAL_WORD_PENALTY};
pub use suggest::{autocomplete, suggestions, Completion};
