// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how match evidence becomes one number per record.
//!
//! Each match entry is scored on its own (similarity × field weight, plus
//! exact/prefix bonuses), the entries of a record are summed, and the sum is
//! divided by the square root of the entry count. That last step is what
//! keeps ten weak word hits from beating one near-exact name match.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_results, rank, ScoredResult};
