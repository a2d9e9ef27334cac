// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the carta command-line interface.
//!
//! Three subcommands over a JSON catalog: `search` runs a ranked, filtered
//! query, `complete` shows autocomplete candidates for a prefix, and
//! `inspect` prints what the index looks like after a build.

pub mod display;

use std::path::PathBuf;

use carta::Filter;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "carta",
    about = "Typo-tolerant instant search over menu catalogs",
    version
)]
pub struct Cli {
    /// More log output on stderr (-v: info, -vv: debug). CARTA_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a catalog and display ranked results
    Search {
        /// Path to catalog JSON (array of records, or {"records": [...]})
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Engine configuration JSON; unset keys keep their defaults
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Filter to apply (repeatable): vegetarian, vegan, gluten-free,
        /// no-pork, no-dairy, no-nuts, no-seafood, not-spicy
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<Filter>,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show autocomplete candidates for a prefix
    Complete {
        /// Path to catalog JSON
        catalog: PathBuf,

        /// Prefix typed so far
        prefix: String,

        /// Maximum number of candidates
        #[arg(short, long, default_value = "8")]
        limit: usize,
    },

    /// Build the index and print its statistics
    Inspect {
        /// Path to catalog JSON
        catalog: PathBuf,

        /// Engine configuration JSON
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Built-in filter by name; unknown names are a usage error.
fn parse_filter(name: &str) -> Result<Filter, String> {
    Filter::from_name(name).ok_or_else(|| {
        format!(
            "unknown filter '{}' (expected one of: vegetarian, vegan, gluten-free, no-pork, \
             no-dairy, no-nuts, no-seafood, not-spicy, liked, not-disliked)",
            name
        )
    })
}
