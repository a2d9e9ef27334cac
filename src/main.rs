// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use carta::{Catalog, Engine, EngineConfig, EngineError, FieldKind, Filter, FilterSet};

mod cli;
use cli::display::{pad_to, truncate, Painter, Panel, Role};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            catalog,
            query,
            config,
            filters,
            limit,
        } => run_search(&catalog, &query, config.as_deref(), filters, limit),
        Commands::Complete {
            catalog,
            prefix,
            limit,
        } => run_complete(&catalog, &prefix, limit),
        Commands::Inspect { catalog, config } => run_inspect(&catalog, config.as_deref()),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let env_filter = EnvFilter::try_from_env("CARTA_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, EngineError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .map_err(|e| EngineError::Catalog(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&json)
                .map_err(|e| EngineError::Catalog(format!("{}: {}", path.display(), e)))
        }
        None => Ok(EngineConfig::default()),
    }
}

fn open_engine(catalog: &Path, config: EngineConfig) -> Result<Engine<Catalog>, EngineError> {
    let mut engine = Engine::new(Catalog::from_path(catalog)?, config)?;
    engine.build_index()?;
    Ok(engine)
}

fn run_search(
    catalog: &Path,
    query: &str,
    config: Option<&Path>,
    filters: Vec<Filter>,
    limit: usize,
) -> Result<(), EngineError> {
    let config = load_config(config)?;
    let filters: FilterSet = filters.into_iter().collect();
    let mut engine = open_engine(catalog, config)?;

    let response = engine.search(query, &filters)?;

    let painter = Painter::for_stdout();
    let mut panel = Panel::new(&painter, "SEARCH");
    panel.line(&format!(" query    {}", painter.paint(Role::Query, query)));
    if !filters.is_empty() {
        panel.line(&format!(" filters  {}", filters.cache_key()));
    }
    panel.line(&format!(
        " matches  {} ({} shown)",
        response.total_match_count,
        response.results.len().min(limit)
    ));

    panel.section("RESULTS");
    if response.results.is_empty() {
        panel.line(&painter.paint(Role::Muted, " no matches"));
    }
    for (rank, result) in response.results.iter().take(limit).enumerate() {
        let record = &result.record;
        let name = painter.paint(Role::Dish, &truncate(&record.primary, 28));
        panel.line(&format!(
            " {:>2}. {} {} {}",
            rank + 1,
            pad_to(&name, 28),
            painter.score(result.score),
            painter.field(result.best_field),
        ));

        let details: Vec<String> = record
            .secondary
            .as_deref()
            .map(|s| truncate(s, 36))
            .into_iter()
            .chain(Some(painter.badges(&record.attributes)))
            .filter(|part| !part.is_empty())
            .collect();
        if !details.is_empty() {
            panel.line(&format!("     {}", details.join(" ")));
        }
    }

    if !response.suggestions.is_empty() {
        panel.section("SUGGESTIONS");
        panel.line(&format!(" {}", response.suggestions.join(", ")));
    }
    print!("{}", panel.finish());
    println!(
        "  {} in {}",
        painter.paint(Role::Muted, "searched"),
        painter.micros(response.elapsed.as_secs_f64() * 1_000_000.0)
    );
    Ok(())
}

fn run_complete(catalog: &Path, prefix: &str, limit: usize) -> Result<(), EngineError> {
    let engine = open_engine(catalog, EngineConfig::default())?;

    let started = Instant::now();
    let completions = engine.autocomplete(prefix, limit);
    let elapsed = started.elapsed();

    let painter = Painter::for_stdout();
    let mut panel = Panel::new(&painter, "COMPLETIONS");
    if completions.is_empty() {
        panel.line(&painter.paint(Role::Muted, " nothing starts with that"));
    }
    for completion in &completions {
        let term = painter.paint(Role::Dish, &truncate(&completion.display, 32));
        let example = format!("e.g. {}", truncate(&completion.example.primary, 30));
        panel.line(&format!(" {} {}", pad_to(&term, 34), painter.paint(Role::Muted, &example)));
    }
    print!("{}", panel.finish());
    println!(
        "  {} in {}",
        painter.paint(Role::Muted, "completed"),
        painter.micros(elapsed.as_secs_f64() * 1_000_000.0)
    );
    Ok(())
}

fn run_inspect(catalog: &Path, config: Option<&Path>) -> Result<(), EngineError> {
    let config = load_config(config)?;
    let engine = open_engine(catalog, config)?;
    let Some(index) = engine.index() else {
        return Err(EngineError::Precondition("search index has not been built".to_string()));
    };
    let stats = index.stats();

    let painter = Painter::for_stdout();
    let mut panel = Panel::new(&painter, "INDEX");
    panel.line(&format!(" records    {}", stats.records));
    if stats.skipped > 0 {
        panel.line(&format!(
            " skipped    {}",
            painter.paint(Role::Alert, &stats.skipped.to_string())
        ));
    }
    panel
        .line(&format!(" terms      {}", stats.terms))
        .line(&format!(" postings   {}", stats.postings))
        .line(&format!(" generation {}", stats.generation));

    panel.section("POSTINGS BY FIELD");
    for field in [
        FieldKind::Primary,
        FieldKind::Secondary,
        FieldKind::NameWord,
        FieldKind::BodyWord,
    ] {
        let count: usize = index
            .terms()
            .map(|(_, entry)| entry.postings.iter().filter(|p| p.field == field).count())
            .sum();
        let weight = engine.config().field_weights.weight(field);
        panel.line(&format!(
            " {} {:>6}   weight {:.2}",
            pad_to(&painter.field(field), 12),
            count,
            weight
        ));
    }

    panel.section("CONFIG");
    let config = engine.config();
    panel.line(&format!(
        " threshold {:.2}  exact +{:.2}  prefix +{:.2}",
        config.fuzzy_threshold, config.exact_match_bonus, config.prefix_bonus
    ));
    panel.line(&format!(
        " results {}  suggestions {}  cache {}  min query {}",
        config.max_results, config.max_suggestions, config.cache_capacity, config.min_query_length
    ));
    print!("{}", panel.finish());
    Ok(())
}
