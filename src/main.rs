// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Poffin CLI.
//!
//! ```text
//! poffin search --items demos/berries.toml -k 3 --top 10 --duration 40 --plan
//! ```

use clap::{Parser, Subcommand};
use comfy_table::Table;
use poffin_search::config::AppConfig;
use poffin_search::logging::init_logging;
use poffin_search::plan::PlanStep;
use poffin_search::{
    build_plan, CombinationTable, EnumerationStrategy, FeedingPlanResult, Flavor, ItemId,
    ItemTable, PlanCandidate, Result, SearchError, SearchResult, Searcher,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use strum::IntoEnumIterator;
use tracing::{error, info};

/// Search berry combinations for the best Poffins
#[derive(Parser)]
#[command(name = "poffin")]
#[command(about = "Search berry combinations for the best Poffins and plan contest feeding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best Poffins
    Search(SearchArgs),
    /// List the berries in an item table
    Items {
        /// Berry table (TOML)
        #[arg(long)]
        items: PathBuf,
    },
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Berry table (TOML)
    #[arg(long)]
    items: PathBuf,

    /// Comma-separated berry names (default: the whole table)
    #[arg(long, value_delimiter = ',')]
    pool: Vec<String>,

    /// Berries per Poffin (2-4)
    #[arg(short)]
    k: Option<usize>,

    /// Number of Poffins to keep
    #[arg(long)]
    top: Option<usize>,

    /// Cooking time in seconds
    #[arg(long)]
    duration: Option<u8>,

    /// Spills and burns
    #[arg(long)]
    errors: Option<u8>,

    /// Flat flavor bonus
    #[arg(long)]
    bonus: Option<u8>,

    /// Worker threads (1 = sequential, 0 = all cores)
    #[arg(long)]
    workers: Option<usize>,

    /// Ordering, e.g. "level:desc,smoothness:asc"
    #[arg(long)]
    order: Option<String>,

    /// Drop Poffins below this level
    #[arg(long)]
    min_level: Option<u8>,

    /// Drop Poffins rougher than this
    #[arg(long)]
    max_smoothness: Option<u8>,

    /// Precompute sums for every combination of the table
    #[arg(long)]
    precompute: bool,

    /// Use the general backtracking enumerator
    #[arg(long)]
    backtracking: bool,

    /// Build a feeding plan from the results
    #[arg(long)]
    plan: bool,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    search: &'a SearchResult,
    plan: Option<&'a FeedingPlanResult>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match cli.verbose {
        0 => {}
        1 => config.logging.level = "debug".to_string(),
        _ => config.logging.level = "trace".to_string(),
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let output = match &cli.command {
        Commands::Search(args) => run_search(config, args),
        Commands::Items { items } => list_items(items),
    };
    match output {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn resolve_pool(table: &ItemTable, names: &[String]) -> Result<Vec<ItemId>> {
    if names.is_empty() {
        return Ok(table.ids());
    }
    names
        .iter()
        .map(|name| {
            table
                .find(name.trim())
                .ok_or_else(|| SearchError::Table(format!("Unknown berry '{}'", name.trim())))
        })
        .collect()
}

fn run_search(mut config: AppConfig, args: &SearchArgs) -> Result<String> {
    let search = &mut config.search;
    if let Some(k) = args.k {
        search.k = k;
    }
    if let Some(top) = args.top {
        search.top_k = top;
    }
    if let Some(duration) = args.duration {
        search.duration = duration;
    }
    if let Some(errors) = args.errors {
        search.errors = errors;
    }
    if let Some(bonus) = args.bonus {
        search.bonus = bonus;
    }
    if let Some(workers) = args.workers {
        search.workers = workers;
    }
    if args.order.is_some() {
        search.ordering = args.order.clone();
    }
    if args.min_level.is_some() {
        search.min_level = args.min_level;
    }
    if args.max_smoothness.is_some() {
        search.max_smoothness = args.max_smoothness;
    }
    if args.backtracking {
        search.strategy = EnumerationStrategy::Backtracking;
    }
    search.precompute |= args.precompute;
    search.with_recipes = true;
    search.validate()?;

    let table = ItemTable::load(&args.items)?;
    let pool = resolve_pool(&table, &args.pool)?;
    let request = config.search.request(pool);
    let comparator = config.search.comparator()?;
    let predicate = config.search.predicate();

    let combinations = if config.search.precompute {
        Some(CombinationTable::build(&table, config.search.k)?)
    } else {
        None
    };
    let mut searcher = Searcher::new(&table);
    if let Some(combinations) = &combinations {
        searcher = searcher.with_combinations(combinations);
    }
    let result = searcher.run(&request, comparator.as_ref(), predicate.as_deref())?;
    info!(retained = result.outcomes.len(), "Search complete");

    let plan = if args.plan {
        let candidates = match &result.recipes {
            Some(recipes) => recipes
                .iter()
                .map(|recipe| PlanCandidate::from_recipe(recipe, &table))
                .collect::<Result<Vec<_>>>()?,
            None => result.outcomes.iter().copied().map(PlanCandidate::from).collect(),
        };
        Some(build_plan(candidates, &config.plan))
    } else {
        None
    };

    if args.json {
        let report = Report {
            search: &result,
            plan: plan.as_ref(),
        };
        return serde_json::to_string_pretty(&report).map_err(|e| SearchError::Io(e.into()));
    }

    let mut output = render_outcomes(&result, &table);
    if let Some(plan) = &plan {
        output.push('\n');
        output.push_str(&render_plan(plan, &table));
    }
    output.push_str(&format!("\n{}", result.statistics));
    Ok(output)
}

fn berry_names(table: &ItemTable, ids: &[ItemId]) -> String {
    ids.iter()
        .map(|&id| match table.lookup(id) {
            Ok(item) => item.name.clone(),
            Err(_) => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Header row: `lead`, one column per flavor (named by `name`), then `tail`.
fn header(lead: &[&str], name: fn(Flavor) -> &'static str, tail: &[&str]) -> Vec<String> {
    lead.iter()
        .copied()
        .chain(Flavor::iter().map(name))
        .chain(tail.iter().copied())
        .map(str::to_string)
        .collect()
}

fn render_outcomes(result: &SearchResult, table: &ItemTable) -> String {
    let mut out = Table::new();
    out.load_preset(comfy_table::presets::UTF8_FULL);
    out.set_header(header(&["#", "Poffin", "Level", "Smooth"], Flavor::title, &["Berries"]));
    for (index, outcome) in result.outcomes.iter().enumerate() {
        let berries = result
            .recipes
            .as_ref()
            .and_then(|recipes| recipes.get(index))
            .map(|recipe| berry_names(table, recipe.items()))
            .unwrap_or_default();
        let mut row = vec![
            (index + 1).to_string(),
            outcome.to_string(),
            outcome.level().to_string(),
            outcome.smoothness().to_string(),
        ];
        row.extend(outcome.flavors().iter().map(|v| v.to_string()));
        row.push(berries);
        out.add_row(row);
    }
    out.to_string()
}

fn render_plan(plan: &FeedingPlanResult, table: &ItemTable) -> String {
    let mut out = Table::new();
    out.load_preset(comfy_table::presets::UTF8_FULL);
    out.set_header(header(
        &["Step", "Poffin", "Score"],
        Flavor::condition,
        &["Sheen", "Berries"],
    ));
    for (index, PlanStep { candidate, score, stats }) in plan.steps.iter().enumerate() {
        let mut row = vec![
            (index + 1).to_string(),
            candidate.outcome.to_string(),
            format!("{:.1}", score),
        ];
        row.extend(stats.conditions.iter().map(|v| v.to_string()));
        row.push(stats.sheen.to_string());
        row.push(
            candidate
                .items
                .as_deref()
                .map(|ids| berry_names(table, ids))
                .unwrap_or_default(),
        );
        out.add_row(row);
    }
    format!(
        "{}\nTotal score {:.1}, total cost {}",
        out, plan.total_score, plan.total_cost
    )
}

fn list_items(path: &Path) -> Result<String> {
    let table = ItemTable::load(path)?;
    let mut out = Table::new();
    out.load_preset(comfy_table::presets::UTF8_FULL);
    out.set_header(header(&["Id", "Name"], Flavor::title, &["Smooth", "Rarity"]));
    for (id, item) in table.iter() {
        let mut row = vec![id.to_string(), item.name.clone()];
        row.extend(item.flavors.iter().map(|v| v.to_string()));
        row.push(item.smoothness.to_string());
        row.push(item.rarity.to_string());
        out.add_row(row);
    }
    Ok(out.to_string())
}
