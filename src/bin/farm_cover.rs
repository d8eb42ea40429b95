//! farm-cover CLI: place antennas so every farm is covered.
//!
//! Logs go to stderr; set RUST_LOG=debug for per-generation detail.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use symbios_cover::reference::{REFERENCE_RADIUS, reference_matrix};
use symbios_cover::{CoverSearch, DistanceMatrix, SearchConfig};
use tracing_subscriber::EnvFilter;

/// Search for the fewest antennas that cover every farm.
#[derive(Debug, Parser)]
#[command(name = "farm-cover", version, about, long_about = None)]
struct Cli {
    /// JSON array of distance rows (default: built-in 40 farms)
    #[arg(long, value_name = "FILE")]
    matrix: Option<PathBuf>,

    /// JSON search configuration; missing fields use defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Coverage radius (default: 10)
    #[arg(long, allow_negative_numbers = true)]
    radius: Option<f64>,

    /// Population size, rescaling parents and children 10/60/30
    #[arg(long, value_name = "N")]
    population: Option<usize>,

    /// Tournament winners per generation
    #[arg(long, value_name = "N")]
    parents: Option<usize>,

    /// Crossover children per generation
    #[arg(long, value_name = "N")]
    crossover: Option<usize>,

    /// Mutation children per generation
    #[arg(long, value_name = "N")]
    mutation: Option<usize>,

    /// Generations without improvement before stopping
    #[arg(long, value_name = "N")]
    stagnation: Option<usize>,

    /// Hard cap on generations
    #[arg(long, value_name = "N")]
    max_generations: Option<usize>,

    /// Generations kept in the search history
    #[arg(long, value_name = "N")]
    max_history: Option<usize>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// Config file (or reference defaults), then `--population`, then the
/// individual overrides.
fn build_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => load_json(path)?,
        None => SearchConfig {
            radius: REFERENCE_RADIUS,
            ..SearchConfig::default()
        },
    };

    if let Some(size) = cli.population {
        config = config.with_population(size);
    }
    if let Some(radius) = cli.radius {
        config.radius = radius;
    }
    if let Some(n) = cli.parents {
        config.num_parents = n;
    }
    if let Some(n) = cli.crossover {
        config.num_children_crossover = n;
    }
    if let Some(n) = cli.mutation {
        config.num_children_mutation = n;
    }
    if let Some(n) = cli.stagnation {
        config.max_stagnation = n;
    }
    if let Some(n) = cli.max_generations {
        config.max_generations = Some(n);
    }
    if let Some(n) = cli.max_history {
        config.max_history = n;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    let matrix: DistanceMatrix = match &cli.matrix {
        Some(path) => load_json(path)?,
        None => reference_matrix(),
    };

    let mut search =
        CoverSearch::new(matrix, config).context("search configuration rejected")?;
    let report = search.run().context("search aborted")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
