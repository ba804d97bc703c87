//! # u-twoopt CLI
//!
//! Loads a distance matrix, runs 2-opt a number of times and prints the
//! first run's tour together with the average time per run. Can also write
//! random Euclidean instances in the same file format.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use u_twoopt::bench::{benchmark, DEFAULT_RUNS};
use u_twoopt::config::TwoOptConfig;
use u_twoopt::generate::random_euclidean;
use u_twoopt::io::{load_matrix, write_matrix};
use u_twoopt::local_search::TwoOptEngine;

/// Command-line interface for u-twoopt
#[derive(Parser)]
#[command(name = "u-twoopt")]
#[command(version, about = "2-opt local search for the symmetric TSP")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Optimize the tour for a distance-matrix file
    Solve {
        /// Distance-matrix file: node count, then n*n distances
        file: PathBuf,

        /// Number of timed repetitions
        #[arg(long, default_value_t = DEFAULT_RUNS)]
        runs: usize,

        /// Cap on accepted moves (overrides the config file)
        #[arg(long)]
        max_iterations: Option<usize>,

        /// TOML file with `max_iterations` and `epsilon`
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a random Euclidean instance
    Generate {
        /// Number of nodes
        nodes: usize,

        /// Output file path, or "-" for stdout
        output: String,

        /// Random seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Solve {
            file,
            runs,
            max_iterations,
            config,
            json,
        } => solve(file, runs, max_iterations, config, json),
        Command::Generate {
            nodes,
            output,
            seed,
        } => generate(nodes, &output, seed),
    }
}

fn solve(
    file: PathBuf,
    runs: usize,
    max_iterations: Option<usize>,
    config: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut settings = match &config {
        Some(path) => TwoOptConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TwoOptConfig::default(),
    };
    if let Some(max_iterations) = max_iterations {
        settings = settings.with_max_iterations(max_iterations);
    }

    let distances = load_matrix(&file)
        .with_context(|| format!("failed to load distances from {}", file.display()))?;
    info!(n = distances.size(), runs, "solving");

    let report = benchmark(&TwoOptEngine::new(settings), &distances, runs);
    if !report.result.is_converged() {
        info!(
            iterations = report.result.iterations,
            "iteration cap reached before convergence"
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

fn generate(nodes: usize, output: &str, seed: u64) -> Result<()> {
    let distances = random_euclidean(nodes, seed);
    if output == "-" {
        write_matrix(&distances, io::stdout().lock())?;
    } else {
        let file = File::create(output).with_context(|| format!("failed to create {output}"))?;
        write_matrix(&distances, BufWriter::new(file))?;
        info!(nodes, seed, output, "instance written");
    }
    Ok(())
}
