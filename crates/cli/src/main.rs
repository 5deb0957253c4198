//! Solver Benchmark CLI
//!
//! Command-line interface for accumulating repeated solver benchmark trials
//! into per-scenario statistics and rankings.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use solver_benchmark_cli::commands::{self, accumulate, CommandContext};
use solver_benchmark_cli::output::OutputFormat;
use solver_benchmark_common::{init_from_config, BenchConfig, RankingStrategy};

/// Ranking strategy override
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliRanking {
    /// Higher score wins; equal scores tie
    Score,
    /// Equal scores are split by less time spent
    ScoreThenTime,
}

impl From<CliRanking> for RankingStrategy {
    fn from(r: CliRanking) -> Self {
        match r {
            CliRanking::Score => RankingStrategy::Score,
            CliRanking::ScoreThenTime => RankingStrategy::ScoreThenTime,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "solver-bench")]
#[command(author, version, about = "Solver benchmark trial aggregation")]
#[command(long_about = "Accumulates repeated trial runs of solver benchmarks.\n\n\
    Computes per-scenario failure counts, average scores, spread and a tie-aware \
    ranking of trials, and reports the median trial's resource usage.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Configuration file (defaults to config/default and BENCH__ variables)
    #[arg(short, long, global = true, env = "BENCH_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Accumulate trials from an input file and report scenario statistics
    #[command(alias = "acc")]
    Accumulate {
        /// Path to the JSON trial input
        #[arg(short, long)]
        input: PathBuf,

        /// Ranking strategy (overrides config)
        #[arg(long, value_enum)]
        ranking: Option<CliRanking>,

        /// Also list every trial with its rank
        #[arg(long)]
        trials: bool,
    },

    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => BenchConfig::load_from(path)?,
        None => BenchConfig::load()?,
    };

    // Initialize tracing
    if cli.verbose {
        config.telemetry.log_level = "debug".to_string();
    }
    init_from_config(&config.telemetry)?;

    match cli.command {
        Commands::Accumulate {
            input,
            ranking,
            trials,
        } => {
            // Override config with CLI arguments
            if let Some(ranking) = ranking {
                config.aggregation.ranking = ranking.into();
            }
            let ctx = CommandContext::new(config, cli.format);
            accumulate::run(&ctx, &input, trials)
        }
        Commands::Config => {
            let ctx = CommandContext::new(config, cli.format);
            commands::config::show(&ctx)
        }
    }
}
