//! longpath CLI - Long simple paths in directed graphs
//!
//! Loads a graph from an edge-list file and approximates the longest simple
//! path between two vertices with one of two heuristics.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod loader;
mod output;

use commands::search::{SearchArgs, StrategyKind};
use config::LongpathConfig;
use output::{OutputConfig, OutputFormat};

/// Approximate the longest simple path between two vertices of a directed graph.
///
/// The exact problem is NP-hard; longpath prunes the graph to the vertices that
/// can lie on a start-to-end path and runs a breadth-first relaxation or a
/// batch of random walks.
#[derive(Parser)]
#[command(name = "longpath")]
#[command(author, version)]
#[command(about = "Approximate the longest simple path between two vertices of a directed graph")]
#[command(propagate_version = true)]
#[command(after_help = "Edge lists hold one edge per line: `head tail` or `head -> tail`.

Examples:
  longpath search words.txt -s start -e end
  longpath search words.txt -s start -e end --strategy random-walk -n 50000 --seed 7
  longpath reach words.txt --from start
  longpath stats words.txt --start start --end end")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    compact: bool,

    /// Show detailed version information
    #[arg(long = "version-verbose")]
    version_verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a long simple path from a start vertex to an end vertex
    #[command(visible_alias = "s")]
    Search {
        /// Edge-list file
        edges: PathBuf,

        /// Vertex the path starts at
        #[arg(short, long)]
        start: String,

        /// Vertex the path ends at
        #[arg(short, long)]
        end: String,

        /// Search heuristic (overrides config)
        #[arg(long, value_enum)]
        strategy: Option<StrategyKind>,

        /// Number of random walks
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Seed for reproducible random walks
        #[arg(long)]
        seed: Option<u64>,

        /// Search the whole graph instead of the start/end candidates
        #[arg(long)]
        no_prune: bool,

        /// Check the result against the input graph before printing it
        #[arg(long)]
        verify: bool,
    },

    /// List vertices reachable from (or reaching) the given seeds
    Reach {
        /// Edge-list file
        edges: PathBuf,

        /// Seed vertices
        #[arg(long, required = true, num_args = 1..)]
        from: Vec<String>,

        /// Follow edges backward (what reaches the seeds)
        #[arg(short, long)]
        backward: bool,
    },

    /// Summarize an edge list
    Stats {
        /// Edge-list file
        edges: PathBuf,

        /// Count start/end candidates from this vertex
        #[arg(long, requires = "end")]
        start: Option<String>,

        /// Count start/end candidates up to this vertex
        #[arg(long, requires = "start")]
        end: Option<String>,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

/// Print verbose version information
fn print_verbose_version() {
    use colored::Colorize;

    let cli_version = env!("CARGO_PKG_VERSION");
    let platform = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    println!("longpath {}", cli_version);
    println!("  {:<15} {}", "longpath-cli:".cyan(), cli_version);
    println!("  {:<15} {}", "longpath-core:".cyan(), longpath_core::version());
    println!("  {:<15} {}", "Platform:".cyan(), platform);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.version_verbose {
        print_verbose_version();
        return Ok(());
    }

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration from .longpathrc.toml
    let config = LongpathConfig::load(std::path::Path::new("."));

    // Resolve output format: CLI flag > config default > Text
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Text)
    });
    let mut output = OutputConfig::auto_detect(format, config.use_color());
    if cli.compact || config.compact_json() {
        output = output.compact();
    }
    if !output.use_colors() {
        colored::control::set_override(false);
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            let _ = Cli::command().print_help();
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Search {
            edges,
            start,
            end,
            strategy,
            iterations,
            seed,
            no_prune,
            verify,
        } => {
            let args = SearchArgs {
                edges,
                start,
                end,
                strategy,
                iterations,
                seed,
                no_prune,
                verify,
            };
            commands::search::run(args, &config, &output).await
        }
        Commands::Reach {
            edges,
            from,
            backward,
        } => commands::reach::run(edges, from, backward, &config, &output).await,
        Commands::Stats { edges, start, end } => {
            let endpoints = start.zip(end);
            commands::stats::run(edges, endpoints, &config, &output).await
        }
    }
}
