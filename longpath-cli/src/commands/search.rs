//! Search command - Find a long simple path between two vertices
//!
//! Loads an edge list, optionally prunes it to the vertices that can lie on a
//! `start -> end` path, and runs one of the two heuristics.

use crate::commands::load_within_limits;
use crate::config::LongpathConfig;
use crate::output::{OutputConfig, Outputter, TableOutput};
use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use longpath_core::{prune, validate_result, RandomWalk, Strategy};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Heuristic selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum StrategyKind {
    /// Deterministic wave-wise relaxation
    BreadthFirst,
    /// Monte Carlo self-avoiding random walks
    RandomWalk,
}

/// Arguments of `longpath search`
#[derive(Debug, Clone)]
pub struct SearchArgs {
    pub edges: PathBuf,
    pub start: String,
    pub end: String,
    pub strategy: Option<StrategyKind>,
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub no_prune: bool,
    pub verify: bool,
}

/// Result of a search
#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub start: String,
    pub end: String,
    pub strategy: Strategy,
    /// Whether a path was found
    pub found: bool,
    /// The path, start first; empty if none was found
    pub path: Vec<String>,
    /// Number of edges on the path
    pub edges: usize,
    /// Vertices in the loaded graph
    pub graph_vertices: usize,
    /// Vertices the heuristic actually ran on
    pub searched_vertices: usize,
    pub pruned: bool,
}

impl Outputter for SearchResult {
    fn to_text(&self) -> String {
        if !self.found {
            return format!(
                "{} from {} to {}",
                "No path found".yellow(),
                self.start.cyan(),
                self.end.cyan()
            );
        }

        let mut output = format!(
            "{} {} vertices, {} edges ({})\n",
            "Path:".bold(),
            self.path.len(),
            self.edges,
            self.strategy
        );
        output.push_str(&format!("  {}\n", self.path.join(" -> ")));
        output.push_str(
            &format!(
                "searched {} of {} vertices",
                self.searched_vertices, self.graph_vertices
            )
            .dimmed()
            .to_string(),
        );
        output
    }

    fn to_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .path
            .iter()
            .enumerate()
            .map(|(i, key)| vec![(i + 1).to_string(), key.clone()])
            .collect();
        TableOutput::format_rows(&["Step", "Vertex"], &rows)
    }
}

/// Pick the strategy: command-line flags first, then the config file, then defaults.
pub fn resolve_strategy(args: &SearchArgs, config: &LongpathConfig) -> Result<Strategy> {
    let base = match (args.strategy, config.strategy_name()) {
        (Some(StrategyKind::BreadthFirst), _) => Strategy::BreadthFirst,
        (Some(StrategyKind::RandomWalk), _) => RandomWalk::default().into(),
        (None, Some(name)) => name
            .parse::<Strategy>()
            .map_err(anyhow::Error::msg)
            .context("Invalid search.strategy in config")?,
        (None, None) => Strategy::default(),
    };

    match base {
        Strategy::BreadthFirst => Ok(Strategy::BreadthFirst),
        Strategy::RandomWalk { .. } => {
            let iterations = args
                .iterations
                .or(config.search.iterations)
                .unwrap_or(RandomWalk::DEFAULT_ITERATIONS);
            if iterations == 0 {
                bail!("Random walk needs at least one iteration");
            }
            Ok(Strategy::RandomWalk {
                iterations,
                seed: args.seed.or(config.search.seed),
            })
        }
    }
}

/// Run the search command
pub async fn run(args: SearchArgs, config: &LongpathConfig, output: &OutputConfig) -> Result<()> {
    let graph = load_within_limits(&args.edges, config).await?;
    graph.node(&args.start).context("Unknown start vertex")?;
    graph.node(&args.end).context("Unknown end vertex")?;

    let strategy = resolve_strategy(&args, config)?;
    let prune_first = !args.no_prune && config.prune();

    let pruned;
    let working = if prune_first {
        pruned = prune(&graph, &args.start, &args.end);
        &pruned
    } else {
        &graph
    };

    info!(
        strategy = %strategy,
        vertices = working.node_count(),
        edges = working.edge_count(),
        "searching for long path"
    );
    let path = strategy.run(working, &args.start, &args.end);

    if args.verify {
        validate_result(&graph, &args.start, &args.end, &path)
            .context("Search returned an invalid path")?;
    }

    let result = SearchResult {
        found: !path.is_empty(),
        edges: path.len().saturating_sub(1),
        graph_vertices: graph.node_count(),
        searched_vertices: working.node_count(),
        pruned: prune_first,
        start: args.start,
        end: args.end,
        strategy,
        path,
    };
    result.output(output);
    Ok(())
}
