//! Reach command - List vertices reachable from a set of seeds
//!
//! Follows edges forward (what can be reached from the seeds) or backward
//! (what can reach the seeds).

use crate::commands::load_within_limits;
use crate::config::LongpathConfig;
use crate::output::{OutputConfig, Outputter, TableOutput};
use anyhow::{Context, Result};
use colored::Colorize;
use longpath_core::{reachable, Direction};
use serde::Serialize;
use std::path::PathBuf;

/// Reachability result
#[derive(Debug, Serialize)]
pub struct ReachResult {
    pub seeds: Vec<String>,
    pub direction: Direction,
    /// Reachable vertices, seeds included
    pub reachable: Vec<String>,
    pub count: usize,
}

impl Outputter for ReachResult {
    fn to_text(&self) -> String {
        let label = match self.direction {
            Direction::Forward => "reachable from",
            Direction::Backward => "reaching",
        };
        let mut output = format!(
            "{} vertices {} {}\n",
            self.count.to_string().bold(),
            label,
            self.seeds.join(", ").cyan()
        );
        for key in &self.reachable {
            output.push_str(&format!("  {}\n", key));
        }
        output.trim_end().to_string()
    }

    fn to_table(&self) -> String {
        let rows: Vec<Vec<String>> = self
            .reachable
            .iter()
            .map(|key| {
                let seed = if self.seeds.contains(key) { "yes" } else { "" };
                vec![key.clone(), seed.to_string()]
            })
            .collect();
        TableOutput::format_rows(&["Vertex", "Seed"], &rows)
    }
}

/// Run the reach command
pub async fn run(
    edges: PathBuf,
    seeds: Vec<String>,
    backward: bool,
    config: &LongpathConfig,
    output: &OutputConfig,
) -> Result<()> {
    let graph = load_within_limits(&edges, config).await?;
    for seed in &seeds {
        graph
            .node(seed)
            .with_context(|| format!("Unknown seed vertex '{}'", seed))?;
    }

    let direction = if backward {
        Direction::Backward
    } else {
        Direction::Forward
    };
    let reached: Vec<String> = reachable(&graph, &seeds, direction).into_iter().collect();

    let result = ReachResult {
        count: reached.len(),
        reachable: reached,
        direction,
        seeds,
    };
    result.output(output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_output() {
        let result = ReachResult {
            seeds: vec!["a".to_string()],
            direction: Direction::Backward,
            reachable: vec!["a".to_string(), "z".to_string()],
            count: 2,
        };
        let text = result.to_text();
        assert!(text.contains("reaching"));
        assert!(text.contains("  z"));

        let table = result.to_table();
        assert!(table.contains("yes"));
    }
}
