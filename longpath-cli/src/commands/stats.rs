//! Stats command - Summarize the shape of an edge list

use crate::commands::load_within_limits;
use crate::config::LongpathConfig;
use crate::loader::EdgeGraph;
use crate::output::{OutputConfig, Outputter, TableOutput};
use anyhow::{Context, Result};
use longpath_core::candidate_vertices;
use serde::Serialize;
use std::path::PathBuf;

/// Graph summary
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub self_loops: usize,
    /// Vertices with no incoming edges
    pub sources: usize,
    /// Vertices with no outgoing edges
    pub sinks: usize,
    /// Vertices with no edges at all
    pub isolated: usize,
    /// Vertices that can lie on a start-to-end path, when both are given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<usize>,
}

impl GraphStats {
    pub fn collect(graph: &EdgeGraph) -> Self {
        let mut stats = GraphStats {
            vertices: graph.node_count(),
            edges: graph.edge_count(),
            self_loops: 0,
            sources: 0,
            sinks: 0,
            isolated: 0,
            candidates: None,
        };
        for node in graph.nodes() {
            let no_in = node.prev().is_empty();
            let no_out = node.next().is_empty();
            stats.sources += usize::from(no_in);
            stats.sinks += usize::from(no_out);
            stats.isolated += usize::from(no_in && no_out);
            stats.self_loops += usize::from(node.next().contains(node.key()));
        }
        stats
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("vertices", self.vertices.to_string()),
            ("edges", self.edges.to_string()),
            ("self loops", self.self_loops.to_string()),
            ("sources", self.sources.to_string()),
            ("sinks", self.sinks.to_string()),
            ("isolated", self.isolated.to_string()),
        ];
        if let Some(candidates) = self.candidates {
            pairs.push(("candidates", candidates.to_string()));
        }
        pairs
    }
}

impl Outputter for GraphStats {
    fn to_text(&self) -> String {
        self.pairs()
            .iter()
            .map(|(key, value)| format!("{:<12} {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn to_table(&self) -> String {
        TableOutput::format_key_value(&self.pairs())
    }
}

/// Run the stats command
pub async fn run(
    edges: PathBuf,
    endpoints: Option<(String, String)>,
    config: &LongpathConfig,
    output: &OutputConfig,
) -> Result<()> {
    let graph = load_within_limits(&edges, config).await?;
    let mut stats = GraphStats::collect(&graph);

    if let Some((start, end)) = endpoints {
        graph.node(&start).context("Unknown start vertex")?;
        graph.node(&end).context("Unknown end vertex")?;
        stats.candidates = Some(candidate_vertices(&graph, &start, &end).len());
    }

    stats.output(output);
    Ok(())
}
