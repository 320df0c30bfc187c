//! Command implementations for the longpath CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod reach;
pub mod search;
pub mod stats;

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::LongpathConfig;
use crate::loader::{load_graph, EdgeGraph};

/// Load an edge list and enforce the configured vertex limit.
pub(crate) async fn load_within_limits(edges: &Path, config: &LongpathConfig) -> Result<EdgeGraph> {
    let graph = load_graph(edges).await?;
    if let Some(max) = config.max_vertices() {
        if graph.node_count() > max {
            bail!(
                "Graph has {} vertices, more than the configured limit of {} (limits.max_vertices)",
                graph.node_count(),
                max
            );
        }
    }
    Ok(graph)
}
