//! Reachability scans and the prune step that runs before a long-path search.
//!
//! Only vertices that are forward-reachable from `start` *and* backward-reachable
//! from `end` can lie on a simple `start -> end` path. [`prune`] builds the
//! induced subgraph over exactly those vertices.

use indexmap::IndexSet;
use std::hash::Hash;
use tracing::debug;

use crate::graph::{Direction, Graph};

/// Collect every key reachable from `seeds` by following edges in `direction`.
///
/// Seeds are part of the result even when they are not vertices of the graph;
/// unknown keys simply have no neighbours.
pub fn reachable<'a, K, P, I>(graph: &Graph<K, P>, seeds: I, direction: Direction) -> IndexSet<K>
where
    K: Clone + Hash + Eq + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut visited: IndexSet<K> = seeds.into_iter().cloned().collect();
    let mut stack: Vec<K> = visited.iter().cloned().collect();

    while let Some(current) = stack.pop() {
        for neighbor in graph.adjacent(&current, direction) {
            if visited.insert(neighbor.clone()) {
                stack.push(neighbor.clone());
            }
        }
    }

    visited
}

/// Vertices forward-reachable from `start` and backward-reachable from `end`.
///
/// Order follows the forward scan.
pub fn candidate_vertices<K, P>(graph: &Graph<K, P>, start: &K, end: &K) -> IndexSet<K>
where
    K: Clone + Hash + Eq,
{
    let forward = reachable(graph, [start], Direction::Forward);
    let backward = reachable(graph, [end], Direction::Backward);
    forward
        .into_iter()
        .filter(|key| backward.contains(key))
        .collect()
}

/// Induced subgraph over [`candidate_vertices`].
///
/// The input graph is not modified. If `start` cannot reach `end` the result is empty.
pub fn prune<K, P>(graph: &Graph<K, P>, start: &K, end: &K) -> Graph<K, P>
where
    K: Clone + Hash + Eq,
    P: Clone,
{
    let candidates = candidate_vertices(graph, start, end);
    let pruned = graph.filter_induced(candidates.iter());
    debug!(
        before = graph.node_count(),
        after = pruned.node_count(),
        edges = pruned.edge_count(),
        "pruned graph to start/end candidates"
    );
    pruned
}
