//! Breadth-first relaxation heuristic for long simple paths.
//!
//! Every vertex remembers the longest loop-free path from `start` found so far.
//! Vertices whose path improved form the frontier of the next wave. A neighbour
//! takes over its predecessor's path extended by itself whenever that is at
//! least as long as what it already holds, and the predecessor's path does not
//! already visit it.
//!
//! This is not an exact algorithm. The loop check only looks at the
//! predecessor's own path, so distinct routes into the same vertex are never
//! merged, and equal-length ties go to whichever path arrived first.

use indexmap::IndexSet;
use std::hash::Hash;
use tracing::debug;

use crate::graph::Graph;
use crate::path::{Path, SharedPath};

/// Find a long simple path from `start` to `end` by wave-wise relaxation.
///
/// `end` is terminal: once reached it is never used to continue exploring.
/// Returns an empty path if `end` cannot be reached or `start` is not a vertex.
/// When `start == end` the result is the single-vertex path.
///
/// Runs until a wave changes nothing. Each vertex's stored length only grows and
/// is capped by the vertex count, so the number of relaxations is bounded.
pub fn find_long_path_breadth_first<K, P>(graph: &Graph<K, P>, start: &K, end: &K) -> Path<K>
where
    K: Clone + Hash + Eq,
{
    if !graph.contains(start) {
        return Vec::new();
    }
    if start == end {
        return vec![start.clone()];
    }

    // Same shape as the input, every payload replaced by the best path so far.
    let mut working = graph.transform_payload(|_| SharedPath::empty());
    working.upsert_node(start.clone(), SharedPath::single(start.clone()));

    let mut frontier: IndexSet<K> = IndexSet::from([start.clone()]);
    let mut waves = 0usize;
    let mut relaxations = 0usize;

    while !frontier.is_empty() {
        waves += 1;
        let mut modified = IndexSet::new();

        for key in &frontier {
            let Some(current) = working.get(key).map(|node| node.payload().clone()) else {
                continue;
            };

            for neighbor in graph.next(key) {
                if current.contains(neighbor) {
                    continue;
                }
                let known = working
                    .get(neighbor)
                    .map_or(0, |node| node.payload().len());
                if known <= current.len() {
                    working.upsert_node(neighbor.clone(), current.extended(neighbor.clone()));
                    relaxations += 1;
                    if neighbor != end {
                        modified.insert(neighbor.clone());
                    }
                }
            }
        }

        frontier = modified;
    }

    let found = working
        .get(end)
        .map(|node| node.payload().clone())
        .filter(|path| !path.is_empty());
    debug!(
        waves,
        relaxations,
        length = found.as_ref().map_or(0, SharedPath::len),
        "breadth-first search finished"
    );

    found.map(|path| path.to_vec()).unwrap_or_default()
}
