//! longpath core - directed graphs and long simple path heuristics.
//!
//! Finding the longest simple path between two vertices is NP-hard. This crate
//! approximates it with two heuristics over a generic directed graph.
//!
//! # Features
//!
//! - **Generic graph**: adjacency-set directed graph with per-vertex payloads,
//!   induced subgraphs and payload transforms
//! - **Reachability pruning**: keep only vertices reachable from `start` and
//!   co-reachable from `end`
//! - **Breadth-first search**: deterministic wave-wise relaxation
//! - **Random-walk search**: Monte Carlo self-avoiding walks with an injected RNG
//!
//! # Usage
//!
//! ```
//! use longpath_core::{find_long_path, Graph, Strategy};
//!
//! let graph: Graph<&str, ()> = [("A", "B"), ("B", "C"), ("A", "C")].into_iter().collect();
//! let path = find_long_path(&graph, &"A", &"C", &Strategy::BreadthFirst);
//! assert_eq!(path, vec!["A", "B", "C"]);
//! ```

pub mod error;
pub mod graph;
pub mod interop;
pub mod path;
pub mod reach;
pub mod search;

pub use error::{GraphError, Result};
pub use graph::{Direction, Graph, Node};
pub use path::{is_path, is_simple_path, validate_result, Path};
pub use reach::{candidate_vertices, prune, reachable};
pub use search::{
    find_long_path, find_long_path_breadth_first, find_long_path_random_walk, RandomWalk,
    Strategy,
};

/// Get the version of longpath-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
