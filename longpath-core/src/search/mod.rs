//! Long simple path search.
//!
//! Two heuristics are available:
//!
//! - [`breadth_first`]: deterministic wave-wise relaxation.
//! - [`random_walk`]: Monte Carlo self-avoiding walks driven by a caller-supplied RNG.
//!
//! [`find_long_path`] prunes the graph to the vertices that can lie on a
//! `start -> end` path before running the chosen [`Strategy`].

pub mod breadth_first;
pub mod random_walk;

pub use breadth_first::find_long_path_breadth_first;
pub use random_walk::{find_long_path_random_walk, RandomWalk};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::graph::Graph;
use crate::path::Path;
use crate::reach::prune;

/// Which heuristic to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum Strategy {
    /// Wave-wise relaxation; deterministic, self-bounding.
    #[default]
    BreadthFirst,
    /// Self-avoiding random walks; bounded by `iterations`.
    RandomWalk {
        iterations: usize,
        #[serde(default)]
        seed: Option<u64>,
    },
}

impl Strategy {
    /// Run the strategy directly on `graph`, without pruning.
    pub fn run<K, P>(&self, graph: &Graph<K, P>, start: &K, end: &K) -> Path<K>
    where
        K: Clone + Hash + Eq,
    {
        match *self {
            Strategy::BreadthFirst => find_long_path_breadth_first(graph, start, end),
            Strategy::RandomWalk { iterations, seed } => {
                RandomWalk { iterations, seed }.search(graph, start, end)
            }
        }
    }

    /// Short name, as accepted by [`Strategy::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::RandomWalk { .. } => "random-walk",
        }
    }
}

impl From<RandomWalk> for Strategy {
    fn from(walk: RandomWalk) -> Self {
        Strategy::RandomWalk {
            iterations: walk.iterations,
            seed: walk.seed,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::RandomWalk {
                iterations,
                seed: Some(seed),
            } => write!(f, "random-walk ({} walks, seed {})", iterations, seed),
            Strategy::RandomWalk { iterations, .. } => {
                write!(f, "random-walk ({} walks)", iterations)
            }
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    /// Parse a strategy name. Random walk gets the default walk count and no seed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breadth-first" | "bfs" => Ok(Strategy::BreadthFirst),
            "random-walk" | "walk" => Ok(RandomWalk::default().into()),
            _ => Err(format!("Unknown search strategy: '{}'", s)),
        }
    }
}

/// Prune `graph` to the `start`/`end` candidates, then run `strategy` on the result.
///
/// Returns an empty path when no path exists.
pub fn find_long_path<K, P>(
    graph: &Graph<K, P>,
    start: &K,
    end: &K,
    strategy: &Strategy,
) -> Path<K>
where
    K: Clone + Hash + Eq,
    P: Clone,
{
    let pruned = prune(graph, start, end);
    strategy.run(&pruned, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_graph() -> Graph<&'static str, ()> {
        [
            ("s", "a"),
            ("a", "b"),
            ("b", "e"),
            ("s", "e"),
            ("a", "trap"),
            ("trap", "deeper"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("bfs".parse::<Strategy>(), Ok(Strategy::BreadthFirst));
        assert_eq!(
            "Random-Walk".parse::<Strategy>(),
            Ok(Strategy::RandomWalk {
                iterations: RandomWalk::DEFAULT_ITERATIONS,
                seed: None
            })
        );
        assert!("dijkstra".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_serde() {
        let strategy = Strategy::RandomWalk {
            iterations: 10,
            seed: Some(3),
        };
        let json = serde_json::to_string(&strategy).unwrap();
        assert_eq!(json, r#"{"strategy":"random-walk","iterations":10,"seed":3}"#);

        let parsed: Strategy = serde_json::from_str(r#"{"strategy":"breadth-first"}"#).unwrap();
        assert_eq!(parsed, Strategy::BreadthFirst);
    }

    #[test]
    fn test_find_long_path_both_strategies() {
        let graph = create_test_graph();
        let walk = Strategy::from(RandomWalk::new(200).seeded(5));

        for strategy in [Strategy::BreadthFirst, walk] {
            let path = find_long_path(&graph, &"s", &"e", &strategy);
            assert_eq!(path, vec!["s", "a", "b", "e"], "strategy {}", strategy);
        }
    }

    #[test]
    fn test_find_long_path_disconnected() {
        let mut graph = create_test_graph();
        graph.add_edge("x", "y");
        assert!(find_long_path(&graph, &"s", &"y", &Strategy::BreadthFirst).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::BreadthFirst.to_string(), "breadth-first");
        assert_eq!(
            Strategy::from(RandomWalk::new(5).seeded(1)).to_string(),
            "random-walk (5 walks, seed 1)"
        );
        assert_eq!(Strategy::default().name(), "breadth-first");
    }
}
