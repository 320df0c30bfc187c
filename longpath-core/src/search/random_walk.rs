//! Monte Carlo heuristic for long simple paths.
//!
//! Runs many self-avoiding random walks from `start` and keeps the longest one
//! that reaches `end`. All randomness comes from the generator passed in by the
//! caller, so a seeded generator gives reproducible results.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::hash::Hash;
use tracing::{debug, trace};

use crate::graph::Graph;
use crate::path::Path;

/// Find a long simple path from `start` to `end` with `iterations` random walks.
///
/// Each walk steps to a uniformly chosen forward neighbour not yet on the walk,
/// and is abandoned when none is left. When `end` is adjacent and the walk is
/// already at least as long as the best path so far, the walk closes at `end`
/// immediately. Returns the longest completed walk, or an empty path if no walk
/// reached `end` or `start` is not a vertex.
pub fn find_long_path_random_walk<K, P, R>(
    graph: &Graph<K, P>,
    start: &K,
    end: &K,
    iterations: usize,
    rng: &mut R,
) -> Path<K>
where
    K: Clone + Hash + Eq,
    R: Rng + ?Sized,
{
    let mut best: Path<K> = Vec::new();
    if !graph.contains(start) {
        return best;
    }
    let mut completed = 0usize;

    for iteration in 0..iterations {
        let Some(path) = walk(graph, start, end, best.len(), rng) else {
            continue;
        };
        completed += 1;
        if path.len() > best.len() {
            trace!(iteration, length = path.len(), "new longest walk");
            best = path;
        }
    }

    debug!(
        iterations,
        completed,
        length = best.len(),
        "random-walk search finished"
    );
    best
}

/// One self-avoiding walk. `None` if it got stuck before reaching `end`.
fn walk<K, P, R>(
    graph: &Graph<K, P>,
    start: &K,
    end: &K,
    best_len: usize,
    rng: &mut R,
) -> Option<Path<K>>
where
    K: Clone + Hash + Eq,
    R: Rng + ?Sized,
{
    let mut path = vec![start.clone()];
    let mut visited: HashSet<&K> = HashSet::from([start]);
    let mut candidates: Vec<&K> = Vec::new();
    let mut current = start;

    while current != end {
        let next = graph.next(current);

        let chosen = if path.len() >= best_len && next.contains(end) {
            end
        } else {
            candidates.clear();
            candidates.extend(next.iter().filter(|key| !visited.contains(key)));
            *candidates.choose(rng)?
        };

        visited.insert(chosen);
        path.push(chosen.clone());
        current = chosen;
    }

    Some(path)
}

/// Random-walk settings: how many walks to run and, optionally, a fixed seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomWalk {
    pub iterations: usize,
    pub seed: Option<u64>,
}

impl RandomWalk {
    /// Walk count used when none is configured.
    pub const DEFAULT_ITERATIONS: usize = 10_000;

    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            seed: None,
        }
    }

    /// Fix the generator seed for reproducible runs.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the generator: seeded if a seed is set, from OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Run the search with a generator built by [`RandomWalk::rng`].
    pub fn search<K, P>(&self, graph: &Graph<K, P>, start: &K, end: &K) -> Path<K>
    where
        K: Clone + Hash + Eq,
    {
        find_long_path_random_walk(graph, start, end, self.iterations, &mut self.rng())
    }
}

impl Default for RandomWalk {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::is_simple_path;

    fn graph_of(edges: &[(&'static str, &'static str)]) -> Graph<&'static str, ()> {
        edges.iter().copied().collect()
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = graph_of(&[("A", "B"), ("B", "A"), ("B", "C")]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            find_long_path_random_walk(&graph, &"A", &"C", 50, &mut rng),
            vec!["A", "B", "C"]
        );
    }

    #[test]
    fn test_unreachable_is_empty() {
        let graph = graph_of(&[("A", "B"), ("C", "D")]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(find_long_path_random_walk(&graph, &"A", &"D", 100, &mut rng).is_empty());
    }

    #[test]
    fn test_zero_iterations_is_empty() {
        let graph = graph_of(&[("A", "B")]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(find_long_path_random_walk(&graph, &"A", &"B", 0, &mut rng).is_empty());
    }

    #[test]
    fn test_start_equals_end() {
        let graph = graph_of(&[("A", "B"), ("B", "A")]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            find_long_path_random_walk(&graph, &"A", &"A", 10, &mut rng),
            vec!["A"]
        );
    }

    #[test]
    fn test_unknown_start_is_empty() {
        let graph = graph_of(&[("A", "B")]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(find_long_path_random_walk(&graph, &"Z", &"Z", 10, &mut rng).is_empty());
    }

    #[test]
    fn test_dead_end_walks_are_abandoned() {
        // B is a dead end; only A -> C -> D reaches the end.
        let graph = graph_of(&[("A", "B"), ("A", "C"), ("C", "D")]);
        let mut rng = StdRng::seed_from_u64(1);
        let path = find_long_path_random_walk(&graph, &"A", &"D", 64, &mut rng);
        assert_eq!(path, vec!["A", "C", "D"]);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut graph: Graph<u32, ()> = Graph::new();
        for i in 0..8 {
            for j in (i + 1)..9 {
                if (i + j) % 3 != 0 {
                    graph.add_edge(i, j);
                }
            }
        }
        let walker = RandomWalk::new(25).seeded(99);
        let first = walker.search(&graph, &0, &8);
        let second = walker.search(&graph, &0, &8);

        assert_eq!(first, second);
        assert!(is_simple_path(&graph, &first));
    }

    #[test]
    fn test_default_settings() {
        let walker = RandomWalk::default();
        assert_eq!(walker.iterations, RandomWalk::DEFAULT_ITERATIONS);
        assert_eq!(walker.seed, None);
    }
}
