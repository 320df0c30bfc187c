//! Property-based tests for the graph core and both search heuristics.
//!
//! Properties verified:
//! - Adjacency symmetry and idempotent edge insertion
//! - Induced subgraph completeness
//! - Payload transform preserves structure
//! - Search results are simple start-to-end paths of the input graph
//! - Pruning is a no-op for breadth-first when every vertex is a candidate

use longpath_core::{
    candidate_vertices, find_long_path_breadth_first, find_long_path_random_walk, prune,
    validate_result, Graph,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

/// Edge lists over a small vertex range so cycles and shared vertices are common.
fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..40)
}

fn build(edges: &[(u8, u8)]) -> Graph<u8, ()> {
    edges.iter().copied().collect()
}

/// Unions of `0 -> ... -> 11` walks, plus extra edges between vertices already
/// on a walk, so every vertex lies on some walk from 0 to 11.
fn walk_union() -> impl Strategy<Value = Graph<u8, ()>> {
    (
        prop::collection::vec(prop::collection::vec(1u8..11, 0..6), 1..5),
        prop::collection::vec((0u8..12, 0u8..12), 0..20),
    )
        .prop_map(|(walks, extra)| {
            let mut graph: Graph<u8, ()> = Graph::new();
            for walk in &walks {
                let stops: Vec<u8> = std::iter::once(0)
                    .chain(walk.iter().copied())
                    .chain(std::iter::once(11))
                    .collect();
                for pair in stops.windows(2) {
                    graph.add_edge(pair[0], pair[1]);
                }
            }
            let extra: Vec<(u8, u8)> = extra
                .into_iter()
                .filter(|(head, tail)| graph.contains(head) && graph.contains(tail))
                .collect();
            graph.extend(extra);
            graph
        })
}

// ==========================================================================
// PROPERTY: Adjacency
// ==========================================================================

proptest! {
    /// Every added edge shows up on both sides, and re-adding changes nothing.
    #[test]
    fn prop_add_edge_symmetric_and_idempotent(edges in edge_list()) {
        let mut graph = build(&edges);

        for (head, tail) in &edges {
            prop_assert!(graph.next(head).contains(tail));
            prop_assert!(graph.prev(tail).contains(head));
        }

        let snapshot = graph.clone();
        for (head, tail) in &edges {
            graph.add_edge(*head, *tail);
        }
        prop_assert_eq!(graph, snapshot);
    }

    /// `v in next(u)` exactly when `u in prev(v)`.
    #[test]
    fn prop_next_prev_mirror(edges in edge_list()) {
        let graph = build(&edges);
        for u in graph.keys() {
            for v in graph.keys() {
                prop_assert_eq!(graph.next(u).contains(v), graph.prev(v).contains(u));
            }
        }
    }
}

// ==========================================================================
// PROPERTY: Derived graphs
// ==========================================================================

proptest! {
    /// The filtered graph has edge (u, v) iff the original does and u, v are kept.
    #[test]
    fn prop_filter_induced_complete(
        edges in edge_list(),
        keep in prop::collection::btree_set(0u8..12, 0..12),
    ) {
        let graph = build(&edges);
        let filtered = graph.filter_induced(keep.iter());

        for u in 0u8..12 {
            prop_assert_eq!(filtered.contains(&u), graph.contains(&u) && keep.contains(&u));
            for v in 0u8..12 {
                let expected = graph.has_edge(&u, &v) && keep.contains(&u) && keep.contains(&v);
                prop_assert_eq!(filtered.has_edge(&u, &v), expected);
                prop_assert_eq!(filtered.prev(&v).contains(&u), expected);
            }
        }
    }

    /// Transforming payloads keeps the exact vertex and edge sets.
    #[test]
    fn prop_transform_preserves_structure(edges in edge_list()) {
        let graph = build(&edges);
        let transformed = graph.transform_payload(|_| 1u64);

        let before: BTreeSet<(u8, u8)> = graph.edges().map(|(h, t)| (*h, *t)).collect();
        let after: BTreeSet<(u8, u8)> = transformed.edges().map(|(h, t)| (*h, *t)).collect();
        prop_assert_eq!(before, after);
        prop_assert_eq!(
            graph.keys().collect::<Vec<_>>(),
            transformed.keys().collect::<Vec<_>>()
        );
        for key in transformed.keys() {
            prop_assert_eq!(transformed.payload(key), Ok(&1u64));
        }
    }

    /// Pruning keeps exactly the candidate vertices.
    #[test]
    fn prop_prune_keeps_candidates(edges in edge_list(), start in 0u8..12, end in 0u8..12) {
        let graph = build(&edges);
        let pruned = prune(&graph, &start, &end);
        let candidates: BTreeSet<u8> = candidate_vertices(&graph, &start, &end)
            .into_iter()
            .filter(|key| graph.contains(key))
            .collect();
        let kept: BTreeSet<u8> = pruned.keys().copied().collect();
        prop_assert_eq!(kept, candidates);
    }
}

// ==========================================================================
// PROPERTY: Search results
// ==========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Breadth-first results are simple start-to-end paths, found whenever end is reachable.
    #[test]
    fn prop_breadth_first_valid(edges in edge_list(), start in 0u8..12, end in 0u8..12) {
        let graph = build(&edges);
        let path = find_long_path_breadth_first(&graph, &start, &end);

        prop_assert!(validate_result(&graph, &start, &end, &path).is_ok());

        let reachable = graph.contains(&start)
            && candidate_vertices(&graph, &start, &end).contains(&end);
        prop_assert_eq!(path.is_empty(), !reachable);
    }

    /// Random-walk results are simple start-to-end paths.
    #[test]
    fn prop_random_walk_valid(
        edges in edge_list(),
        start in 0u8..12,
        end in 0u8..12,
        seed in any::<u64>(),
    ) {
        let graph = build(&edges);
        let mut rng = StdRng::seed_from_u64(seed);
        let path = find_long_path_random_walk(&graph, &start, &end, 50, &mut rng);

        prop_assert!(validate_result(&graph, &start, &end, &path).is_ok());
    }

    /// When every vertex lies on a start-to-end walk, pruning keeps the whole
    /// graph and breadth-first returns the same path with or without it.
    #[test]
    fn prop_prune_preserves_breadth_first_result(graph in walk_union()) {
        let pruned = prune(&graph, &0, &11);
        prop_assert_eq!(pruned.node_count(), graph.node_count());
        prop_assert_eq!(pruned.edge_count(), graph.edge_count());

        let direct = find_long_path_breadth_first(&graph, &0, &11);
        prop_assert!(!direct.is_empty());
        prop_assert_eq!(find_long_path_breadth_first(&pruned, &0, &11), direct);
    }

    /// A path found on the pruned graph is also valid in the original graph.
    #[test]
    fn prop_pruned_search_valid_on_original(edges in edge_list(), start in 0u8..12, end in 0u8..12) {
        let graph = build(&edges);
        let pruned = prune(&graph, &start, &end);
        let path = find_long_path_breadth_first(&pruned, &start, &end);

        prop_assert!(validate_result(&graph, &start, &end, &path).is_ok());
    }
}
