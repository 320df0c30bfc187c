//! Conversion to petgraph, for callers that want its algorithm library
//! (cycle detection, shortest paths, ...) on the same structure.

use petgraph::graphmap::DiGraphMap;
use std::hash::Hash;

use crate::graph::Graph;

impl<K: Clone + Hash + Eq + Ord, P> Graph<K, P> {
    /// Borrowing view of the graph as a petgraph `DiGraphMap`.
    ///
    /// Vertices are keyed by reference; payloads are not carried over.
    pub fn to_petgraph(&self) -> DiGraphMap<&K, ()> {
        let mut map = DiGraphMap::with_capacity(self.node_count(), self.edge_count());
        for key in self.keys() {
            map.add_node(key);
        }
        for (head, tail) in self.edges() {
            map.add_edge(head, tail, ());
        }
        map
    }
}
