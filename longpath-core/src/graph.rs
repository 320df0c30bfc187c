//! Generic adjacency-set directed graph with vertex payloads.
//!
//! Every vertex stores both its forward (`next`) and backward (`prev`) neighbour
//! sets so traversals can run in either direction without rebuilding the graph.
//!
//! # Lookup families
//!
//! - **Strict**: [`Graph::node`], [`Graph::payload`], [`Graph::try_next`],
//!   [`Graph::try_prev`], [`Graph::try_adjacent`] fail with
//!   [`GraphError::KeyNotFound`] when the key is absent.
//! - **Lenient**: [`Graph::next`], [`Graph::prev`], [`Graph::adjacent`] return an
//!   empty set for an unknown key, so traversal code can probe speculatively.
//!   [`Graph::get`] returns `None`.
//!
//! # Payload policy
//!
//! - [`Graph::insert_node_if_absent`] and [`Graph::add_edge_and_endpoints`] never
//!   replace the payload of an existing vertex; the supplied payload is dropped.
//! - [`Graph::upsert_node`] is the only in-place way to replace a payload.
//!
//! # Aliasing
//!
//! Edge and node insertion take `&mut self`. A graph shared between threads must
//! be cloned or wrapped in a lock before it is extended.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};

/// Which way to follow edges during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow edges from head to tail (`next`).
    Forward,
    /// Follow edges from tail to head (`prev`).
    Backward,
}

/// A graph vertex: key, payload and both adjacency sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K: Hash + Eq, P> {
    key: K,
    payload: P,
    next: IndexSet<K>,
    prev: IndexSet<K>,
}

impl<K: Hash + Eq, P> Node<K, P> {
    fn new(key: K, payload: P) -> Self {
        Self {
            key,
            payload,
            next: IndexSet::new(),
            prev: IndexSet::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Keys of vertices this node has an edge to.
    pub fn next(&self) -> &IndexSet<K> {
        &self.next
    }

    /// Keys of vertices that have an edge to this node.
    pub fn prev(&self) -> &IndexSet<K> {
        &self.prev
    }

    pub fn adjacent(&self, direction: Direction) -> &IndexSet<K> {
        match direction {
            Direction::Forward => &self.next,
            Direction::Backward => &self.prev,
        }
    }
}

/// Directed graph keyed by `K` with a payload `P` on every vertex.
///
/// Vertices enumerate in insertion order, and so do the neighbours of each
/// vertex. That order carries no meaning beyond making iteration reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<K: Hash + Eq, P> {
    nodes: IndexMap<K, Node<K, P>>,
    // Returned by the lenient accessors for unknown keys.
    empty: IndexSet<K>,
}

impl<K: Hash + Eq, P> Default for Graph<K, P> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
            empty: IndexSet::new(),
        }
    }
}

impl<K: Clone + Hash + Eq, P> Graph<K, P> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(capacity),
            empty: IndexSet::new(),
        }
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct directed edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.next.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Get the vertex with the given key, if any.
    ///
    /// Lenient counterpart of [`Graph::node`].
    pub fn get(&self, key: &K) -> Option<&Node<K, P>> {
        self.nodes.get(key)
    }

    /// Check whether the edge `head -> tail` exists.
    pub fn has_edge(&self, head: &K, tail: &K) -> bool {
        self.nodes
            .get(head)
            .is_some_and(|node| node.next.contains(tail))
    }

    /// All vertex keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.nodes.keys()
    }

    /// All vertices, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<K, P>> + '_ {
        self.nodes.values()
    }

    /// All edges as `(head, tail)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> + '_ {
        self.nodes
            .values()
            .flat_map(|node| node.next.iter().map(move |tail| (&node.key, tail)))
    }

    // ==================== Mutation ====================

    /// Insert a vertex unless one with the same key exists.
    ///
    /// Returns `true` if the vertex was created. An existing vertex keeps its
    /// payload and `payload` is dropped.
    pub fn insert_node_if_absent(&mut self, key: K, payload: P) -> bool {
        if self.nodes.contains_key(&key) {
            return false;
        }
        self.nodes.insert(key.clone(), Node::new(key, payload));
        true
    }

    /// Insert a vertex or replace the payload of an existing one.
    ///
    /// Adjacency of an existing vertex is preserved. Returns the replaced payload.
    pub fn upsert_node(&mut self, key: K, payload: P) -> Option<P> {
        match self.nodes.get_mut(&key) {
            Some(node) => Some(std::mem::replace(&mut node.payload, payload)),
            None => {
                self.nodes.insert(key.clone(), Node::new(key, payload));
                None
            }
        }
    }

    /// Add the edge `head -> tail`, creating missing endpoints with the default payload.
    ///
    /// Adding an edge that already exists changes nothing.
    pub fn add_edge(&mut self, head: K, tail: K)
    where
        P: Default,
    {
        self.add_edge_and_endpoints(head, tail, P::default(), P::default());
    }

    /// Add the edge `head -> tail`, creating missing endpoints with the given payloads.
    ///
    /// Endpoints are insert-if-absent: when a vertex already exists its payload is
    /// kept and the corresponding argument is dropped. Use [`Graph::upsert_node`]
    /// to replace a payload.
    pub fn add_edge_and_endpoints(&mut self, head: K, tail: K, head_payload: P, tail_payload: P) {
        self.insert_node_if_absent(head.clone(), head_payload);
        self.insert_node_if_absent(tail.clone(), tail_payload);
        self.link(head, tail);
    }

    /// Record `head -> tail` in both adjacency sets. Both endpoints must exist.
    fn link(&mut self, head: K, tail: K) {
        if let Some(node) = self.nodes.get_mut(&head) {
            node.next.insert(tail.clone());
        }
        if let Some(node) = self.nodes.get_mut(&tail) {
            node.prev.insert(head);
        }
    }

    // ==================== Lenient adjacency ====================

    /// Forward neighbours of `key`, or an empty set if the key is unknown.
    pub fn next(&self, key: &K) -> &IndexSet<K> {
        self.adjacent(key, Direction::Forward)
    }

    /// Backward neighbours of `key`, or an empty set if the key is unknown.
    pub fn prev(&self, key: &K) -> &IndexSet<K> {
        self.adjacent(key, Direction::Backward)
    }

    /// Neighbours of `key` in `direction`, or an empty set if the key is unknown.
    pub fn adjacent(&self, key: &K, direction: Direction) -> &IndexSet<K> {
        match self.nodes.get(key) {
            Some(node) => node.adjacent(direction),
            None => &self.empty,
        }
    }

    // ==================== Derived graphs ====================

    /// Build the induced subgraph over `keys`.
    ///
    /// The result holds every listed key that exists in this graph (including
    /// vertices left isolated) and exactly the edges whose endpoints are both
    /// listed. Unknown keys are ignored. Vertex order follows this graph.
    pub fn filter_induced<'a, I>(&self, keys: I) -> Graph<K, P>
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
        P: Clone,
    {
        let kept: IndexSet<&K> = keys.into_iter().collect();
        let mut filtered = Graph::with_capacity(kept.len());

        for node in self.nodes.values().filter(|node| kept.contains(&node.key)) {
            filtered.insert_node_if_absent(node.key.clone(), node.payload.clone());
        }

        // Scanning forward adjacency alone is enough: an edge survives only
        // when both ends are kept, so its tail sees it from the head's side.
        for node in self.nodes.values().filter(|node| kept.contains(&node.key)) {
            for tail in node.next.iter().filter(|tail| kept.contains(tail)) {
                filtered.link(node.key.clone(), tail.clone());
            }
        }

        filtered
    }

    /// Copy the graph, replacing every payload with `transform(&payload)`.
    ///
    /// Vertex set, edge set and enumeration order are unchanged.
    pub fn transform_payload<Q, F>(&self, mut transform: F) -> Graph<K, Q>
    where
        F: FnMut(&P) -> Q,
    {
        let nodes = self
            .nodes
            .iter()
            .map(|(key, node)| {
                (
                    key.clone(),
                    Node {
                        key: node.key.clone(),
                        payload: transform(&node.payload),
                        next: node.next.clone(),
                        prev: node.prev.clone(),
                    },
                )
            })
            .collect();

        Graph {
            nodes,
            empty: IndexSet::new(),
        }
    }
}

impl<K: Clone + Hash + Eq + Debug, P> Graph<K, P> {
    // ==================== Strict lookup ====================

    /// Get the vertex with the given key.
    ///
    /// # Errors
    ///
    /// [`GraphError::KeyNotFound`] if the graph has no such vertex.
    pub fn node(&self, key: &K) -> Result<&Node<K, P>> {
        self.nodes
            .get(key)
            .ok_or_else(|| GraphError::key_not_found(key))
    }

    /// Get the payload of the vertex with the given key.
    pub fn payload(&self, key: &K) -> Result<&P> {
        self.node(key).map(Node::payload)
    }

    /// Forward neighbours of `key`; fails if the key is unknown.
    pub fn try_next(&self, key: &K) -> Result<&IndexSet<K>> {
        self.try_adjacent(key, Direction::Forward)
    }

    /// Backward neighbours of `key`; fails if the key is unknown.
    pub fn try_prev(&self, key: &K) -> Result<&IndexSet<K>> {
        self.try_adjacent(key, Direction::Backward)
    }

    /// Neighbours of `key` in `direction`; fails if the key is unknown.
    pub fn try_adjacent(&self, key: &K, direction: Direction) -> Result<&IndexSet<K>> {
        self.node(key).map(|node| node.adjacent(direction))
    }
}

impl<K: Clone + Hash + Eq, P: Default> FromIterator<(K, K)> for Graph<K, P> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(edges: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(edges);
        graph
    }
}

impl<K: Clone + Hash + Eq, P: Default> Extend<(K, K)> for Graph<K, P> {
    fn extend<I: IntoIterator<Item = (K, K)>>(&mut self, edges: I) {
        for (head, tail) in edges {
            self.add_edge(head, tail);
        }
    }
}
