//! Paths: validation of search results and the shared-tail path used during search.
//!
//! A path is a plain `Vec<K>` of vertex keys, oldest first. An empty path means
//! "no path found".

use rpds::List;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::Graph;

/// Ordered sequence of vertex keys.
pub type Path<K> = Vec<K>;

/// Check that every consecutive pair of `path` is an edge of `graph`.
///
/// The empty path is trivially valid. A single-vertex path is valid when the
/// vertex exists.
pub fn is_path<K: Clone + Hash + Eq, P>(graph: &Graph<K, P>, path: &[K]) -> bool {
    match path {
        [] => true,
        [only] => graph.contains(only),
        _ => path
            .windows(2)
            .all(|pair| graph.has_edge(&pair[0], &pair[1])),
    }
}

/// [`is_path`], and no vertex appears twice.
pub fn is_simple_path<K: Clone + Hash + Eq, P>(graph: &Graph<K, P>, path: &[K]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    is_path(graph, path) && path.iter().all(|key| seen.insert(key))
}

/// Check a search result against the long-path contract.
///
/// An empty path passes. A non-empty path must start at `start`, end at `end`,
/// follow real edges and visit no vertex twice.
///
/// # Errors
///
/// [`GraphError::InvalidPath`] naming the first violation found.
pub fn validate_result<K, P>(graph: &Graph<K, P>, start: &K, end: &K, path: &[K]) -> Result<()>
where
    K: Clone + Hash + Eq + Debug,
{
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return Ok(());
    };

    if first != start {
        return Err(GraphError::invalid_path(format!(
            "starts at {:?}, expected {:?}",
            first, start
        )));
    }
    if last != end {
        return Err(GraphError::invalid_path(format!(
            "ends at {:?}, expected {:?}",
            last, end
        )));
    }
    if let Some(pair) = path
        .windows(2)
        .find(|pair| !graph.has_edge(&pair[0], &pair[1]))
    {
        return Err(GraphError::invalid_path(format!(
            "{:?} -> {:?} is not an edge",
            pair[0], pair[1]
        )));
    }
    if path.len() == 1 && !graph.contains(first) {
        return Err(GraphError::key_not_found(first));
    }

    let mut seen = HashSet::with_capacity(path.len());
    if let Some(repeated) = path.iter().find(|key| !seen.insert(*key)) {
        return Err(GraphError::invalid_path(format!(
            "visits {:?} more than once",
            repeated
        )));
    }

    Ok(())
}

/// Immutable path stored newest-first, so extending it shares the existing tail
/// instead of copying it.
#[derive(Debug, Clone)]
pub(crate) struct SharedPath<K> {
    keys: List<K>,
}

impl<K: Clone + PartialEq> SharedPath<K> {
    pub(crate) fn empty() -> Self {
        Self { keys: List::new() }
    }

    pub(crate) fn single(key: K) -> Self {
        Self::empty().extended(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// New path with `key` appended; `self` is unchanged.
    pub(crate) fn extended(&self, key: K) -> Self {
        Self {
            keys: self.keys.push_front(key),
        }
    }

    /// Materialize oldest-first.
    pub(crate) fn to_vec(&self) -> Path<K> {
        let mut keys: Vec<K> = self.keys.iter().cloned().collect();
        keys.reverse();
        keys
    }
}
