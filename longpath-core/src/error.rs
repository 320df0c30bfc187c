//! Error types for longpath-core.

use thiserror::Error;

/// Result type alias for longpath-core operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors that can occur during graph operations.
///
/// An empty path is a valid search outcome and is never reported through this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Strict lookup on a key the graph does not contain.
    #[error("No node was found with key {key}")]
    KeyNotFound {
        /// Debug rendering of the missing key.
        key: String,
    },

    /// A search result broke the path contract.
    #[error("Invalid path: {reason}")]
    InvalidPath {
        /// Which part of the contract was broken.
        reason: String,
    },
}

impl GraphError {
    pub(crate) fn key_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        GraphError::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn invalid_path(reason: impl Into<String>) -> Self {
        GraphError::InvalidPath {
            reason: reason.into(),
        }
    }
}
