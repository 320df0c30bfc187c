//! Edge-list loading.
//!
//! One edge per line, written `head tail` or `head -> tail`. A line holding a
//! single key declares an isolated vertex. Blank lines and lines starting with
//! `#` are ignored.
//!
//! ```text
//! # fragments
//! start -> tar
//! tar rat
//! lonely
//! ```

use anyhow::{Context, Result};
use longpath_core::Graph;
use std::path::Path;
use thiserror::Error;

/// Graph type built from edge-list files: string keys, no payload.
pub type EdgeGraph = Graph<String, ()>;

/// Errors in edge-list syntax.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// A line with more than two keys.
    #[error("line {line}: expected `head tail` or `head -> tail`, found {found} keys")]
    TooManyKeys { line: usize, found: usize },

    /// A `->` line with an empty side.
    #[error("line {line}: missing key on one side of `->`")]
    MissingKey { line: usize },
}

/// Parse edge-list text into a graph.
pub fn parse_edge_list(text: &str) -> std::result::Result<EdgeGraph, LoadError> {
    let mut graph = EdgeGraph::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;

        if line.contains("->") {
            let sides: Vec<&str> = line.split("->").map(str::trim).collect();
            // Each side is one key; an empty side still counts as one slot.
            let found: usize = sides
                .iter()
                .map(|side| side.split_whitespace().count().max(1))
                .sum();
            match sides.as_slice() {
                [head, tail] if head.is_empty() || tail.is_empty() => {
                    return Err(LoadError::MissingKey { line: number })
                }
                [head, tail] if found == 2 => {
                    graph.add_edge(head.to_string(), tail.to_string());
                }
                _ => {
                    return Err(LoadError::TooManyKeys {
                        line: number,
                        found,
                    })
                }
            }
            continue;
        }

        let keys: Vec<&str> = line.split_whitespace().collect();
        match keys.as_slice() {
            [single] => {
                graph.insert_node_if_absent(single.to_string(), ());
            }
            [head, tail] => graph.add_edge(head.to_string(), tail.to_string()),
            _ => {
                return Err(LoadError::TooManyKeys {
                    line: number,
                    found: keys.len(),
                })
            }
        }
    }

    Ok(graph)
}

/// Read and parse an edge-list file.
pub async fn load_graph(path: &Path) -> Result<EdgeGraph> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read edge list: {}", path.display()))?;
    let graph = parse_edge_list(&text)
        .with_context(|| format!("Failed to parse edge list: {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        "loaded edge list"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_edge_forms() {
        let graph = parse_edge_list("a b\nb -> c\n  c->d  \n").unwrap();
        assert_eq!(graph.node_count(), 4);
        assert!(graph.has_edge(&"a".to_string(), &"b".to_string()));
        assert!(graph.has_edge(&"b".to_string(), &"c".to_string()));
        assert!(graph.has_edge(&"c".to_string(), &"d".to_string()));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let graph = parse_edge_list("# header\n\na b\n   # indented comment\n").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_parse_isolated_vertex() {
        let graph = parse_edge_list("a b\nlonely\n").unwrap();
        assert!(graph.contains(&"lonely".to_string()));
        assert!(graph.next(&"lonely".to_string()).is_empty());
    }

    #[test]
    fn test_parse_keeps_insertion_order() {
        let graph = parse_edge_list("z y\nx z\n").unwrap();
        let keys: Vec<_> = graph.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "y", "x"]);
    }

    #[test]
    fn test_parse_errors_carry_line_numbers() {
        assert_eq!(
            parse_edge_list("a b\na b c\n").unwrap_err(),
            LoadError::TooManyKeys { line: 2, found: 3 }
        );
        assert_eq!(
            parse_edge_list("\n\n -> b").unwrap_err(),
            LoadError::MissingKey { line: 3 }
        );
        assert_eq!(
            parse_edge_list("a -> b -> c").unwrap_err(),
            LoadError::TooManyKeys { line: 1, found: 3 }
        );
        assert_eq!(
            parse_edge_list("x y
a->b c
").unwrap_err(),
            LoadError::TooManyKeys { line: 2, found: 3 }
        );
        assert_eq!(
            parse_edge_list("p q -> r").unwrap_err(),
            LoadError::TooManyKeys { line: 1, found: 3 }
        );
    }
}
