//! Traversal requests: one traversal from raw, loosely-typed input.
//!
//! Mirrors the transport payload field for field. Selectors fall back to
//! defaults instead of failing: missing or unrecognized `representation`
//! selects the matrix, missing or unrecognized `type` selects DFS unless it
//! is exactly `"bfs"`, and a missing `start` defaults to `"A"`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{build_graph, parse_edges, traverse, Representation, Strategy, Traversal};

/// Default start vertex.
const DEFAULT_START: &str = "A";

/// A vertex count given as a JSON integer or a numeral string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexCount {
    /// Integer form, e.g. `4`.
    Number(i64),
    /// String form, e.g. `"4"`.
    Text(String),
}

impl VertexCount {
    /// Resolves to a non-negative vertex count.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedInput` for negative numbers and for strings
    /// that are not a non-negative integer (surrounding whitespace allowed).
    pub fn resolve(&self) -> Result<usize> {
        match self {
            Self::Number(n) => usize::try_from(*n).map_err(|_| {
                Error::MalformedInput(format!("vertex count must be non-negative, got {n}"))
            }),
            Self::Text(text) => text.trim().parse::<usize>().map_err(|_| {
                Error::MalformedInput(format!(
                    "vertex count must be a non-negative integer, got '{text}'"
                ))
            }),
        }
    }
}

impl From<usize> for VertexCount {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Text(n.to_string()), Self::Number)
    }
}

/// One traversal request.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::TraversalQuery;
///
/// let query: TraversalQuery = serde_json::from_str(
///     r#"{"vertices": "3", "representation": "matrix", "edges": "A B", "start": "c"}"#,
/// )
/// .unwrap();
///
/// let traversal = query.run().unwrap();
/// assert_eq!(traversal.order.len(), 1);
/// assert!(traversal.steps[0].neighbors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalQuery {
    /// Number of vertices.
    pub vertices: VertexCount,
    /// `"list"` or anything else (matrix).
    #[serde(default)]
    pub representation: Option<String>,
    /// Newline-separated edge lines.
    #[serde(default)]
    pub edges: Option<String>,
    /// Start label, case-insensitive.
    #[serde(default)]
    pub start: Option<String>,
    /// `"bfs"` or anything else (DFS).
    #[serde(default, rename = "type")]
    pub strategy: Option<String>,
}

impl TraversalQuery {
    /// Creates a query with the given vertex count and edge text.
    #[must_use]
    pub fn new(vertices: VertexCount, edges: &str) -> Self {
        Self {
            vertices,
            representation: None,
            edges: Some(edges.to_string()),
            start: None,
            strategy: None,
        }
    }

    /// Sets the representation selector (builder pattern).
    #[must_use]
    pub fn with_representation(mut self, representation: &str) -> Self {
        self.representation = Some(representation.to_string());
        self
    }

    /// Sets the start label (builder pattern).
    #[must_use]
    pub fn with_start(mut self, start: &str) -> Self {
        self.start = Some(start.to_string());
        self
    }

    /// Sets the strategy selector (builder pattern).
    #[must_use]
    pub fn with_strategy(mut self, strategy: &str) -> Self {
        self.strategy = Some(strategy.to_string());
        self
    }

    /// Returns the selected representation.
    #[must_use]
    pub fn representation(&self) -> Representation {
        self.representation
            .as_deref()
            .map_or(Representation::Matrix, Representation::from_selector)
    }

    /// Returns the selected strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
            .as_deref()
            .map_or(Strategy::Bfs, Strategy::from_selector)
    }

    /// Returns the normalized start label token.
    #[must_use]
    pub fn start_label(&self) -> String {
        self.start
            .as_deref()
            .unwrap_or(DEFAULT_START)
            .trim()
            .to_uppercase()
    }

    /// Runs the traversal: allocate labels, parse edges, build, traverse.
    ///
    /// Either returns a complete order/trace pair or fails without a
    /// partial result.
    ///
    /// # Errors
    ///
    /// - `Error::MalformedInput` if the vertex count is not a non-negative integer
    /// - `Error::OutOfRange` if the vertex count exceeds the label alphabet
    /// - `Error::UnknownLabel` if an edge endpoint or the start is not allocated
    pub fn run(&self) -> Result<Traversal> {
        let vertices = self.vertices.resolve()?;
        let parsed = parse_edges(self.edges.as_deref().unwrap_or_default());
        let representation = self.representation();
        let strategy = self.strategy();

        let graph = build_graph(vertices, representation, &parsed.edges)?;
        let traversal = traverse(&graph, &self.start_label(), strategy)?;

        tracing::debug!(
            vertices,
            %representation,
            ?strategy,
            skipped_lines = parsed.skipped.len(),
            visited = traversal.order.len(),
            "Traversal completed"
        );
        Ok(traversal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count_resolve() {
        assert_eq!(VertexCount::Number(4).resolve(), Ok(4));
        assert_eq!(VertexCount::Text("4".into()).resolve(), Ok(4));
        assert_eq!(VertexCount::Text(" 7 ".into()).resolve(), Ok(7));
        assert_eq!(VertexCount::Number(0).resolve(), Ok(0));
    }

    #[test]
    fn test_vertex_count_malformed() {
        for bad in [
            VertexCount::Number(-1),
            VertexCount::Text("four".into()),
            VertexCount::Text(String::new()),
            VertexCount::Text("-3".into()),
            VertexCount::Text("2.5".into()),
        ] {
            let err = bad.resolve().unwrap_err();
            assert!(matches!(err, Error::MalformedInput(_)), "{bad:?}");
        }
    }

    #[test]
    fn test_vertex_count_deserialize_both_forms() {
        let n: VertexCount = serde_json::from_str("5").unwrap();
        assert_eq!(n, VertexCount::Number(5));
        let s: VertexCount = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(s, VertexCount::Text("5".into()));
    }

    #[test]
    fn test_query_defaults() {
        let query: TraversalQuery = serde_json::from_str(r#"{"vertices": 2}"#).unwrap();
        assert_eq!(query.representation(), Representation::Matrix);
        assert_eq!(query.strategy(), Strategy::Bfs);
        assert_eq!(query.start_label(), "A");
        assert!(query.edges.is_none());
    }

    #[test]
    fn test_query_selectors() {
        let query = TraversalQuery::new(VertexCount::Number(2), "")
            .with_representation("matrix")
            .with_strategy("dfs")
            .with_start(" b ");
        assert_eq!(query.representation(), Representation::Matrix);
        assert_eq!(query.strategy(), Strategy::Dfs);
        assert_eq!(query.start_label(), "B");

        // Selectors are exact: only "list" and "bfs" pick those modes.
        let query = query.with_representation("LIST").with_strategy("BFS");
        assert_eq!(query.representation(), Representation::Matrix);
        assert_eq!(query.strategy(), Strategy::Dfs);
    }

    #[test]
    fn test_query_type_field_renamed() {
        let query: TraversalQuery =
            serde_json::from_str(r#"{"vertices": 1, "type": "dfs"}"#).unwrap();
        assert_eq!(query.strategy(), Strategy::Dfs);
    }

    #[test]
    fn test_query_run_out_of_range() {
        let err = TraversalQuery::new(VertexCount::Number(27), "")
            .run()
            .unwrap_err();
        assert_eq!(
            err,
            Error::OutOfRange {
                requested: 27,
                max: 26
            }
        );
    }

    #[test]
    fn test_query_run_unknown_edge_label() {
        let err = TraversalQuery::new(VertexCount::Number(2), "A C")
            .with_representation("list")
            .run()
            .unwrap_err();
        assert_eq!(err, Error::UnknownLabel("C".into()));
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(VertexCount::from(3), VertexCount::Number(3));
    }
}
