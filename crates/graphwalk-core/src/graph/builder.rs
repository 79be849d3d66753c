//! Graph builder: vertex count + parsed edges → concrete representation.

use std::fmt;

use crate::error::Result;

use super::adjacency_list::AdjacencyList;
use super::adjacency_matrix::AdjacencyMatrix;
use super::labels::{Label, LabelSet};
use super::parser::EdgeSpec;

/// Which graph representation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Representation {
    /// Adjacency list.
    List,
    /// Adjacency matrix.
    #[default]
    Matrix,
}

impl Representation {
    /// Maps a wire selector: `"list"` selects the list, anything else the matrix.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        if selector == "list" {
            Self::List
        } else {
            Self::Matrix
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => f.write_str("list"),
            Self::Matrix => f.write_str("matrix"),
        }
    }
}

/// A built graph in either representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Graph {
    /// Adjacency-list graph.
    List(AdjacencyList),
    /// Adjacency-matrix graph.
    Matrix(AdjacencyMatrix),
}

impl Graph {
    /// Returns the labels of this graph.
    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        match self {
            Self::List(list) => list.labels(),
            Self::Matrix(matrix) => matrix.labels(),
        }
    }

    /// Returns the representation of this graph.
    #[must_use]
    pub fn representation(&self) -> Representation {
        match self {
            Self::List(_) => Representation::List,
            Self::Matrix(_) => Representation::Matrix,
        }
    }

    /// Returns true if `a` and `b` are adjacent.
    #[must_use]
    pub fn has_edge(&self, a: Label, b: Label) -> bool {
        match self {
            Self::List(list) => list.is_adjacent(a, b),
            Self::Matrix(matrix) => matrix.is_adjacent(a, b),
        }
    }
}

/// Builds a graph of `vertices` vertices from parsed edges.
///
/// # Errors
///
/// - `Error::OutOfRange` if `vertices` exceeds the label alphabet
/// - `Error::UnknownLabel` on the first edge endpoint outside the allocated labels
pub fn build_graph(
    vertices: usize,
    representation: Representation,
    edges: &[EdgeSpec],
) -> Result<Graph> {
    let labels = LabelSet::allocate(vertices)?;

    let graph = match representation {
        Representation::List => {
            let mut list = AdjacencyList::new(labels);
            for edge in edges {
                let (a, b) = resolve_endpoints(list.labels(), edge)?;
                list.add_edge(a, b)?;
            }
            Graph::List(list)
        }
        Representation::Matrix => {
            let mut matrix = AdjacencyMatrix::new(labels);
            for edge in edges {
                let (a, b) = resolve_endpoints(matrix.labels(), edge)?;
                matrix.add_edge(a, b)?;
            }
            Graph::Matrix(matrix)
        }
    };

    tracing::debug!(
        vertices,
        edges = edges.len(),
        %representation,
        "Built graph"
    );
    Ok(graph)
}

fn resolve_endpoints(labels: &LabelSet, edge: &EdgeSpec) -> Result<(Label, Label)> {
    Ok((labels.resolve(&edge.a)?, labels.resolve(&edge.b)?))
}
