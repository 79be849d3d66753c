//! # Graphwalk Core
//!
//! Breadth-first and depth-first traversal over small undirected graphs with
//! letter-labeled vertices, producing both the visitation order and a
//! per-node trace of the neighbors inspected at each step.
//!
//! ## Pipeline
//!
//! - **Labels**: `n` vertices are labeled `A`, `B`, `C`, ... ([`LabelSet`])
//! - **Parsing**: free-form edge text becomes [`EdgeSpec`] pairs ([`parse_edges`])
//! - **Building**: edges populate an adjacency list or matrix ([`build_graph`])
//! - **Traversal**: [`bfs`] / [`dfs`] over any [`GraphTraversal`]
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::{TraversalQuery, VertexCount};
//!
//! let query = TraversalQuery::new(VertexCount::Number(4), "A B\nA C\nB D")
//!     .with_representation("list")
//!     .with_strategy("dfs");
//!
//! let traversal = query.run().unwrap();
//! let order: Vec<String> = traversal.order.iter().map(ToString::to_string).collect();
//! assert_eq!(order, ["A", "B", "D", "C"]);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod error;
pub mod graph;
pub mod query;

pub use error::{Error, Result};
pub use graph::{
    bfs, build_graph, dfs, parse_edges, traverse, AdjacencyList, AdjacencyMatrix, EdgeSpec, Graph,
    GraphTraversal, Label, LabelSet, ParsedEdges, Representation, Strategy, TraceStep, Traversal,
    MAX_LABELS,
};
pub use query::{TraversalQuery, VertexCount};
