//! Undirected, letter-labeled graphs and their traversal.
//!
//! Provides the label allocator, the edge-text parser, the two graph
//! representations and the BFS/DFS engine written once against
//! [`GraphTraversal`].
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{build_graph, parse_edges, Representation};
//! use graphwalk_core::graph::traversal::bfs;
//!
//! let parsed = parse_edges("A B\nA C\nB D");
//! let graph = build_graph(4, Representation::Matrix, &parsed.edges).unwrap();
//!
//! let traversal = bfs(&graph, "A").unwrap();
//! assert_eq!(traversal.order.len(), 4);
//! assert_eq!(traversal.steps[0].neighbors.len(), 2);
//! ```

mod adjacency_list;
mod adjacency_matrix;
mod builder;
mod labels;
mod parser;
pub mod traversal;


pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use builder::{build_graph, Graph, Representation};
pub use labels::{Label, LabelSet, MAX_LABELS};
pub use parser::{parse_edges, EdgeSpec, ParsedEdges};
pub use traversal::{bfs, dfs, traverse, GraphTraversal, Strategy, TraceStep, Traversal};
