//! Graph traversal algorithms (BFS/DFS) with per-node neighbor traces.
//!
//! Provides generic traversal via the [`GraphTraversal`] trait, so the
//! adjacency list and the adjacency matrix share one BFS and one DFS.

use serde::Serialize;
use std::collections::VecDeque;

use crate::error::Result;

use super::adjacency_list::AdjacencyList;
use super::adjacency_matrix::AdjacencyMatrix;
use super::builder::Graph;
use super::labels::{Label, LabelSet};

/// Trait for graph traversal; any representation can implement this.
pub trait GraphTraversal {
    /// Returns the labels of the graph.
    fn labels(&self) -> &LabelSet;

    /// Returns the neighbors of `label`, in any order.
    ///
    /// The engine sorts them before recording or following them.
    fn neighbors_of(&self, label: Label) -> Vec<Label>;
}

impl GraphTraversal for AdjacencyList {
    fn labels(&self) -> &LabelSet {
        self.labels()
    }

    fn neighbors_of(&self, label: Label) -> Vec<Label> {
        self.neighbors(label).to_vec()
    }
}

impl GraphTraversal for AdjacencyMatrix {
    fn labels(&self) -> &LabelSet {
        self.labels()
    }

    fn neighbors_of(&self, label: Label) -> Vec<Label> {
        self.row_neighbors(label)
    }
}

impl GraphTraversal for Graph {
    fn labels(&self) -> &LabelSet {
        self.labels()
    }

    fn neighbors_of(&self, label: Label) -> Vec<Label> {
        match self {
            Self::List(list) => list.neighbors_of(label),
            Self::Matrix(matrix) => matrix.neighbors_of(label),
        }
    }
}

/// Traversal algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Depth-first search (pre-order).
    Dfs,
}

impl Strategy {
    /// Maps a wire selector: `"bfs"` selects BFS, anything else DFS.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        if selector == "bfs" {
            Self::Bfs
        } else {
            Self::Dfs
        }
    }
}

/// The neighbors inspected when a node was visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    /// The node being visited.
    pub node: Label,
    /// Its neighbors, ascending by label.
    pub neighbors: Vec<Label>,
}

/// Result of one traversal.
///
/// `steps[i].node == order[i]` for every `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Traversal {
    /// Labels in visitation order.
    pub order: Vec<Label>,
    /// One trace record per visited label.
    pub steps: Vec<TraceStep>,
}

impl Traversal {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            steps: Vec::with_capacity(capacity),
        }
    }

    fn record(&mut self, node: Label, neighbors: Vec<Label>) {
        self.order.push(node);
        self.steps.push(TraceStep { node, neighbors });
    }
}

/// Runs `strategy` from `start`.
///
/// # Errors
///
/// Returns `Error::UnknownLabel` if `start` is not a label of `graph`.
pub fn traverse<G: GraphTraversal + ?Sized>(
    graph: &G,
    start: &str,
    strategy: Strategy,
) -> Result<Traversal> {
    match strategy {
        Strategy::Bfs => bfs(graph, start),
        Strategy::Dfs => dfs(graph, start),
    }
}

/// BFS traversal from `start`.
///
/// Vertices are marked visited when enqueued, so each is enqueued at most
/// once. Within a layer, vertices are dequeued in ascending label order of
/// their discovery from the previous layer.
///
/// # Errors
///
/// Returns `Error::UnknownLabel` if `start` is not a label of `graph`.
pub fn bfs<G: GraphTraversal + ?Sized>(graph: &G, start: &str) -> Result<Traversal> {
    let labels = graph.labels();
    let start = labels.resolve(start)?;

    let mut visited = vec![false; labels.len()];
    let mut queue = VecDeque::new();
    let mut traversal = Traversal::with_capacity(labels.len());

    visited[start.index()] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let neighbors = sorted_neighbors(graph, current);
        for &neighbor in &neighbors {
            if mark_visited(&mut visited, neighbor) {
                queue.push_back(neighbor);
            }
        }
        traversal.record(current, neighbors);
    }

    Ok(traversal)
}

/// DFS traversal from `start`.
///
/// Iterative pre-order with an explicit stack of neighbor cursors; the
/// visitation order is that of the recursive formulation that enters each
/// unvisited neighbor in ascending label order.
///
/// # Errors
///
/// Returns `Error::UnknownLabel` if `start` is not a label of `graph`.
pub fn dfs<G: GraphTraversal + ?Sized>(graph: &G, start: &str) -> Result<Traversal> {
    let labels = graph.labels();
    let start = labels.resolve(start)?;

    let mut visited = vec![false; labels.len()];
    let mut traversal = Traversal::with_capacity(labels.len());
    let mut stack = Vec::with_capacity(labels.len());

    visited[start.index()] = true;
    stack.push(enter(graph, start, &mut traversal));

    while let Some(frame) = stack.last_mut() {
        match frame.next_unvisited(&visited) {
            Some(next) => {
                visited[next.index()] = true;
                stack.push(enter(graph, next, &mut traversal));
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(traversal)
}

/// A vertex on the DFS stack and how far through its neighbors we are.
struct Frame {
    neighbors: Vec<Label>,
    cursor: usize,
}

impl Frame {
    fn next_unvisited(&mut self, visited: &[bool]) -> Option<Label> {
        while let Some(&label) = self.neighbors.get(self.cursor) {
            self.cursor += 1;
            // Labels outside the graph count as visited.
            if !visited.get(label.index()).copied().unwrap_or(true) {
                return Some(label);
            }
        }
        None
    }
}

fn enter<G: GraphTraversal + ?Sized>(graph: &G, node: Label, traversal: &mut Traversal) -> Frame {
    let neighbors = sorted_neighbors(graph, node);
    traversal.record(node, neighbors.clone());
    Frame {
        neighbors,
        cursor: 0,
    }
}

fn sorted_neighbors<G: GraphTraversal + ?Sized>(graph: &G, node: Label) -> Vec<Label> {
    let mut neighbors = graph.neighbors_of(node);
    neighbors.sort_unstable();
    neighbors
}

/// Marks `label` visited; returns true if it was not visited before.
fn mark_visited(visited: &mut [bool], label: Label) -> bool {
    match visited.get_mut(label.index()) {
        Some(seen) if !*seen => {
            *seen = true;
            true
        }
        _ => false,
    }
}
