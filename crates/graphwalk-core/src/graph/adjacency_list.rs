//! Adjacency-list representation.

use crate::error::{Error, Result};

use super::labels::{Label, LabelSet};

/// Per-vertex neighbor sequences in first-discovery order.
///
/// Each direction of an undirected edge is inserted with its own duplicate
/// check, so no vertex lists the same neighbor twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    labels: LabelSet,
    /// Neighbors indexed by vertex index.
    neighbors: Vec<Vec<Label>>,
}

impl AdjacencyList {
    /// Creates a list with an empty neighbor sequence for every label.
    #[must_use]
    pub fn new(labels: LabelSet) -> Self {
        let neighbors = vec![Vec::new(); labels.len()];
        Self { labels, neighbors }
    }

    /// Returns the labels of this graph.
    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Adds the undirected edge `a-b`.
    ///
    /// Repeating an edge, in either endpoint order, leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLabel` if either endpoint is not in this graph.
    pub fn add_edge(&mut self, a: Label, b: Label) -> Result<()> {
        let i = self.checked_index(a)?;
        let j = self.checked_index(b)?;
        Self::push_unique(&mut self.neighbors[i], b);
        Self::push_unique(&mut self.neighbors[j], a);
        Ok(())
    }

    /// Returns the stored neighbors of `label` in insertion order.
    ///
    /// Labels outside the graph have no neighbors.
    #[must_use]
    pub fn neighbors(&self, label: Label) -> &[Label] {
        self.labels
            .index_of(label)
            .and_then(|i| self.neighbors.get(i))
            .map_or(&[][..], Vec::as_slice)
    }

    /// Returns true if `a` and `b` are adjacent.
    #[must_use]
    pub fn is_adjacent(&self, a: Label, b: Label) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// Returns the number of distinct undirected edges (self-loops count once).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let (loops, links) = self
            .labels
            .labels()
            .iter()
            .flat_map(|&a| self.neighbors(a).iter().map(move |&b| (a, b)))
            .fold((0, 0), |(loops, links), (a, b)| {
                if a == b {
                    (loops + 1, links)
                } else {
                    (loops, links + 1)
                }
            });
        loops + links / 2
    }

    fn checked_index(&self, label: Label) -> Result<usize> {
        self.labels
            .index_of(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    fn push_unique(neighbors: &mut Vec<Label>, label: Label) {
        if !neighbors.contains(&label) {
            neighbors.push(label);
        }
    }
}
