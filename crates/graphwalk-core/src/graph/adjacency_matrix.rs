//! Adjacency-matrix representation.

use crate::error::{Error, Result};

use super::labels::{Label, LabelSet};

/// An `n × n` grid of 0/1 cells, stored row-major.
///
/// Symmetric by construction: every write sets both `[i][j]` and `[j][i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    labels: LabelSet,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Creates a zero-filled matrix sized to `labels`.
    #[must_use]
    pub fn new(labels: LabelSet) -> Self {
        let n = labels.len();
        Self {
            labels,
            cells: vec![0; n * n],
        }
    }

    /// Returns the labels of this graph.
    #[must_use]
    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    /// Returns the matrix dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.labels.len()
    }

    /// Sets both cells for the undirected edge `a-b`. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLabel` if either endpoint is not in this graph.
    pub fn add_edge(&mut self, a: Label, b: Label) -> Result<()> {
        let i = self.checked_index(a)?;
        let j = self.checked_index(b)?;
        let n = self.dimension();
        self.cells[i * n + j] = 1;
        self.cells[j * n + i] = 1;
        Ok(())
    }

    /// Returns row `index`, or `None` if out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        let n = self.dimension();
        (index < n).then(|| &self.cells[index * n..(index + 1) * n])
    }

    /// Returns the cell value at `[i][j]`, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, i: usize, j: usize) -> Option<u8> {
        self.row(i).and_then(|row| row.get(j).copied())
    }

    /// Returns true if `a` and `b` are adjacent.
    #[must_use]
    pub fn is_adjacent(&self, a: Label, b: Label) -> bool {
        match (self.labels.index_of(a), self.labels.index_of(b)) {
            (Some(i), Some(j)) => self.cell(i, j) == Some(1),
            _ => false,
        }
    }

    /// Returns the labels whose cell in `label`'s row is set, in index order.
    #[must_use]
    pub fn row_neighbors(&self, label: Label) -> Vec<Label> {
        self.labels
            .index_of(label)
            .and_then(|i| self.row(i))
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &cell)| cell == 1)
                    .filter_map(|(j, _)| self.labels.label_at(j))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn checked_index(&self, label: Label) -> Result<usize> {
        self.labels
            .index_of(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }
}
