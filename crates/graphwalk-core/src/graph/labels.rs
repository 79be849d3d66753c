//! Vertex labels and the label allocator.
//!
//! A graph of `n` vertices is labeled with the first `n` uppercase letters.
//! Labels map bijectively onto zero-based vertex indices.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{Error, Result};

/// Number of distinct labels available (`A` through `Z`).
pub const MAX_LABELS: usize = 26;

/// A single uppercase letter identifying a vertex.
///
/// Ordering follows the alphabet, which is also index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(u8);

impl Label {
    /// Returns the label at `index`, or `None` past `Z`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= MAX_LABELS {
            return None;
        }
        u8::try_from(index).ok().map(|offset| Self(b'A' + offset))
    }

    /// Returns the zero-based vertex index of this label.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - b'A')
    }

    /// Returns the label as a `char`.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.0)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.as_char().encode_utf8(&mut buf))
    }
}

/// The ordered labels of one graph, with index lookup in both directions.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::LabelSet;
///
/// let labels = LabelSet::allocate(3).unwrap();
/// let names: Vec<String> = labels.labels().iter().map(ToString::to_string).collect();
/// assert_eq!(names, ["A", "B", "C"]);
///
/// let c = labels.resolve("C").unwrap();
/// assert_eq!(labels.index_of(c), Some(2));
/// assert!(labels.resolve("D").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    /// Allocates labels for `n` vertices.
    ///
    /// # Errors
    ///
    /// Returns `Error::OutOfRange` if `n` exceeds [`MAX_LABELS`].
    pub fn allocate(n: usize) -> Result<Self> {
        if n > MAX_LABELS {
            return Err(Error::OutOfRange {
                requested: n,
                max: MAX_LABELS,
            });
        }
        Ok(Self {
            labels: (0..n).filter_map(Label::from_index).collect(),
        })
    }

    /// Returns all labels in index order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the label at `index`, if allocated.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<Label> {
        self.labels.get(index).copied()
    }

    /// Returns the index of `label`, if allocated.
    #[must_use]
    pub fn index_of(&self, label: Label) -> Option<usize> {
        let index = label.index();
        (index < self.labels.len()).then_some(index)
    }

    /// Returns true if `label` belongs to this set.
    #[must_use]
    pub fn contains(&self, label: Label) -> bool {
        self.index_of(label).is_some()
    }

    /// Resolves a one-letter uppercase token to an allocated label.
    ///
    /// Matching is exact: callers normalize case before resolving.
    ///
    /// # Errors
    ///
    /// Returns `Error::UnknownLabel` if the token is not an allocated label.
    pub fn resolve(&self, token: &str) -> Result<Label> {
        let mut chars = token.chars();
        let label = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_uppercase() => u8::try_from(c).ok().map(Label),
            _ => None,
        };
        label
            .filter(|label| self.contains(*label))
            .ok_or_else(|| Error::UnknownLabel(token.to_string()))
    }
}
