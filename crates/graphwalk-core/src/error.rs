//! Error types for graphwalk-core.

use thiserror::Error;

/// Errors raised while building or traversing a graph.
///
/// Malformed edge *lines* are never errors; they are skipped by the parser
/// (see [`crate::graph::ParsedEdges::skipped`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Vertex count is not a non-negative integer.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Vertex count exceeds the label alphabet.
    #[error("Vertex count {requested} out of range (maximum {max})")]
    OutOfRange {
        /// Number of vertices requested.
        requested: usize,
        /// Largest supported vertex count.
        max: usize,
    },

    /// An edge endpoint or the start vertex is not an allocated label.
    #[error("Unknown label '{0}'")]
    UnknownLabel(String),
}

impl Error {
    /// Stable machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "MALFORMED_INPUT",
            Self::OutOfRange { .. } => "OUT_OF_RANGE",
            Self::UnknownLabel(_) => "UNKNOWN_LABEL",
        }
    }
}

/// Result type alias for graphwalk operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownLabel("Z".to_string());
        assert_eq!(err.to_string(), "Unknown label 'Z'");

        let err = Error::OutOfRange {
            requested: 30,
            max: 26,
        };
        assert_eq!(
            err.to_string(),
            "Vertex count 30 out of range (maximum 26)"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::MalformedInput("x".into()).code(),
            "MALFORMED_INPUT"
        );
        assert_eq!(
            Error::OutOfRange {
                requested: 27,
                max: 26
            }
            .code(),
            "OUT_OF_RANGE"
        );
        assert_eq!(Error::UnknownLabel("Q".into()).code(), "UNKNOWN_LABEL");
    }
}
