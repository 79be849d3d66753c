//! Edge-text parser.
//!
//! Turns free-form multi-line text into endpoint pairs. Tolerant by
//! construction: lines with fewer than two tokens are dropped, never
//! reported as errors.

/// One parsed edge line: the first two tokens, uppercased.
///
/// Endpoints are not yet resolved against a [`super::LabelSet`]; that
/// happens in the graph builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    /// First endpoint token.
    pub a: String,
    /// Second endpoint token.
    pub b: String,
}

impl EdgeSpec {
    /// Creates an edge spec, uppercasing both endpoints.
    #[must_use]
    pub fn new(a: &str, b: &str) -> Self {
        Self {
            a: a.to_uppercase(),
            b: b.to_uppercase(),
        }
    }
}

/// Output of [`parse_edges`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEdges {
    /// Edges in input line order, duplicates kept.
    pub edges: Vec<EdgeSpec>,
    /// 1-based line numbers of non-blank lines skipped for having fewer than two tokens.
    pub skipped: Vec<usize>,
}

/// Parses newline-separated edge descriptions (`"<a> <b> [ignored...]"`).
///
/// Blank lines are ignored, tokens beyond the second are ignored, and lines
/// with a single token are skipped.
#[must_use]
pub fn parse_edges(text: &str) -> ParsedEdges {
    let mut parsed = ParsedEdges::default();

    for (line_no, line) in text.split('\n').enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(a), Some(b)) => parsed.edges.push(EdgeSpec::new(a, b)),
            _ => {
                tracing::debug!(
                    line = line_no + 1,
                    content = line,
                    "Skipping edge line with fewer than two tokens"
                );
                parsed.skipped.push(line_no + 1);
            }
        }
    }

    parsed
}
