//! Request and response types for the Graphwalk REST API.

use graphwalk_core::{TraceStep, Traversal, TraversalQuery, VertexCount};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned on any failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code (`MALFORMED_INPUT`, `OUT_OF_RANGE`, `UNKNOWN_LABEL`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"`.
    pub status: String,
    /// Server version.
    pub version: String,
}

/// Traversal request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TraverseRequest {
    /// Vertex count, as an integer or a numeral string.
    #[schema(value_type = Object)]
    pub vertices: VertexCount,
    /// `"list"` for an adjacency list; anything else (or absent) for a matrix.
    #[serde(default)]
    pub representation: Option<String>,
    /// Newline-separated edges, `"<a> <b>"` per line.
    #[serde(default)]
    pub edges: Option<String>,
    /// Start label, case-insensitive. Defaults to `"A"`.
    #[serde(default)]
    pub start: Option<String>,
    /// `"bfs"` (default) or anything else for DFS.
    #[serde(default, rename = "type")]
    pub traversal_type: Option<String>,
}

impl From<TraverseRequest> for TraversalQuery {
    fn from(request: TraverseRequest) -> Self {
        Self {
            vertices: request.vertices,
            representation: request.representation,
            edges: request.edges,
            start: request.start,
            strategy: request.traversal_type,
        }
    }
}

/// Neighbors inspected at one traversal step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TraceStepResponse {
    /// Node visited at this step.
    pub node: String,
    /// Its neighbors, ascending.
    pub neighbors: Vec<String>,
}

/// Traversal response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TraverseResponse {
    /// Visitation order.
    pub order: Vec<String>,
    /// One step per entry of `order`.
    pub steps: Vec<TraceStepResponse>,
}

impl From<TraceStep> for TraceStepResponse {
    fn from(step: TraceStep) -> Self {
        Self {
            node: step.node.to_string(),
            neighbors: step.neighbors.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<Traversal> for TraverseResponse {
    fn from(traversal: Traversal) -> Self {
        Self {
            order: traversal.order.iter().map(ToString::to_string).collect(),
            steps: traversal.steps.into_iter().map(Into::into).collect(),
        }
    }
}
