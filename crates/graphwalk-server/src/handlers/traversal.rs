//! Traversal HTTP handler.
//!
//! A thin HTTP layer: request normalization, graph building and traversal
//! all happen in `graphwalk-core`.

use axum::{http::StatusCode, Json};
use graphwalk_core::TraversalQuery;

use crate::types::{ErrorResponse, TraverseRequest, TraverseResponse};

use super::helpers::{bad_request, internal_error};

/// Build a graph from the submitted edges and traverse it with BFS or DFS.
///
/// # Errors
///
/// Returns `400` with a machine code if the vertex count is malformed or out
/// of range, or if an edge endpoint or the start is not an allocated label.
#[utoipa::path(
    post,
    path = "/traverse",
    request_body = TraverseRequest,
    responses(
        (status = 200, description = "Traversal completed", body = TraverseResponse),
        (status = 400, description = "Invalid graph or start vertex", body = ErrorResponse),
        (status = 413, description = "Request body too large"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "graph"
)]
pub async fn traverse(
    Json(request): Json<TraverseRequest>,
) -> Result<Json<TraverseResponse>, (StatusCode, Json<ErrorResponse>)> {
    let query = TraversalQuery::from(request);

    let traversal = tokio::task::spawn_blocking(move || query.run())
        .await
        .map_err(|e| internal_error("Traversal", &e))?
        .map_err(|e| bad_request(&e))?;

    Ok(Json(TraverseResponse::from(traversal)))
}
