#![allow(clippy::doc_markdown)]
//! Graphwalk Server - REST API over `graphwalk-core`.
//!
//! One traversal per request: the server holds no graph state. See
//! [`build_router`] for the route table.

pub mod config;
pub mod handlers;
pub mod types;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use config::ServerConfig;
pub use handlers::{health_check, openapi_json, traverse};
pub use types::{ErrorResponse, HealthResponse, TraceStepResponse, TraverseRequest, TraverseResponse};

/// OpenAPI documentation for the Graphwalk REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Graphwalk API",
        description = "Step-by-step BFS/DFS traces over small undirected graphs"
    ),
    paths(
        handlers::health::health_check,
        handlers::traversal::traverse
    ),
    components(schemas(
        TraverseRequest,
        TraverseResponse,
        TraceStepResponse,
        HealthResponse,
        ErrorResponse
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "graph", description = "Graph traversal")
    )
)]
pub struct ApiDoc;

/// Build the application router with all routes and layers.
///
/// - `GET /health`
/// - `POST /traverse`
/// - `GET /api-docs/openapi.json` (and `/swagger-ui` with the `swagger-ui` feature)
pub fn build_router(config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/traverse", post(traverse))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    let router = Router::new().route("/health", get(health_check)).merge(api);

    #[cfg(not(feature = "swagger-ui"))]
    let router = router.route("/api-docs/openapi.json", get(openapi_json));

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
        .layer(build_cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Build CORS layer from configured origins.
///
/// No configured origins means permissive CORS.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        tracing::warn!("CORS: permissive (dev mode). Set GRAPHWALK_CORS_ORIGINS to restrict origins.");
        return CorsLayer::permissive();
    }

    let origin_list: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| o.trim().parse().ok())
        .collect();
    if origin_list.len() < origins.len() {
        tracing::warn!(
            configured = origins.len(),
            valid = origin_list.len(),
            "CORS: ignoring unparseable origin(s)"
        );
    }
    tracing::info!("CORS: restricted to {} origin(s)", origin_list.len());
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origin_list))
        .allow_methods(Any)
        .allow_headers(Any)
}
