//! HTTP handlers for Graphwalk REST API.
//!
//! - `health`: Health check and OpenAPI document
//! - `traversal`: BFS/DFS traversal
//! - `helpers`: Error responses shared by handlers

pub mod health;
pub mod helpers;
pub mod traversal;

pub use health::{health_check, openapi_json};
pub use traversal::traverse;
