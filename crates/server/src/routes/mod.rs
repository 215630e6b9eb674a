//! API route handlers
//!
//! - `health`: liveness and server metadata
//! - `analyze`: query analysis with optional target selection
//! - `embed`: batch node embedding

pub mod analyze;
pub mod embed;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// # Response
///
/// ```json
/// {
///   "name": "Eureka Wave Server",
///   "version": "0.1.0",
///   "endpoints": ["..."]
/// }
/// ```
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Eureka Wave Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "POST /api/analyze",
            "POST /api/embed_nodes",
            "GET /api/metadata",
            "GET /health"
        ]
    })))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}

/// 405 for known paths hit with the wrong method
pub async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}
