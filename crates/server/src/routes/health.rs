use crate::state::{ServerMetadata, ServerState};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

fn uptime_seconds() -> u64 {
    SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint (liveness)
/// Returns 200 if server is running
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let info = state.analyzer.provider_info();

    Json(json!({
        "status": "healthy",
        "service": "wave-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime_seconds(),
        "mode": state.config.semantic.mode,
        "provider": info.provider,
        "model": info.model,
    }))
}

/// Version, uptime and embedding backend
pub async fn server_metadata(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let info = state.analyzer.provider_info();

    Json(ServerMetadata {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime_seconds(),
        provider: info.provider,
        model: info.model,
    })
}
