use crate::error::ServerResult;
use crate::state::ServerState;
use analyzer::EmbedNodesResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use semantic::CandidateNode;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/embed_nodes`
#[derive(Debug, Deserialize)]
pub struct EmbedNodesRequest {
    #[serde(default)]
    pub nodes: Vec<CandidateNode>,
}

/// Embed node descriptions in one batch and return the nodes with `vec` attached
pub async fn embed_nodes(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<EmbedNodesRequest>, JsonRejection>,
) -> ServerResult<Json<EmbedNodesResult>> {
    let Json(request) = payload?;
    let result = state.analyzer.embed_nodes(&request.nodes).await?;
    Ok(Json(result))
}
