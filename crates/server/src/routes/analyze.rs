use crate::error::ServerResult;
use crate::state::ServerState;
use analyzer::AnalysisResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use semantic::CandidateNode;
use serde::Deserialize;
use std::sync::Arc;

/// Body of `POST /api/analyze`
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Free-text query; absent and empty are both rejected.
    #[serde(default)]
    pub query: String,

    /// Candidates to pick a target from. Nodes without `vec` are skipped.
    #[serde(default)]
    pub nodes: Option<Vec<CandidateNode>>,
}

/// Analyze a single query
pub async fn analyze_query(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ServerResult<Json<AnalysisResult>> {
    let Json(request) = payload?;

    let result = state
        .analyzer
        .analyze(&request.query, request.nodes.as_deref())
        .await?;

    Ok(Json(result))
}
