use intent::{assign_cluster, classify, extract_entities};
use semantic::{best_match, to_vector_1d, CandidateNode, EmbeddingMeta, ProviderInfo};
use serde_json::Value;

use crate::error::AnalysisError;
use crate::types::{AnalysisResult, EXPLANATION, FOLLOW_UP_SUFFIXES};

/// Analyzes `query` given the provider's raw embedding `payload` for it.
///
/// Pure and synchronous: the embedding call has already happened. `nodes`, when
/// given, are ranked against the query vector; nodes without a usable vector
/// are ignored.
pub fn analyze_query(
    query: &str,
    nodes: Option<&[CandidateNode]>,
    payload: &Value,
    info: &ProviderInfo,
) -> Result<AnalysisResult, AnalysisError> {
    if query.is_empty() {
        return Err(AnalysisError::MissingInput("query"));
    }

    let query_vec = to_vector_1d(payload).ok_or_else(|| AnalysisError::UpstreamParse {
        raw: payload.clone(),
    })?;

    let intents = classify(query);
    let entities = extract_entities(query);
    let cluster = assign_cluster(&intents);
    let target = nodes.and_then(|nodes| best_match(&query_vec, nodes));

    Ok(AnalysisResult {
        intents,
        entities,
        cluster,
        next_queries: follow_up_queries(query),
        explanation: EXPLANATION.to_string(),
        target,
        embedding_meta: EmbeddingMeta {
            provider: info.provider.clone(),
            model: info.model.clone(),
            dims: query_vec.len(),
        },
    })
}

/// `"{query} examples"`, `"{query} best practices"`, `"{query} checklist"`.
pub fn follow_up_queries(query: &str) -> Vec<String> {
    FOLLOW_UP_SUFFIXES
        .iter()
        .map(|suffix| format!("{query}{suffix}"))
        .collect()
}
