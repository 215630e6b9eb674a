use std::sync::Arc;
use std::time::Instant;

use semantic::{CandidateNode, EmbeddingProvider, ProviderInfo};
use tracing::{info, warn, Instrument, Level};

use crate::analyze::analyze_query;
use crate::batch::{embed_nodes, node_texts};
use crate::error::AnalysisError;
use crate::types::{AnalysisResult, EmbedNodesResult};

/// Runs the embedding call and the pure analysis steps behind one entry point.
///
/// The provider is injected so callers choose between the HTTP provider and
/// the offline stub (or their own implementation).
#[derive(Clone)]
pub struct QueryAnalyzer {
    provider: Arc<dyn EmbeddingProvider>,
}

impl QueryAnalyzer {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_info(&self) -> ProviderInfo {
        self.provider.info()
    }

    /// Embeds `query` and analyzes it, optionally picking a target among `nodes`.
    ///
    /// An empty query is rejected before any request is made.
    pub async fn analyze(
        &self,
        query: &str,
        nodes: Option<&[CandidateNode]>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let start = Instant::now();
        if query.is_empty() {
            warn!(error = "missing query", "analyze_failure");
            return Err(AnalysisError::MissingInput("query"));
        }

        let span = tracing::span!(
            Level::INFO,
            "analyzer.analyze",
            query_len = query.len(),
            nodes = nodes.map_or(0, <[CandidateNode]>::len)
        );

        async {
            let outcome = match self.provider.embed_one(query).await {
                Ok(payload) => analyze_query(query, nodes, &payload, &self.provider.info()),
                Err(err) => Err(err.into()),
            };
            let elapsed_micros = start.elapsed().as_micros();
            match &outcome {
                Ok(result) => info!(
                    cluster = %result.cluster,
                    dominant_intent = %result.intents.dominant(),
                    dims = result.embedding_meta.dims,
                    has_target = result.target.is_some(),
                    elapsed_micros,
                    "analyze_success"
                ),
                Err(err) => warn!(error = %err, elapsed_micros, "analyze_failure"),
            }
            outcome
        }
        .instrument(span)
        .await
    }

    /// Embeds every node's description in one batch call and attaches vectors.
    pub async fn embed_nodes(
        &self,
        nodes: &[CandidateNode],
    ) -> Result<EmbedNodesResult, AnalysisError> {
        let start = Instant::now();
        if nodes.is_empty() {
            warn!(error = "missing nodes", "embed_nodes_failure");
            return Err(AnalysisError::MissingInput("nodes"));
        }

        let span = tracing::span!(Level::INFO, "analyzer.embed_nodes", nodes = nodes.len());

        async {
            let texts = node_texts(nodes);
            let outcome = match self.provider.embed_batch(&texts).await {
                Ok(payload) => embed_nodes(nodes, &payload, &self.provider.info()),
                Err(err) => Err(err.into()),
            };
            let elapsed_micros = start.elapsed().as_micros();
            match &outcome {
                Ok(result) => info!(dims = result.dims, elapsed_micros, "embed_nodes_success"),
                Err(err) => warn!(error = %err, elapsed_micros, "embed_nodes_failure"),
            }
            outcome
        }
        .instrument(span)
        .await
    }
}
