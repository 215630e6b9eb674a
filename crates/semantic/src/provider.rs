use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::SemanticError;

/// Identifies where embeddings come from; surfaced as `embedding_meta`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub provider: String,
    pub model: String,
}

/// Source of raw embedding payloads.
///
/// Implementations return the provider's JSON as-is; shape reconciliation is
/// the caller's job (see [`to_vector_1d`](crate::to_vector_1d)).
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    fn info(&self) -> ProviderInfo;

    /// Embeds a single text.
    async fn embed_one(&self, text: &str) -> Result<Value, SemanticError>;

    /// Embeds several texts in one request. The returned payload is expected
    /// to hold one element per input, in input order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Value, SemanticError>;
}
