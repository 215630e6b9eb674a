use async_trait::async_trait;
use fxhash::hash64;
use serde_json::{json, Value};

use crate::normalize::l2_normalize_in_place;
use crate::provider::{EmbeddingProvider, ProviderInfo};
use crate::types::EmbeddingVector;
use crate::{SemanticConfig, SemanticError};

/// Offline provider used in `"fast"` mode and tests.
///
/// Vectors are sinusoids seeded by a hash of the text, L2-normalized, so the
/// same text always maps to the same vector. Single requests come back flat
/// (`[d]`), batches as `[[d], ...]`, mirroring the HF feature-extraction shapes.
#[derive(Debug, Clone)]
pub struct StubProvider {
    dims: usize,
    model: String,
}

impl StubProvider {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            model: "stub-sinusoid".into(),
        }
    }

    pub fn from_config(cfg: &SemanticConfig) -> Self {
        Self {
            dims: cfg.stub_dims,
            model: cfg.model_id.clone(),
        }
    }

    /// The vector this provider produces for `text`.
    pub fn vector_for(&self, text: &str) -> EmbeddingVector {
        let h = hash64(text.as_bytes());
        let mut v: EmbeddingVector = (0..self.dims)
            .map(|idx| ((h >> (idx % 32)) as f64 * 0.0001).sin())
            .collect();
        l2_normalize_in_place(&mut v);
        v
    }
}

#[async_trait]
impl EmbeddingProvider for StubProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            provider: "stub".into(),
            model: self.model.clone(),
        }
    }

    async fn embed_one(&self, text: &str) -> Result<Value, SemanticError> {
        Ok(json!(self.vector_for(text)))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Value, SemanticError> {
        let vectors: Vec<EmbeddingVector> = texts.iter().map(|t| self.vector_for(t)).collect();
        Ok(json!(vectors))
    }
}
