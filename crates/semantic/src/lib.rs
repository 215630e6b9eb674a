//! Eureka Wave Semantic Layer
//!
//! This crate owns everything that touches embedding vectors. Embedding
//! providers are not consistent about what they send back: sometimes a flat
//! vector, sometimes one vector per token, sometimes a batch of one wrapping
//! either. We reconcile all of that into a single dense vector and rank
//! candidate nodes against it by cosine similarity.
//!
//! Pieces:
//!
//! - [`to_vector_1d`] - turn a raw provider payload into one vector (or `None`)
//! - [`cosine_similarity`] / [`best_match`] - nearest-node retrieval
//! - [`EmbeddingProvider`] - the async seam for fetching raw payloads
//! - [`HuggingFaceProvider`] - feature-extraction over the HF router, with retry
//! - [`StubProvider`] - deterministic vectors for offline runs and tests
//!
//! Everything except the providers is pure and synchronous.
//!
//! ## Quick example
//!
//! ```
//! use semantic::{best_match, to_vector_1d, CandidateNode};
//! use serde_json::json;
//!
//! // Per-token output gets mean-pooled.
//! let query = to_vector_1d(&json!([[1.0, 0.0], [0.0, 0.0]])).unwrap();
//! assert_eq!(query, vec![0.5, 0.0]);
//!
//! let nodes = vec![CandidateNode::new("a", "Alpha").with_vec(vec![1.0, 0.0])];
//! let hit = best_match(&query, &nodes).unwrap();
//! assert_eq!(hit.name, "Alpha");
//! ```
//!
//! ## API mode
//!
//! ```no_run
//! use semantic::{provider_from_config, SemanticConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let cfg = SemanticConfig {
//!         api_token: Some("hf_xxx".into()),
//!         ..Default::default()
//!     };
//!     let provider = provider_from_config(&cfg).unwrap();
//!     let raw = provider.embed_one("knowledge graph seo").await.unwrap();
//!     println!("{raw}");
//! }
//! ```
//!
//! Full example at `examples/embed_query.rs`.

pub mod config;
pub mod error;
pub mod retry;
pub mod types;

mod api;
mod normalize;
mod provider;
mod similarity;
mod stub;

use std::sync::Arc;

pub use crate::api::HuggingFaceProvider;
pub use crate::config::SemanticConfig;
pub use crate::error::SemanticError;
pub use crate::normalize::{l2_normalize_in_place, to_vector_1d};
pub use crate::provider::{EmbeddingProvider, ProviderInfo};
pub use crate::similarity::{best_match, cosine_similarity, NodeMatch, COSINE_EPSILON};
pub use crate::stub::StubProvider;
pub use crate::types::{CandidateNode, EmbeddingMeta, EmbeddingVector};

/// Builds the provider selected by `cfg.mode`.
///
/// `"fast"` returns the deterministic [`StubProvider`]; `"api"` (and anything
/// unrecognized) returns a [`HuggingFaceProvider`]. A missing token is not an
/// error here, it surfaces on the first request instead.
pub fn provider_from_config(
    cfg: &SemanticConfig,
) -> Result<Arc<dyn EmbeddingProvider>, SemanticError> {
    match cfg.mode.as_str() {
        "fast" => Ok(Arc::new(StubProvider::from_config(cfg))),
        "api" => Ok(Arc::new(HuggingFaceProvider::new(cfg)?)),
        other => {
            tracing::warn!(mode = %other, "unknown semantic mode, defaulting to api");
            Ok(Arc::new(HuggingFaceProvider::new(cfg)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_mode_builds_stub_provider() {
        let cfg = SemanticConfig {
            mode: "fast".into(),
            ..Default::default()
        };
        let provider = provider_from_config(&cfg).unwrap();
        assert_eq!(provider.info().provider, "stub");
    }

    #[test]
    fn api_mode_builds_huggingface_provider() {
        let cfg = SemanticConfig::default();
        let provider = provider_from_config(&cfg).unwrap();
        let info = provider.info();
        assert_eq!(info.provider, "huggingface");
        assert_eq!(info.model, "sentence-transformers/all-MiniLM-L6-v2");
    }

    #[test]
    fn unknown_mode_falls_back_to_api() {
        let cfg = SemanticConfig {
            mode: "onnx".into(),
            ..Default::default()
        };
        let provider = provider_from_config(&cfg).unwrap();
        assert_eq!(provider.info().provider, "huggingface");
    }
}
