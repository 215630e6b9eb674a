//! # Eureka Wave Analyzer (`analyzer`)
//!
//! Glue between the embedding layer ([`semantic`]) and the rule-based query
//! heuristics ([`intent`]).
//!
//! Two levels of API:
//!
//! - pure functions, [`analyze_query`] and [`embed_nodes`], which take the raw
//!   provider payload as an argument and never do I/O;
//! - [`QueryAnalyzer`], which owns an [`EmbeddingProvider`](semantic::EmbeddingProvider),
//!   fetches the payload, and logs each call under an `analyzer.*` span.
//!
//! ```
//! use analyzer::analyze_query;
//! use intent::ClusterLabel;
//! use semantic::ProviderInfo;
//! use serde_json::json;
//!
//! let info = ProviderInfo { provider: "stub".into(), model: "demo".into() };
//! let result = analyze_query("buy seo audit", None, &json!([0.3, 0.4]), &info).unwrap();
//! assert_eq!(result.cluster, ClusterLabel::Conversion);
//! assert_eq!(result.embedding_meta.dims, 2);
//! ```

mod analyze;
mod batch;
mod error;
mod orchestrator;
mod types;

pub use crate::analyze::{analyze_query, follow_up_queries};
pub use crate::batch::{embed_nodes, node_texts};
pub use crate::error::AnalysisError;
pub use crate::orchestrator::QueryAnalyzer;
pub use crate::types::{
    AnalysisResult, EmbedNodesResult, EmbeddedNode, EXPLANATION, FOLLOW_UP_SUFFIXES,
};
