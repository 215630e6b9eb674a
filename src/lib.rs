//! Workspace umbrella crate for Eureka Wave.
//!
//! Re-exports the member crates so callers can depend on a single package:
//! [`semantic`] for embedding normalization and ranking, [`intent`] for the
//! rule-based query heuristics, [`analyzer`] for the orchestration, and
//! [`server`] for the HTTP surface.

pub use analyzer::{
    analyze_query, embed_nodes, follow_up_queries, node_texts, AnalysisError, AnalysisResult,
    EmbedNodesResult, EmbeddedNode, QueryAnalyzer, EXPLANATION,
};
pub use intent::{
    assign_cluster, classify, extract_entities, ClusterLabel, Entity, EntityKind, Intent,
    IntentDistribution,
};
pub use semantic::{
    best_match, cosine_similarity, provider_from_config, to_vector_1d, CandidateNode,
    EmbeddingMeta, EmbeddingProvider, EmbeddingVector, HuggingFaceProvider, NodeMatch,
    ProviderInfo, SemanticConfig, SemanticError, StubProvider,
};

pub use analyzer;
pub use intent;
pub use semantic;
pub use server;
