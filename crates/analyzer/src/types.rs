use intent::{ClusterLabel, Entity, IntentDistribution};
use semantic::{CandidateNode, EmbeddingMeta, EmbeddingVector, NodeMatch};
use serde::{Deserialize, Serialize};

/// Fixed note attached to every analysis.
pub const EXPLANATION: &str =
    "Embedding-based targeting with deterministic intent heuristics (no random).";

/// Suffixes appended to the query to build follow-up suggestions, in order.
pub const FOLLOW_UP_SUFFIXES: [&str; 3] = [" examples", " best practices", " checklist"];

/// Everything derived from one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub intents: IntentDistribution,
    pub entities: Vec<Entity>,
    pub cluster: ClusterLabel,
    pub next_queries: Vec<String>,
    pub explanation: String,
    /// Best-matching node, `null` when no node could be scored.
    pub target: Option<NodeMatch>,
    pub embedding_meta: EmbeddingMeta,
}

/// A caller node with its freshly computed vector.
///
/// Serializes flat: the node's own fields plus `vec`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedNode {
    #[serde(flatten)]
    pub node: CandidateNode,
    /// `None` when this element of the batch could not be normalized.
    pub vec: Option<EmbeddingVector>,
}

/// Output of batch node embedding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedNodesResult {
    pub nodes: Vec<EmbeddedNode>,
    pub dims: usize,
    pub provider: String,
    pub model: String,
}
