use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::CandidateNode;

/// Added to the cosine denominator so all-zero vectors score 0 instead of NaN.
pub const COSINE_EPSILON: f64 = 1e-9;

/// Winning node of a [`best_match`] scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMatch {
    pub id: Value,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Raw cosine value, not clamped.
    pub score: f64,
}

/// Cosine similarity over the common prefix of `a` and `b`.
///
/// Vectors of different length are compared on their first
/// `min(a.len(), b.len())` dimensions. NaN entries count as zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (&x, &y) in a.iter().zip(b) {
        let x = or_zero(x);
        let y = or_zero(y);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt() + COSINE_EPSILON)
}

#[inline]
fn or_zero(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

/// Picks the node whose vector is most similar to `query`.
///
/// Nodes without a usable vector are skipped. On ties the earliest node wins.
/// Returns `None` when no node can be scored.
pub fn best_match(query: &[f64], nodes: &[CandidateNode]) -> Option<NodeMatch> {
    let mut best: Option<NodeMatch> = None;
    let mut best_score = f64::NEG_INFINITY;

    for node in nodes {
        let Some(vector) = node.vector() else {
            continue;
        };
        let score = cosine_similarity(query, vector);
        if score > best_score {
            best_score = score;
            best = Some(NodeMatch {
                id: node.id.clone(),
                name: node.name.clone(),
                tag: node.tag.clone(),
                score,
            });
        }
    }

    best
}
