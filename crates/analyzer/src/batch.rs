use semantic::{to_vector_1d, CandidateNode, ProviderInfo};
use serde_json::Value;

use crate::error::AnalysisError;
use crate::types::{EmbedNodesResult, EmbeddedNode};

/// Text sent to the provider for each node, in input order.
pub fn node_texts(nodes: &[CandidateNode]) -> Vec<String> {
    nodes.iter().map(CandidateNode::description).collect()
}

/// Attaches one vector per node from an aligned batch `payload`.
///
/// The payload must be an array with exactly one element per node. Each
/// element is normalized independently; only the first is required to yield a
/// usable vector, later ones come back with `vec: None` when they cannot be
/// normalized.
pub fn embed_nodes(
    nodes: &[CandidateNode],
    payload: &Value,
    info: &ProviderInfo,
) -> Result<EmbedNodesResult, AnalysisError> {
    if nodes.is_empty() {
        return Err(AnalysisError::MissingInput("nodes"));
    }

    let items = match payload.as_array() {
        Some(items) if items.len() == nodes.len() => items,
        Some(items) => {
            return Err(AnalysisError::ShapeMismatch {
                reason: format!("expected {} embeddings, got {}", nodes.len(), items.len()),
                sample: payload.clone(),
            })
        }
        None => {
            return Err(AnalysisError::ShapeMismatch {
                reason: format!("expected an array of {} embeddings", nodes.len()),
                sample: payload.clone(),
            })
        }
    };

    let embedded: Vec<EmbeddedNode> = nodes
        .iter()
        .zip(items)
        .map(|(node, item)| {
            let mut node = node.clone();
            node.vec = None;
            EmbeddedNode {
                node,
                vec: to_vector_1d(item),
            }
        })
        .collect();

    let dims = embedded[0].vec.as_ref().map_or(0, Vec::len);
    if dims == 0 {
        return Err(AnalysisError::ShapeMismatch {
            reason: "first vector has no usable dimensionality".into(),
            sample: items[0].clone(),
        });
    }

    Ok(EmbedNodesResult {
        nodes: embedded,
        dims,
        provider: info.provider.clone(),
        model: info.model.clone(),
    })
}
