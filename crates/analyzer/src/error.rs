use semantic::SemanticError;
use serde_json::Value;
use thiserror::Error;

/// Errors returned by query analysis and node embedding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A required field (`query`, `nodes`) was absent or empty.
    #[error("missing {0}")]
    MissingInput(&'static str),
    /// The embedding payload could not be reduced to a vector.
    #[error("could not parse embedding provider response")]
    UpstreamParse { raw: Value },
    /// A batch payload does not line up with the requested texts.
    #[error("unexpected embedding response shape: {reason}")]
    ShapeMismatch { reason: String, sample: Value },
    /// The provider call itself failed.
    #[error(transparent)]
    Provider(#[from] SemanticError),
}
