use thiserror::Error;

/// Errors surfaced while talking to an embedding provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// Configuration is unusable (e.g., no API token for api mode).
    #[error("invalid semantic config: {0}")]
    InvalidConfig(String),
    /// The request never produced an HTTP response (DNS, connect, timeout).
    #[error("http request failed: {0}")]
    Http(String),
    /// The provider answered with a non-success status.
    #[error("embedding provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },
    /// The provider answered 2xx but the body was not JSON.
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}

impl SemanticError {
    /// Transport failures, 429 and 5xx are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            SemanticError::Http(_) => true,
            SemanticError::Upstream { status, .. } => *status == 429 || *status >= 500,
            SemanticError::InvalidConfig(_) | SemanticError::InvalidResponse(_) => false,
        }
    }
}
