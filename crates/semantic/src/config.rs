use serde::{Deserialize, Serialize};

use crate::retry::RetryConfig;

/// Base URL of the HuggingFace inference router.
pub const HF_ROUTER_BASE: &str = "https://router.huggingface.co/hf-inference/models";

/// Runtime configuration for embedding providers.
///
/// # Example
/// ```
/// use semantic::SemanticConfig;
///
/// let cfg = SemanticConfig {
///     api_token: Some("hf_xxx".into()),
///     ..Default::default()
/// };
/// assert_eq!(
///     cfg.endpoint(),
///     "https://router.huggingface.co/hf-inference/models/sentence-transformers/all-MiniLM-L6-v2/pipeline/feature-extraction"
/// );
/// assert_eq!(cfg.auth_header().as_deref(), Some("Bearer hf_xxx"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SemanticConfig {
    /// `"api"` (remote HTTP) or `"fast"` (deterministic stub).
    pub mode: String,
    /// Provider label reported in `embedding_meta`.
    pub provider: String,
    /// Model identifier, also used to build the default endpoint.
    pub model_id: String,
    /// Endpoint override. When absent the HF router URL for `model_id` is used.
    pub api_url: Option<String>,
    /// Bearer token. Never serialized.
    #[serde(skip_serializing)]
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Dimensionality of stub vectors in `"fast"` mode.
    pub stub_dims: usize,
    pub retry: RetryConfig,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            mode: "api".into(),
            provider: "huggingface".into(),
            model_id: "sentence-transformers/all-MiniLM-L6-v2".into(),
            api_url: None,
            api_token: None,
            timeout_secs: 30,
            stub_dims: 384,
            retry: RetryConfig::default(),
        }
    }
}

impl SemanticConfig {
    /// Feature-extraction endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        match self.api_url.as_deref() {
            Some(url) => url.to_string(),
            None => format!("{HF_ROUTER_BASE}/{}/pipeline/feature-extraction", self.model_id),
        }
    }

    /// `Authorization` header value, when a token is configured.
    pub fn auth_header(&self) -> Option<String> {
        self.api_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .map(|token| format!("Bearer {token}"))
    }
}
