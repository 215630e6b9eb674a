use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde_json::{json, Value};
use std::time::Duration;

use crate::provider::{EmbeddingProvider, ProviderInfo};
use crate::retry::{execute_with_retry_async, RetryConfig};
use crate::{SemanticConfig, SemanticError};

/// Feature-extraction client for the HuggingFace inference router.
///
/// Sends `{"inputs": text}` or `{"inputs": [texts]}` and hands the JSON body
/// back untouched. Transient failures are retried per [`RetryConfig`].
#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
    client: reqwest::Client,
    url: String,
    auth_header: Option<String>,
    retry: RetryConfig,
    info: ProviderInfo,
}

impl HuggingFaceProvider {
    pub fn new(cfg: &SemanticConfig) -> Result<Self, SemanticError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(32)
            .build()
            .map_err(|e| SemanticError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self {
            client,
            url: cfg.endpoint(),
            auth_header: cfg.auth_header(),
            retry: cfg.retry,
            info: ProviderInfo {
                provider: cfg.provider.clone(),
                model: cfg.model_id.clone(),
            },
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, payload: Value) -> Result<Value, SemanticError> {
        let auth = self.auth_header.as_deref().ok_or_else(|| {
            SemanticError::InvalidConfig("missing HF_API_KEY (HuggingFace token)".into())
        })?;
        let payload = &payload;
        let provider = self.info.provider.as_str();

        let outcome = execute_with_retry_async(&self.retry, SemanticError::is_retryable, |attempt| {
            async move {
                if attempt > 0 {
                    tracing::warn!(attempt, provider, "retrying embedding request");
                }
                self.send(auth, payload).await
            }
        })
        .await;

        if let Err(err) = &outcome.result {
            tracing::warn!(
                provider,
                attempts = outcome.attempts,
                elapsed_ms = outcome.total_duration.as_millis() as u64,
                error = %err,
                "embedding_request_failed"
            );
        }
        outcome.into_result()
    }

    async fn send(&self, auth: &str, payload: &Value) -> Result<Value, SemanticError> {
        let response = self
            .client
            .post(&self.url)
            .header(AUTHORIZATION, auth)
            .json(payload)
            .send()
            .await
            .map_err(|e| SemanticError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SemanticError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| SemanticError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl EmbeddingProvider for HuggingFaceProvider {
    fn info(&self) -> ProviderInfo {
        self.info.clone()
    }

    async fn embed_one(&self, text: &str) -> Result<Value, SemanticError> {
        self.post(json!({ "inputs": text })).await
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Value, SemanticError> {
        self.post(json!({ "inputs": texts })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_router_url_for_model() {
        let provider = HuggingFaceProvider::new(&SemanticConfig::default()).unwrap();
        assert!(provider.url().starts_with("https://router.huggingface.co/"));
        assert!(provider.url().ends_with("all-MiniLM-L6-v2/pipeline/feature-extraction"));
    }

    #[test]
    fn provider_info_follows_configuration() {
        let provider = HuggingFaceProvider::new(&SemanticConfig::default()).unwrap();
        assert_eq!(provider.info().provider, "huggingface");
        assert_eq!(provider.info().model, "sentence-transformers/all-MiniLM-L6-v2");

        let provider = HuggingFaceProvider::new(&SemanticConfig {
            provider: "huggingface-router".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(provider.info().provider, "huggingface-router");
    }

    #[tokio::test]
    async fn missing_token_fails_before_any_request() {
        let provider = HuggingFaceProvider::new(&SemanticConfig {
            api_url: Some("http://127.0.0.1:1/never".into()),
            ..Default::default()
        })
        .unwrap();

        let err = provider.embed_one("hello").await.unwrap_err();
        assert!(matches!(err, SemanticError::InvalidConfig(_)));
        assert!(err.to_string().contains("HF_API_KEY"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_surfaces_http_error() {
        let cfg = SemanticConfig {
            api_url: Some("http://127.0.0.1:1/embed".into()),
            api_token: Some("hf_test".into()),
            timeout_secs: 2,
            retry: RetryConfig::default()
                .with_max_retries(1)
                .with_base_delay(Duration::from_millis(1)),
            ..Default::default()
        };
        let provider = HuggingFaceProvider::new(&cfg).unwrap();

        let err = provider
            .embed_batch(&["a".to_string(), "b".to_string()])
            .await
            .unwrap_err();
        assert!(matches!(err, SemanticError::Http(_)));
    }
}
