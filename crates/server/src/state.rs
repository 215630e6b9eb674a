use crate::config::ServerConfig;
use crate::error::ServerResult;
use analyzer::QueryAnalyzer;
use semantic::{provider_from_config, EmbeddingProvider};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Analyzer bound to the configured embedding provider
    pub analyzer: QueryAnalyzer,
}

impl ServerState {
    /// Create state with the provider selected by `config.semantic`.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let provider = provider_from_config(&config.semantic)?;
        Ok(Self::with_provider(config, provider))
    }

    /// Create state around an already-built provider.
    pub fn with_provider(config: ServerConfig, provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            config: Arc::new(config),
            analyzer: QueryAnalyzer::new(provider),
        }
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub provider: String,
    pub model: String,
}
