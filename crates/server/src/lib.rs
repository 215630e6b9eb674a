//! Eureka Wave Server - HTTP API for query analysis
//!
//! Thin axum transport over [`analyzer::QueryAnalyzer`]. Request bodies are
//! parsed here, everything else (embedding calls, heuristics, ranking) lives in
//! the library crates.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe with provider/model
//! - `GET /api/metadata` - Version, uptime, provider
//! - `POST /api/analyze` - `{ "query": "...", "nodes": [...]? }`
//! - `POST /api/embed_nodes` - `{ "nodes": [...] }`
//!
//! Errors use the envelope `{"error": {"code", "message", "details"?}}`.
//!
//! # Configuration
//!
//! `server.toml` (optional) and `WAVE_SERVER__*` environment variables, e.g.
//! `WAVE_SERVER__PORT=9000` or `WAVE_SERVER__SEMANTIC__MODE=fast`. The
//! HuggingFace token falls back to `HF_API_KEY`, which may come from `.env`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
