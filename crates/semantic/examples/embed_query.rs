use std::{env, error::Error};

use semantic::{provider_from_config, to_vector_1d, SemanticConfig};

/// Embeds one query through the configured provider and prints the reconciled vector.
///
/// ```bash
/// HF_API_KEY=hf_xxx cargo run -p wave-semantic --example embed_query -- "what is a knowledge graph"
/// ```
///
/// Without `HF_API_KEY` the deterministic stub provider is used instead.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let text = env::args()
        .nth(1)
        .unwrap_or_else(|| "what is a knowledge graph".into());

    let mut cfg = SemanticConfig {
        api_token: env::var("HF_API_KEY").ok(),
        ..SemanticConfig::default()
    };
    if cfg.api_token.is_none() {
        println!("HF_API_KEY missing; falling back to the deterministic stub.");
        cfg.mode = "fast".into();
    }

    let provider = provider_from_config(&cfg)?;
    let raw = provider.embed_one(&text).await?;
    let vector = to_vector_1d(&raw).ok_or("could not parse embedding response")?;

    let info = provider.info();
    println!("provider: {}", info.provider);
    println!("model: {}", info.model);
    println!("dims: {}", vector.len());
    println!("first values: {:?}", &vector[..vector.len().min(8)]);

    Ok(())
}
