use anyhow::{Context, Result};
use notewire::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let url = std::env::args()
        .nth(1)
        .context("Usage: summarize-url <url>")?;

    let url_type = classify(&url);
    println!("Detected {}: {}\n", url_type, url);

    let summarizer = Summarizer::new(ProviderKeys::from_env())?;
    let result = summarizer.summarize(&url, url_type).await?;

    println!("# {}\n", result.title);
    println!("{}\n", result.summary);
    for point in &result.key_points {
        println!("- {}", point);
    }
    if !result.extra_metadata.is_empty() {
        println!(
            "\nmetadata: {}",
            serde_json::to_string_pretty(&result.extra_metadata)?
        );
    }

    Ok(())
}
