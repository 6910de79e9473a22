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

    let mut args = std::env::args().skip(1);
    let topic = args
        .next()
        .context("Usage: research-note <topic> [project] [parent-project]")?;
    let project = args.next().unwrap_or_else(|| "Inbox".to_string());
    let parent = args.next();

    let summarizer = Summarizer::new(ProviderKeys::from_env())?;
    let result = summarizer
        .research(&topic, &project, parent.as_deref(), "")
        .await?;

    println!("# {}\n", result.title);
    println!("{}\n", result.summary);

    println!("Key points:");
    for point in &result.key_points {
        println!("- {}", point);
    }

    println!("\nSuggested research:");
    for suggestion in &result.suggestions {
        println!("- {}", suggestion);
    }

    if let Some(links) = result.extra_metadata.get("links").and_then(|v| v.as_array()) {
        if !links.is_empty() {
            println!("\nLinks:");
            for link in links {
                if let Some(link) = link.as_str() {
                    println!("- {}", link);
                }
            }
        }
    }

    Ok(())
}
