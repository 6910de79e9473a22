//! Readable-text retrieval through a content-extraction proxy.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_READER_BASE: &str = "https://r.jina.ai";
const DEFAULT_MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Marker appended when fetched content exceeds the caller's cap.
pub const TRUNCATION_MARKER: &str = "\n\n[Content truncated...]";

/// Seam for fetching a readable-text rendering of a remote page.
#[async_trait]
pub trait ContentReader: Send + Sync {
    /// Fetch `url` as readable text, bounded by `max_chars`.
    ///
    /// Returns an empty string on total failure; fetch problems are never
    /// fatal to the caller, which falls back to a content-free prompt.
    async fn fetch(&self, url: &str, max_chars: usize) -> String;
}

/// `ContentReader` backed by a reader proxy that converts an arbitrary URL
/// into clean markdown, with bounded retry on rate-limiting and timeouts.
pub struct ReaderClient {
    http_client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl ReaderClient {
    pub fn new() -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: DEFAULT_READER_BASE.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}

#[async_trait]
impl ContentReader for ReaderClient {
    async fn fetch(&self, url: &str, max_chars: usize) -> String {
        let target = format!("{}/{}", self.base_url, url);

        for attempt in 0..self.max_retries {
            let result = self
                .http_client
                .get(&target)
                .header(ACCEPT, "text/markdown")
                .send()
                .await;

            match result {
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    let wait = 2u64.pow(attempt);
                    warn!(url, attempt, wait_secs = wait, "Reader proxy rate limited, backing off");
                    tokio::time::sleep(Duration::from_secs(wait)).await;
                }
                Ok(response) if !response.status().is_success() => {
                    // Non-transient: log and stop retrying
                    warn!(url, status = %response.status(), "Reader proxy returned an error, giving up");
                    return String::new();
                }
                Ok(response) => match response.text().await {
                    Ok(text) => {
                        debug!(url, content_length = text.len(), "Reader proxy fetch succeeded");
                        return truncate(text, max_chars);
                    }
                    Err(e) => {
                        warn!(url, error = %e, "Failed to read reader proxy body");
                        return String::new();
                    }
                },
                Err(e) if e.is_timeout() => {
                    let wait = 2u64.pow(attempt);
                    warn!(url, attempt, wait_secs = wait, "Reader proxy timed out, backing off");
                    tokio::time::sleep(Duration::from_secs(wait)).await;
                }
                Err(e) => {
                    warn!(url, error = %e, "Reader proxy request failed");
                    return String::new();
                }
            }
        }

        debug!(url, "Reader proxy retries exhausted");
        String::new()
    }
}

/// Cap content with a visible marker so the prompt never silently loses the
/// tail of a page.
fn truncate(text: String, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}{}", cut, TRUNCATION_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_under_cap_is_untouched() {
        let text = "short content".to_string();
        assert_eq!(truncate(text.clone(), 100), text);
    }

    #[test]
    fn test_truncate_appends_marker() {
        let text = "a".repeat(200);
        let result = truncate(text, 50);

        assert!(result.starts_with(&"a".repeat(50)));
        assert!(result.ends_with(TRUNCATION_MARKER));
    }
}
