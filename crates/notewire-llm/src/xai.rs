// xAI-specific client implementation

use crate::config::XaiConfig;
use crate::error::ProviderError;
use crate::traits::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::wire;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const XAI_API_BASE: &str = "https://api.x.ai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// xAI chat-completions client (HTTP direct, no SDK).
///
/// Handles the thread-summary traffic; the key is checked per call so a
/// client can be built in an unconfigured process without failing.
pub struct XaiClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl XaiClient {
    pub fn new(config: XaiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config
                .base_url
                .unwrap_or_else(|| XAI_API_BASE.to_string()),
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl CompletionClient for XaiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey { provider: "xAI" })?;

        debug!(model = %request.model, "Sending xAI chat completion");
        let payload = wire::build_chat_request(&request);

        let mut call = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&payload);
        if let Some(secs) = request.options.timeout_secs {
            call = call.timeout(Duration::from_secs(secs));
        }

        let response = call.send().await.context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("xAI API error ({}): {}", status, error_text);
        }

        let raw: wire::ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(raw.into_completion())
    }
}
