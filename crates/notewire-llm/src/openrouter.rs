// OpenRouter-specific client implementation

use crate::config::OpenRouterConfig;
use crate::error::ProviderError;
use crate::traits::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::wire;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const OPENROUTER_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// OpenRouter chat-completions client.
///
/// One client covers every OpenRouter-routed model (video, article and
/// research); the model name travels in the request. The default timeout is
/// generous because video-capable models are slow to first token.
pub struct OpenRouterClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    referer: Option<String>,
    title: Option<String>,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config
                .base_url
                .unwrap_or_else(|| OPENROUTER_API_BASE.to_string()),
            api_key: config.api_key,
            referer: config.referer,
            title: config.title,
        })
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey {
                provider: "OpenRouter",
            })?;

        debug!(model = %request.model, "Sending OpenRouter chat completion");
        let payload = wire::build_chat_request(&request);

        let mut call = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&payload);
        // Optional attribution headers OpenRouter uses for app rankings
        if let Some(referer) = &self.referer {
            call = call.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.title {
            call = call.header("X-Title", title);
        }
        if let Some(secs) = request.options.timeout_secs {
            call = call.timeout(Duration::from_secs(secs));
        }

        let response = call.send().await.context("Failed to send request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("OpenRouter API error ({}): {}", status, error_text);
        }

        let raw: wire::ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse response")?;

        Ok(raw.into_completion())
    }
}
