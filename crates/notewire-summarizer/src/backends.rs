//! The three URL-type backends.
//!
//! Each builds a provider-specific prompt, makes one outbound call, and
//! normalizes the raw text through the parser into a `SummaryResult` with
//! per-field defaults.

use anyhow::Result;
use notewire_llm::{CompletionOptions, CompletionRequest};
use notewire_types::{SummaryResult, UrlType};
use serde_json::{Map, Value};
use tracing::debug;

use crate::parse::{parse_model_response, str_field, string_list};
use crate::summarizer::Summarizer;
use crate::{prompts, urls};

impl Summarizer {
    /// Thread backend: fetch content first, detect embedded videos, and fall
    /// back to a URL-only prompt when the fetch came up empty.
    pub(crate) async fn summarize_thread(&self, url: &str) -> Result<SummaryResult> {
        let content = self
            .reader
            .fetch(url, self.config.thread_content_max_chars)
            .await;

        let embedded = urls::find_embedded_videos(&content);
        if let Some(video_url) = embedded.first() {
            debug!(url, video_url = %video_url, "Thread embeds a video, fanning out to both backends");
            return self.merge_thread_with_video(url, &content, video_url).await;
        }

        let prompt = if content.is_empty() {
            prompts::thread_prompt_url_only(url)
        } else {
            prompts::thread_prompt(url, &content)
        };

        let request = CompletionRequest::new(&self.config.thread_model, prompt).with_options(
            CompletionOptions::new()
                .temperature(self.config.temperature)
                .timeout_secs(self.config.request_timeout_secs),
        );
        let raw = self.thread_client.complete(request).await?.into_text()?;
        let parsed = parse_model_response(&raw);

        let mut extra_metadata = Map::new();
        if let Some(author) = str_field(&parsed, "author") {
            extra_metadata.insert("author".to_string(), Value::String(author));
        }
        if let Some(date) = str_field(&parsed, "thread_date") {
            extra_metadata.insert("thread_date".to_string(), Value::String(date));
        }

        Ok(SummaryResult {
            title: str_field(&parsed, "title").unwrap_or_else(|| "X Thread".to_string()),
            summary: str_field(&parsed, "summary").unwrap_or(raw),
            key_points: string_list(&parsed, "key_points"),
            url_type: UrlType::Thread,
            source_url: url.to_string(),
            extra_metadata,
        })
    }

    /// Video backend: no pre-fetch, the provider accepts the video reference
    /// natively.
    pub(crate) async fn summarize_video(&self, url: &str) -> Result<SummaryResult> {
        let request = CompletionRequest::new(&self.config.video_model, prompts::video_prompt(url))
            .with_options(
                CompletionOptions::new()
                    .temperature(self.config.temperature)
                    .timeout_secs(self.config.video_request_timeout_secs),
            );
        let raw = self.media_client.complete(request).await?.into_text()?;
        let parsed = parse_model_response(&raw);

        let mut extra_metadata = Map::new();
        if let Some(channel) = str_field(&parsed, "channel") {
            extra_metadata.insert("channel".to_string(), Value::String(channel));
        }
        if let Some(duration) = str_field(&parsed, "duration") {
            extra_metadata.insert("duration".to_string(), Value::String(duration));
        }

        Ok(SummaryResult {
            title: str_field(&parsed, "title").unwrap_or_else(|| "YouTube Video".to_string()),
            summary: str_field(&parsed, "summary").unwrap_or(raw),
            key_points: string_list(&parsed, "key_points"),
            url_type: UrlType::Video,
            source_url: url.to_string(),
            extra_metadata,
        })
    }

    /// Article backend: fetch content first, with a URL-only fallback prompt.
    pub(crate) async fn summarize_article(&self, url: &str) -> Result<SummaryResult> {
        let content = self
            .reader
            .fetch(url, self.config.article_content_max_chars)
            .await;

        let prompt = if content.is_empty() {
            prompts::article_prompt_url_only(url)
        } else {
            prompts::article_prompt(url, &content)
        };

        let request = CompletionRequest::new(&self.config.article_model, prompt).with_options(
            CompletionOptions::new()
                .temperature(self.config.temperature)
                .timeout_secs(self.config.request_timeout_secs),
        );
        let raw = self.media_client.complete(request).await?.into_text()?;
        let parsed = parse_model_response(&raw);

        let mut extra_metadata = Map::new();
        if let Some(author) = str_field(&parsed, "author") {
            extra_metadata.insert("author".to_string(), Value::String(author));
        }
        if let Some(publication) = str_field(&parsed, "publication") {
            extra_metadata.insert("publication".to_string(), Value::String(publication));
        }

        Ok(SummaryResult {
            title: str_field(&parsed, "title").unwrap_or_else(|| "Article".to_string()),
            summary: str_field(&parsed, "summary").unwrap_or(raw),
            key_points: string_list(&parsed, "key_points"),
            url_type: UrlType::Article,
            source_url: url.to_string(),
            extra_metadata,
        })
    }
}
