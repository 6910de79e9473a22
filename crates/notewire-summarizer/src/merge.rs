//! Cross-backend merge for threads that embed a video.
//!
//! The thread branch contributes the poster's framing, the video branch the
//! content. Both run concurrently and a failed branch degrades to empty
//! fields instead of aborting the other.

use anyhow::Result;
use notewire_llm::{CompletionOptions, CompletionRequest, CompletionResponse};
use notewire_types::{SummaryResult, UrlType};
use serde_json::{Map, Value};
use tracing::warn;

use crate::parse::{parse_model_response, str_field, string_list};
use crate::prompts;
use crate::summarizer::Summarizer;

const FALLBACK_TITLE: &str = "Shared Video";
const VIDEO_PLACEHOLDER_TITLE: &str = "YouTube Video";

impl Summarizer {
    pub(crate) async fn merge_thread_with_video(
        &self,
        thread_url: &str,
        thread_content: &str,
        video_url: &str,
    ) -> Result<SummaryResult> {
        let thread_request = CompletionRequest::new(
            &self.config.thread_model,
            prompts::thread_context_prompt(thread_url, thread_content),
        )
        .with_options(
            CompletionOptions::new()
                .temperature(self.config.temperature)
                .timeout_secs(self.config.request_timeout_secs),
        );

        let video_request =
            CompletionRequest::new(&self.config.video_model, prompts::video_prompt(video_url))
                .with_options(
                    CompletionOptions::new()
                        .temperature(self.config.temperature)
                        .timeout_secs(self.config.video_request_timeout_secs),
                );

        // Both branches start before either is awaited, and both run to
        // completion: a failure on one side must not cancel the other.
        let (thread_response, video_response) = tokio::join!(
            self.thread_client.complete(thread_request),
            self.media_client.complete(video_request),
        );

        let thread_parsed = branch_fields(thread_response, "thread");
        let video_parsed = branch_fields(video_response, "video");

        let title = str_field(&thread_parsed, "title")
            .or_else(|| {
                str_field(&video_parsed, "title").filter(|t| t != VIDEO_PLACEHOLDER_TITLE)
            })
            .unwrap_or_else(|| FALLBACK_TITLE.to_string());

        let mut paragraphs = Vec::new();
        if let Some(context) = str_field(&thread_parsed, "poster_context") {
            let author =
                str_field(&thread_parsed, "author").unwrap_or_else(|| "the poster".to_string());
            paragraphs.push(format!("Shared by {}: {}", author, context));
        }
        if let Some(video_summary) = str_field(&video_parsed, "summary") {
            let channel =
                str_field(&video_parsed, "channel").unwrap_or_else(|| "unknown channel".to_string());
            paragraphs.push(format!("Video ({}): {}", channel, video_summary));
        }
        let summary = paragraphs.join("\n\n").trim().to_string();

        let mut extra_metadata = Map::new();
        for key in ["author", "thread_date"] {
            if let Some(value) = str_field(&thread_parsed, key) {
                extra_metadata.insert(key.to_string(), Value::String(value));
            }
        }
        for key in ["channel", "duration"] {
            if let Some(value) = str_field(&video_parsed, key) {
                extra_metadata.insert(key.to_string(), Value::String(value));
            }
        }
        extra_metadata.insert("has_embedded_video".to_string(), Value::Bool(true));
        extra_metadata.insert(
            "embedded_video_url".to_string(),
            Value::String(video_url.to_string()),
        );

        // The thread is the primary artifact: its type wins, and its own key
        // points stay folded into the summary rather than being duplicated.
        Ok(SummaryResult {
            title,
            summary,
            key_points: string_list(&video_parsed, "key_points"),
            url_type: UrlType::Thread,
            source_url: thread_url.to_string(),
            extra_metadata,
        })
    }
}

/// Unwrap one branch, degrading any failure to an empty field map.
fn branch_fields(
    response: Result<CompletionResponse>,
    branch: &'static str,
) -> Map<String, Value> {
    match response.and_then(CompletionResponse::into_text) {
        Ok(text) => parse_model_response(&text),
        Err(e) => {
            warn!(branch, error = %e, "Merge branch failed, continuing with empty fields");
            Map::new()
        }
    }
}
