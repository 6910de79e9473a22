//! Research dispatcher for topic-only requests.

use anyhow::Result;
use notewire_llm::{CompletionOptions, CompletionRequest};
use notewire_types::ResearchResult;
use serde_json::{Map, Value};

use crate::context::resolve_context;
use crate::error::SummarizeError;
use crate::parse::{parse_model_response, str_field, strip_citations, string_list};
use crate::prompts;
use crate::summarizer::Summarizer;

impl Summarizer {
    /// Generate a research starter note for a topic without a URL.
    ///
    /// The domain context is resolved from the project folder (parent
    /// fallback included) and combined with any free-text context from the
    /// task itself.
    pub async fn research(
        &self,
        topic: &str,
        project_name: &str,
        parent_project: Option<&str>,
        context: &str,
    ) -> Result<ResearchResult> {
        let folder_context = resolve_context(project_name, parent_project);
        let full_context = if context.is_empty() {
            folder_context.to_string()
        } else {
            format!("{}\n\nAdditional context: {}", folder_context, context)
        };

        let request = CompletionRequest::new(
            &self.config.research_model,
            prompts::research_prompt(topic, &full_context),
        )
        .with_options(
            CompletionOptions::new()
                .temperature(self.config.research_temperature)
                .timeout_secs(self.config.request_timeout_secs),
        );
        let raw = self.media_client.complete(request).await?.into_text()?;
        let parsed = parse_model_response(&raw);

        let summary = strip_citations(&str_field(&parsed, "summary").unwrap_or_default());
        if summary.trim().is_empty() {
            return Err(SummarizeError::EmptyResearch {
                topic: topic.to_string(),
            }
            .into());
        }

        let key_points = string_list(&parsed, "key_points")
            .iter()
            .map(|point| strip_citations(point))
            .collect();
        let suggestions = string_list(&parsed, "suggestions")
            .iter()
            .map(|suggestion| strip_citations(suggestion))
            .collect();

        let mut extra_metadata = Map::new();
        extra_metadata.insert(
            "links".to_string(),
            Value::Array(
                render_links(&parsed)
                    .into_iter()
                    .map(Value::String)
                    .collect(),
            ),
        );

        Ok(ResearchResult {
            title: topic.to_string(),
            summary,
            key_points,
            suggestions,
            extra_metadata,
        })
    }
}

/// `links` entries arrive as `{label, url}` pairs; render the usable ones as
/// inline markdown and drop anything without an http(s) target.
fn render_links(parsed: &Map<String, Value>) -> Vec<String> {
    parsed
        .get("links")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let label = item.get("label").and_then(Value::as_str)?;
                    let url = item.get("url").and_then(Value::as_str)?;
                    if url.starts_with("http://") || url.starts_with("https://") {
                        Some(format!("[{}]({})", label, url))
                    } else {
                        None
                    }
                })
                .collect()
        })
        .unwrap_or_default()
}
