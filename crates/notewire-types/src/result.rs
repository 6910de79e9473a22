use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::UrlType;

/// Outcome of a single URL summarization.
///
/// Built once by a backend, handed to the note-store collaborator, discarded.
/// `extra_metadata` is always present; backends with nothing to add leave it
/// as an empty map so consumers can index into it without a presence check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResult {
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    pub url_type: UrlType,
    pub source_url: String,
    /// Provider-specific fields: author, channel, duration, embedded-video
    /// flag and the like.
    #[serde(default)]
    pub extra_metadata: Map<String, Value>,
}

impl SummaryResult {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        key_points: Vec<String>,
        url_type: UrlType,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            key_points,
            url_type,
            source_url: source_url.into(),
            extra_metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, extra_metadata: Map<String, Value>) -> Self {
        self.extra_metadata = extra_metadata;
        self
    }
}

/// Outcome of a topic-only research request (no URL involved).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchResult {
    /// The topic string, unmodified
    pub title: String,
    pub summary: String,
    pub key_points: Vec<String>,
    /// Follow-up research prompts
    pub suggestions: Vec<String>,
    /// Carries a `links` field: pre-formatted markdown link strings
    #[serde(default)]
    pub extra_metadata: Map<String, Value>,
}

impl ResearchResult {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        key_points: Vec<String>,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            key_points,
            suggestions,
            extra_metadata: Map::new(),
        }
    }

    pub fn with_metadata(mut self, extra_metadata: Map<String, Value>) -> Self {
        self.extra_metadata = extra_metadata;
        self
    }
}
