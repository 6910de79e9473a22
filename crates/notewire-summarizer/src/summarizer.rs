//! The summarization pipeline entry points.

use std::sync::Arc;

use anyhow::Result;
use notewire_llm::{ClientFactory, CompletionClient, ProviderConfig, ProviderKeys};
use notewire_types::{SummaryResult, UrlType};

use crate::reader::{ContentReader, ReaderClient};

/// Default model routed to each backend. All overridable via
/// `SummarizerConfig`.
const DEFAULT_THREAD_MODEL: &str = "grok-4-fast";
const DEFAULT_VIDEO_MODEL: &str = "google/gemini-3-flash-preview";
const DEFAULT_ARTICLE_MODEL: &str = "anthropic/claude-sonnet-4.5";
const DEFAULT_RESEARCH_MODEL: &str = "anthropic/claude-sonnet-4.5";

/// Tunables for the summarization pipeline.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub thread_model: String,
    pub video_model: String,
    pub article_model: String,
    pub research_model: String,
    /// Fetched article content is capped at this many characters.
    pub article_content_max_chars: usize,
    /// Fetched thread content is capped at this many characters.
    pub thread_content_max_chars: usize,
    pub request_timeout_secs: u64,
    /// Video-capable providers are slower to answer.
    pub video_request_timeout_secs: u64,
    pub temperature: f32,
    pub research_temperature: f32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            thread_model: DEFAULT_THREAD_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
            article_model: DEFAULT_ARTICLE_MODEL.to_string(),
            research_model: DEFAULT_RESEARCH_MODEL.to_string(),
            article_content_max_chars: 15_000,
            thread_content_max_chars: 10_000,
            request_timeout_secs: 60,
            video_request_timeout_secs: 120,
            temperature: 0.3,
            research_temperature: 0.5,
        }
    }
}

/// Routes URLs to model backends and topics to the research dispatcher.
///
/// Holds no mutable state: every call constructs its own prompt, owns its own
/// parsed result, and hands back a fully built record.
pub struct Summarizer {
    pub(crate) thread_client: Arc<dyn CompletionClient>,
    pub(crate) media_client: Arc<dyn CompletionClient>,
    pub(crate) reader: Arc<dyn ContentReader>,
    pub(crate) config: SummarizerConfig,
}

impl Summarizer {
    /// Wire up the default providers from the flat key set.
    pub fn new(keys: ProviderKeys) -> Result<Self> {
        let thread_client = ClientFactory::create_client(ProviderConfig::xai(keys.xai_api_key))?;
        let media_client =
            ClientFactory::create_client(ProviderConfig::openrouter(keys.openrouter_api_key))?;
        let reader = Arc::new(ReaderClient::new()?);

        Ok(Self {
            thread_client,
            media_client,
            reader,
            config: SummarizerConfig::default(),
        })
    }

    pub fn with_config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder for injecting alternative clients, mostly from tests.
    pub fn builder() -> SummarizerBuilder {
        SummarizerBuilder::default()
    }

    /// Route a URL to the backend matching its classification.
    pub async fn summarize(&self, url: &str, url_type: UrlType) -> Result<SummaryResult> {
        match url_type {
            UrlType::Thread => self.summarize_thread(url).await,
            UrlType::Video => self.summarize_video(url).await,
            UrlType::Article => self.summarize_article(url).await,
        }
    }
}

#[derive(Default)]
pub struct SummarizerBuilder {
    thread_client: Option<Arc<dyn CompletionClient>>,
    media_client: Option<Arc<dyn CompletionClient>>,
    reader: Option<Arc<dyn ContentReader>>,
    config: Option<SummarizerConfig>,
}

impl SummarizerBuilder {
    pub fn thread_client(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.thread_client = Some(client);
        self
    }

    pub fn media_client(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.media_client = Some(client);
        self
    }

    pub fn reader(mut self, reader: Arc<dyn ContentReader>) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn config(mut self, config: SummarizerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<Summarizer> {
        let thread_client = self
            .thread_client
            .ok_or_else(|| anyhow::anyhow!("Summarizer requires a thread client"))?;
        let media_client = self
            .media_client
            .ok_or_else(|| anyhow::anyhow!("Summarizer requires a media client"))?;
        let reader = self
            .reader
            .ok_or_else(|| anyhow::anyhow!("Summarizer requires a content reader"))?;

        Ok(Summarizer {
            thread_client,
            media_client,
            reader,
            config: self.config.unwrap_or_default(),
        })
    }
}
