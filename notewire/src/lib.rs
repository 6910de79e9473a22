//! # Notewire
//!
//! Core of a webhook-driven relay: task-lifecycle events arrive from a task
//! manager, any URL found in a task is classified, a remote language model
//! summarizes the linked content, and the caller writes the result into a
//! version-controlled document store.
//!
//! This crate covers the decision-heavy middle of that flow:
//!
//! - **Classify** a URL as a thread, a video or an article
//! - **Fetch** readable text through a content-extraction proxy, with
//!   bounded retry on rate limits and timeouts
//! - **Summarize** through the backend matching the URL type, each with its
//!   own provider, prompt and metadata fields
//! - **Merge** the thread and video backends when a thread embeds a video
//! - **Research** a bare topic into a starter note with real links
//!
//! The webhook endpoint, task-manager client, document store and
//! notification side live outside this crate; it only returns results or
//! raises.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notewire::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let summarizer = Summarizer::new(ProviderKeys::from_env())?;
//!
//!     let url = "https://x.com/someone/status/1234567890";
//!     let result = summarizer.summarize(url, classify(url)).await?;
//!
//!     println!("{}: {}", result.title, result.summary);
//!     Ok(())
//! }
//! ```

pub use notewire_llm::{
    ClientFactory, CompletionClient, CompletionOptions, CompletionRequest, CompletionResponse,
    OpenRouterClient, OpenRouterConfig, ProviderConfig, ProviderError, ProviderKeys, TokenUsage,
    XaiClient, XaiConfig,
};
pub use notewire_summarizer::{
    classify, extract_url, find_embedded_videos, parse_model_response, resolve_context,
    strip_citations, validate_links, ContentReader, ReaderClient, SummarizeError, Summarizer,
    SummarizerBuilder, SummarizerConfig,
};
pub use notewire_types::{ResearchResult, SummaryResult, UrlType};

pub mod prelude;
