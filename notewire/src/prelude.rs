//! Prelude module for convenient imports
//!
//! Import everything you need with:
//! ```rust
//! use notewire::prelude::*;
//! ```

pub use crate::{
    classify, extract_url, find_embedded_videos,
    CompletionClient, ContentReader, ProviderKeys, ReaderClient,
    ResearchResult, SummarizeError, Summarizer, SummarizerConfig, SummaryResult, UrlType,
};
