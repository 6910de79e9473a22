pub mod config;
pub mod error;
pub mod openrouter;
pub mod traits;
pub mod xai;

mod wire;

pub use config::{ClientFactory, OpenRouterConfig, ProviderConfig, ProviderKeys, XaiConfig};
pub use error::ProviderError;
pub use openrouter::OpenRouterClient;
pub use traits::{
    CompletionClient, CompletionOptions, CompletionRequest, CompletionResponse, TokenUsage,
};
pub use xai::XaiClient;
