// Configuration layer for provider client creation
// Keys live in explicit structs handed to constructors, never read ambiently,
// so tests can substitute fake credentials without touching process state.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Flat set of provider secrets, read once at process startup.
///
/// A missing key only disables the client that needs it, and only when that
/// client is actually called.
#[derive(Debug, Clone, Default)]
pub struct ProviderKeys {
    pub xai_api_key: Option<String>,
    pub openrouter_api_key: Option<String>,
}

impl ProviderKeys {
    pub fn from_env() -> Self {
        Self {
            xai_api_key: std::env::var("XAI_API_KEY").ok(),
            openrouter_api_key: std::env::var("OPENROUTER_API_KEY").ok(),
        }
    }
}

/// Configuration for the xAI provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XaiConfig {
    pub api_key: Option<String>,
    /// Base URL for the xAI API (optional, defaults to https://api.x.ai/v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl XaiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Configuration for the OpenRouter provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenRouterConfig {
    pub api_key: Option<String>,
    /// Base URL (optional, defaults to https://openrouter.ai/api/v1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// HTTP-Referer attribution header (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,
    /// X-Title attribution header (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl OpenRouterConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_attribution(
        mut self,
        referer: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.referer = Some(referer.into());
        self.title = Some(title.into());
        self
    }
}

/// Type of completion provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Xai,
    OpenRouter,
}

/// Provider-specific configuration details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    Xai(XaiConfig),
    OpenRouter(OpenRouterConfig),
}

impl ProviderConfig {
    /// Create xAI provider config
    pub fn xai(api_key: Option<String>) -> Self {
        Self::Xai(XaiConfig {
            api_key,
            base_url: None,
        })
    }

    /// Create OpenRouter provider config
    pub fn openrouter(api_key: Option<String>) -> Self {
        Self::OpenRouter(OpenRouterConfig {
            api_key,
            ..OpenRouterConfig::default()
        })
    }

    /// Get the provider type
    pub fn provider_type(&self) -> ProviderType {
        match self {
            ProviderConfig::Xai(_) => ProviderType::Xai,
            ProviderConfig::OpenRouter(_) => ProviderType::OpenRouter,
        }
    }
}

/// Factory for creating completion clients from configuration
pub struct ClientFactory;

impl ClientFactory {
    /// Create a completion client from provider configuration
    pub fn create_client(config: ProviderConfig) -> Result<Arc<dyn crate::traits::CompletionClient>> {
        match config {
            ProviderConfig::Xai(xai_config) => {
                let client = crate::xai::XaiClient::new(xai_config)?;
                Ok(Arc::new(client))
            }
            ProviderConfig::OpenRouter(openrouter_config) => {
                let client = crate::openrouter::OpenRouterClient::new(openrouter_config)?;
                Ok(Arc::new(client))
            }
        }
    }
}
