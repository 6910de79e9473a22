use thiserror::Error;

/// Failures a provider client can surface before any HTTP exchange happens.
///
/// Missing credentials are reported at call time, not at client construction,
/// so a half-configured process can still classify and parse.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: &'static str },
}
