use notewire_llm::{
    CompletionClient, CompletionOptions, CompletionRequest, CompletionResponse, ProviderError,
    ProviderKeys, XaiClient, XaiConfig,
};

#[test]
fn test_completion_request_creation() {
    let request = CompletionRequest::new("grok-4-fast", "Summarize this thread");

    assert_eq!(request.model, "grok-4-fast");
    assert_eq!(request.prompt, "Summarize this thread");
    assert_eq!(request.options.temperature, None);
}

#[test]
fn test_completion_request_with_options() {
    let options = CompletionOptions::new()
        .temperature(0.3)
        .timeout_secs(60);

    let request = CompletionRequest::new("grok-4-fast", "Hello").with_options(options);

    assert_eq!(request.options.temperature, Some(0.3));
    assert_eq!(request.options.timeout_secs, Some(60));
}

#[test]
fn test_completion_options_builder() {
    let options = CompletionOptions::new()
        .temperature(0.5)
        .max_tokens(256)
        .timeout_secs(120);

    assert_eq!(options.temperature, Some(0.5));
    assert_eq!(options.max_tokens, Some(256));
    assert_eq!(options.timeout_secs, Some(120));
}

#[test]
fn test_completion_options_default() {
    let options = CompletionOptions::default();

    assert_eq!(options.temperature, None);
    assert_eq!(options.max_tokens, None);
    assert_eq!(options.timeout_secs, None);
}

#[test]
fn test_into_text() {
    let response = CompletionResponse {
        content: Some("hello".to_string()),
        usage: None,
        finish_reason: None,
    };
    assert_eq!(response.into_text().unwrap(), "hello");

    let empty = CompletionResponse {
        content: None,
        usage: None,
        finish_reason: None,
    };
    assert!(empty.into_text().is_err());
}

#[tokio::test]
async fn test_missing_key_fails_at_call_time() {
    // No key configured: construction succeeds, the call reports the gap
    let client = XaiClient::new(XaiConfig::default()).unwrap();

    let err = client
        .complete(CompletionRequest::new("grok-4-fast", "Hello"))
        .await
        .unwrap_err();

    let provider_err = err.downcast_ref::<ProviderError>();
    assert!(matches!(
        provider_err,
        Some(ProviderError::MissingApiKey { provider: "xAI" })
    ));
}

#[test]
fn test_provider_keys_default_is_empty() {
    let keys = ProviderKeys::default();
    assert!(keys.xai_api_key.is_none());
    assert!(keys.openrouter_api_key.is_none());
}
