// Chat-completions wire format shared by the OpenAI-compatible providers.

use serde::Deserialize;
use serde_json::Value;

use crate::traits::{CompletionRequest, CompletionResponse, TokenUsage};

/// Build the JSON payload for a chat-completions call.
pub(crate) fn build_chat_request(request: &CompletionRequest) -> Value {
    let mut payload = serde_json::json!({
        "model": request.model,
        "messages": [{ "role": "user", "content": request.prompt }],
    });

    let obj = payload.as_object_mut().unwrap();

    if let Some(temp) = request.options.temperature {
        obj.insert("temperature".to_string(), serde_json::json!(temp));
    }
    if let Some(max_tokens) = request.options.max_tokens {
        obj.insert("max_tokens".to_string(), serde_json::json!(max_tokens));
    }

    payload
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Choice {
    pub message: ResponseMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatCompletionResponse {
    /// Convert to the provider-agnostic response shape.
    pub(crate) fn into_completion(self) -> CompletionResponse {
        let usage = self.usage.map(|u| TokenUsage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        let choice = self.choices.into_iter().next();

        CompletionResponse {
            content: choice.as_ref().and_then(|c| c.message.content.clone()),
            usage,
            finish_reason: choice.and_then(|c| c.finish_reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CompletionOptions;

    #[test]
    fn test_build_chat_request_minimal() {
        let request = CompletionRequest::new("grok-4-fast", "Hello");
        let payload = build_chat_request(&request);

        assert_eq!(payload["model"], "grok-4-fast");
        assert_eq!(payload["messages"][0]["role"], "user");
        assert_eq!(payload["messages"][0]["content"], "Hello");
        assert!(payload.get("temperature").is_none());
    }

    #[test]
    fn test_build_chat_request_with_options() {
        let request = CompletionRequest::new("grok-4-fast", "Hello")
            .with_options(CompletionOptions::new().temperature(0.5).max_tokens(512));
        let payload = build_chat_request(&request);

        assert_eq!(payload["temperature"], 0.5);
        assert_eq!(payload["max_tokens"], 512);
    }

    #[test]
    fn test_parse_chat_completion_response() {
        let json = r#"{
            "id": "cmpl-1",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "{\"title\": \"T\"}" },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
        }"#;

        let raw: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let response = raw.into_completion();

        assert_eq!(response.content.as_deref(), Some("{\"title\": \"T\"}"));
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
        assert_eq!(response.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn test_parse_response_without_choices() {
        let json = r#"{ "choices": [] }"#;

        let raw: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let response = raw.into_completion();

        assert!(response.content.is_none());
        assert!(response.into_text().is_err());
    }
}
