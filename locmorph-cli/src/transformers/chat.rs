//! Value rewriting through an OpenAI-compatible chat-completions service.
//!
//! Each value is sent as the user message alongside a fixed system prompt;
//! the service's reply becomes the replacement value. Failures (network,
//! auth, quota, empty reply) surface as errors and are absorbed per value
//! by the pipeline's resilient wrapper.

use std::time::Duration;

use locmorph::{Error, ValueTransformer};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Configuration for the chat-completions rewriter, assembled by the
/// caller before the batch starts.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub system_prompt: String,
    /// Per-request timeout. A stalled service call would otherwise hang
    /// the whole batch.
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Rewrites values by calling a chat-completions endpoint.
pub struct ChatRewriter {
    client: Client,
    config: ChatConfig,
}

impl ChatRewriter {
    pub fn new(config: ChatConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                Error::transform_error("failed to build HTTP client", Some(Box::new(e)))
            })?;

        Ok(ChatRewriter { client, config })
    }
}

impl ValueTransformer for ChatRewriter {
    fn transform(&self, value: &str) -> Result<String, Error> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &self.config.system_prompt,
                },
                Message {
                    role: "user",
                    content: value,
                },
            ],
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .map_err(|e| Error::transform_error("chat request failed", Some(Box::new(e))))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transform_error(
                format!("chat service returned {}", status),
                None,
            ));
        }

        let body: ChatResponse = response.json().map_err(|e| {
            Error::transform_error("failed to parse chat response", Some(Box::new(e)))
        })?;

        // An empty reply is handled by the resilient wrapper, which keeps
        // the original value.
        Ok(body
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or_default()
            .trim()
            .to_string())
    }

    fn name(&self) -> &str {
        "rewrite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> ChatConfig {
        ChatConfig {
            endpoint: endpoint.to_string(),
            model: "gpt-4.1-nano".to_string(),
            api_key: "test-key".to_string(),
            system_prompt: "Replace with nonsense.".to_string(),
            timeout: Duration::from_millis(200),
        }
    }

    #[test]
    fn test_client_builds_from_config() {
        assert!(ChatRewriter::new(config("https://example.invalid/v1/chat")).is_ok());
    }

    #[test]
    fn test_unreachable_endpoint_is_a_transform_error() {
        // Reserved TLD, never resolves; the request must fail fast and map
        // to a transform error rather than panic.
        let rewriter = ChatRewriter::new(config("https://example.invalid/v1/chat")).unwrap();
        let result = rewriter.transform("gwongdungyahn");
        assert!(matches!(result, Err(Error::Transform { .. })));
    }
}
