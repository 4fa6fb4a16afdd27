//! Async client for an Ollama-compatible chat API
//!
//! Speaks the `/api/chat` protocol with streaming disabled: one request
//! carrying the whole conversation, one JSON reply. Connection-level
//! failures map to a distinct error variant so the session can degrade to a
//! canned reply instead of aborting the turn.

use crate::core::error::{Result, SidekickError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama2";

/// Upper bound on one chat completion; exceeding it is a generic LLM
/// failure, not a distinct timeout kind.
const CHAT_TIMEOUT: Duration = Duration::from_secs(60);

/// Time limit for the startup reachability probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// One entry in the conversation sent to the chat API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".into(),
            content: content.into(),
        }
    }
}

/// Async chat client
pub struct OllamaClient {
    client: Client,
    host: String,
    model: String,
}

impl OllamaClient {
    /// Create a client with an explicit host and model
    pub fn new(host: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            host: host.into(),
            model: model.into(),
        }
    }

    /// Create a client from environment variables
    ///
    /// Optional: OLLAMA_HOST (defaults to the local Ollama port)
    /// Optional: OLLAMA_MODEL (defaults to llama2)
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("OLLAMA_HOST").unwrap_or_else(|_| DEFAULT_HOST.into()),
            std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        )
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the conversation to the chat API and return the assistant's
    /// raw reply text
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.host))
            .timeout(CHAT_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SidekickError::LlmError(format!(
                "API error: {}",
                error_text
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| SidekickError::LlmError(e.to_string()))?;

        Ok(completion.message.content)
    }

    /// Lightweight reachability check against the model listing endpoint
    pub async fn probe(&self) -> bool {
        self.client
            .get(format!("{}/api/tags", self.host))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

/// Connect failures get their own variant; everything else (timeouts,
/// protocol errors) is a generic LLM failure.
fn classify_send_error(err: reqwest::Error) -> SidekickError {
    if err.is_connect() {
        SidekickError::Unreachable(err.to_string())
    } else {
        SidekickError::LlmError(err.to_string())
    }
}

// Ollama /api/chat wire format
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OllamaClient::new("http://example.com:11434", "test-model");
        assert_eq!(client.host(), "http://example.com:11434");
        assert_eq!(client.model(), "test-model");
    }

    #[test]
    fn test_message_roles() {
        assert_eq!(ChatMessage::system("a").role, "system");
        assert_eq!(ChatMessage::user("b").role, "user");
        assert_eq!(ChatMessage::assistant("c").role, "assistant");
    }

    #[test]
    fn test_request_serialization() {
        let messages = vec![ChatMessage::user("hi")];
        let request = ChatRequest {
            model: "llama2",
            messages: &messages,
            stream: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "llama2");
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
    }

    #[tokio::test]
    async fn test_probe_unreachable_host() {
        // Port 9 (discard) is never an Ollama server
        let client = OllamaClient::new("http://127.0.0.1:9", "llama2");
        assert!(!client.probe().await);
    }
}
