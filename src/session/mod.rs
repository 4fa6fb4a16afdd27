//! Session controller: one conversational turn at a time
//!
//! Owns the append-only conversation history and orchestrates a turn:
//! user text -> chat service -> action extraction -> cleaned reply. A turn
//! never fails; service trouble degrades to a canned reply with no action.

use crate::core::error::SidekickError;
use crate::llm::client::{ChatMessage, OllamaClient};
use crate::llm::parser::{clean_response, extract_action, ActionRequest};

/// Persona instruction sent as the system message on every turn
const PERSONA_PROMPT: &str = r#"You are Sidekick, a chill, funny, slightly sarcastic assistant with a "dude" personality.
You talk casually like a smart friend and help with computer automation - opening apps, managing workflows.

When a user asks you to do something, respond conversationally AND include a JSON action block.

Available commands:
- open_apps: ["app1", "app2"] - Opens applications
- lazy_mode: true - Lazy day mode (Steam, Discord, YouTube, alarms off)
- work_mode: true - Work mode (VS Code, Notion, Gmail)
- disable_alarms: true - Disables system alarms
- enable_alarms: true - Enables system alarms

Example response:
"Yo dude, let's get that lazy day started!"
```json
{"action": "lazy_mode", "value": true}
```

Always be chill, supportive, and a bit sarcastic. Keep it real."#;

const UNREACHABLE_REPLY: &str =
    "Yo dude, I can't reach the model server. Make sure Ollama is running with 'ollama serve'!";

/// What one turn produced: the text to show and any extracted request
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub reply: String,
    pub action: Option<ActionRequest>,
}

/// Drives the conversation with the chat service
pub struct Session {
    client: OllamaClient,
    history: Vec<ChatMessage>,
}

impl Session {
    pub fn new(client: OllamaClient) -> Self {
        Self {
            client,
            history: Vec::new(),
        }
    }

    /// Run one turn: send the history plus the new user message, record the
    /// raw reply, and extract any action from it
    ///
    /// When the service is unreachable the history keeps the user message
    /// but no assistant entry, and the caller gets a canned reply.
    pub async fn turn(&mut self, user_text: &str) -> TurnOutcome {
        self.history.push(ChatMessage::user(user_text));

        let mut messages = Vec::with_capacity(self.history.len() + 1);
        messages.push(ChatMessage::system(PERSONA_PROMPT));
        messages.extend_from_slice(&self.history);

        match self.client.chat(&messages).await {
            Ok(raw_reply) => {
                self.history.push(ChatMessage::assistant(raw_reply.clone()));
                TurnOutcome {
                    reply: clean_response(&raw_reply).to_string(),
                    action: extract_action(&raw_reply),
                }
            }
            Err(SidekickError::Unreachable(detail)) => {
                tracing::warn!("chat service unreachable: {}", detail);
                TurnOutcome {
                    reply: UNREACHABLE_REPLY.to_string(),
                    action: None,
                }
            }
            Err(e) => TurnOutcome {
                reply: format!("Damn, something went wrong: {}", e),
                action: None,
            },
        }
    }

    /// Clear the conversation history
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_empty_history() {
        let session = Session::new(OllamaClient::new("http://127.0.0.1:9", "llama2"));
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_service_degrades_gracefully() {
        // Nothing listens on the discard port, so the connect fails fast
        let mut session = Session::new(OllamaClient::new("http://127.0.0.1:9", "llama2"));
        let outcome = session.turn("open discord").await;

        assert!(outcome.action.is_none());
        assert!(outcome.reply.contains("can't reach") || outcome.reply.contains("went wrong"));

        // The user message stays; no assistant entry for the failed exchange
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, "user");
    }

    #[tokio::test]
    async fn test_reset_clears_history() {
        let mut session = Session::new(OllamaClient::new("http://127.0.0.1:9", "llama2"));
        session.turn("hey").await;
        assert!(!session.history().is_empty());
        session.reset();
        assert!(session.history().is_empty());
    }
}
