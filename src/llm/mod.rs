//! LLM integration: chat transport and action extraction
//!
//! Raw reply text flows: OllamaClient -> extract_action -> ActionRequest,
//! with clean_response producing the text shown to the user.

pub mod client;
pub mod parser;

pub use client::{ChatMessage, OllamaClient};
pub use parser::{clean_response, extract_action, ActionRequest, AppTarget};
