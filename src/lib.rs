//! Sidekick - Chat-Driven Desktop Assistant

pub mod automation;
pub mod core;
pub mod llm;
pub mod session;
