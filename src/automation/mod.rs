//! System automation: opening applications, presets, alarm toggles

pub mod engine;

pub use engine::{browser_target, AutomationEngine, ExecutionResult};
