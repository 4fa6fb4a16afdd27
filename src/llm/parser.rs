//! Extract structured automation requests from free-form assistant replies
//!
//! The model is instructed to embed at most one fenced JSON block in its
//! reply. Extraction is deliberately forgiving: a malformed block and a
//! missing block are the same outcome (no action), and payloads that parse
//! but name nothing we recognize are carried through so the engine can
//! report them rather than silently dropping them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const TAGGED_FENCE: &str = "```json";
const FENCE: &str = "```";

/// A decoded automation request
///
/// The five recognized commands plus a catch-all carrying the raw action
/// name, so unknown requests survive to the engine's status report.
/// One entry in an `open_apps` list
///
/// Items that weren't strings in the payload keep their JSON rendering as
/// the display name but are never launched; the engine records them as
/// failed targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppTarget {
    pub name: String,
    pub launchable: bool,
}

impl AppTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            launchable: true,
        }
    }

    pub fn invalid(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            launchable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActionRequest {
    /// Open each named application in order
    OpenApps(Vec<AppTarget>),
    /// Steam + Discord + YouTube, alarms off
    LazyMode,
    /// VS Code + Notion + Gmail
    WorkMode,
    DisableAlarms,
    EnableAlarms,
    /// Parsed fine but named no recognized command (or failed its value
    /// constraint); holds the raw action name when one was present
    Unrecognized(Option<String>),
}

impl ActionRequest {
    /// Decode a parsed JSON payload into a request
    ///
    /// `None` means "nothing to do": null or an empty object. Everything
    /// else decodes to some variant; this never fails.
    pub fn from_value(value: &Value) -> Option<ActionRequest> {
        match value {
            Value::Null => return None,
            Value::Object(map) if map.is_empty() => return None,
            _ => {}
        }

        let name = value.get("action").and_then(Value::as_str);
        let payload = value.get("value").unwrap_or(&Value::Null);

        let request = match (name, payload) {
            (Some("open_apps"), Value::Array(items)) => {
                let apps = items
                    .iter()
                    .map(|item| match item.as_str() {
                        Some(s) => AppTarget::new(s),
                        None => AppTarget::invalid(item.to_string()),
                    })
                    .collect();
                ActionRequest::OpenApps(apps)
            }
            (Some("lazy_mode"), v) if is_truthy(v) => ActionRequest::LazyMode,
            (Some("work_mode"), v) if is_truthy(v) => ActionRequest::WorkMode,
            (Some("disable_alarms"), v) if is_truthy(v) => ActionRequest::DisableAlarms,
            (Some("enable_alarms"), v) if is_truthy(v) => ActionRequest::EnableAlarms,
            _ => ActionRequest::Unrecognized(name.map(str::to_owned)),
        };
        Some(request)
    }
}

/// JSON truthiness: null, false, 0, "", [] and {} are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Extract the action request embedded in an assistant reply, if any
///
/// Looks for a ```json fence first, then a bare ``` fence. Only the first
/// block is considered; a block that fails to parse or is never closed
/// yields no action, the same as no block at all.
pub fn extract_action(message: &str) -> Option<ActionRequest> {
    let body = if let Some(start) = message.find(TAGGED_FENCE) {
        fenced_body(&message[start + TAGGED_FENCE.len()..])?
    } else if let Some(start) = message.find(FENCE) {
        fenced_body(&message[start + FENCE.len()..])?
    } else {
        return None;
    };

    let value: Value = serde_json::from_str(body.trim()).ok()?;
    ActionRequest::from_value(&value)
}

/// Body of a fenced block, up to the closing fence; an unclosed block has
/// no body
fn fenced_body(rest: &str) -> Option<&str> {
    rest.find(FENCE).map(|end| &rest[..end])
}

/// The display text for a reply: everything before the first fence, trimmed
pub fn clean_response(message: &str) -> &str {
    match message.find(FENCE) {
        Some(idx) => message[..idx].trim(),
        None => message.trim(),
    }
}
