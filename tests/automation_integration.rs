//! Integration tests for the reply-to-side-effect pipeline

use sidekick::automation::{AutomationEngine, ExecutionResult};
use sidekick::core::config::AppPaths;
use sidekick::llm::parser::{clean_response, extract_action, ActionRequest, AppTarget};

fn engine() -> AutomationEngine {
    // Commands that exist everywhere Unix, so spawns stay harmless
    AutomationEngine::new(AppPaths::new("true", "true", "true"))
}

fn result_keys(result: &ExecutionResult) -> Vec<String> {
    match result {
        ExecutionResult::Success { results } => {
            results.iter().map(|(name, _)| name.clone()).collect()
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn test_reply_with_lazy_mode_block_executes() {
    let reply = "Yo dude, lazy day coming up!\n```json\n{\"action\": \"lazy_mode\", \"value\": true}\n```";

    assert_eq!(clean_response(reply), "Yo dude, lazy day coming up!");

    let action = extract_action(reply).expect("fenced block should decode");
    assert_eq!(action, ActionRequest::LazyMode);

    let result = engine().execute(Some(&action));
    assert_eq!(
        result_keys(&result),
        ["steam", "discord", "youtube", "alarms_disabled"]
    );
}

#[test]
fn test_reply_with_open_apps_block() {
    let reply = concat!(
        "On it!\n",
        "```json\n",
        "{\"action\": \"open_apps\", \"value\": [\"youtube\", \"gmail\", \"notion\"]}\n",
        "```\n",
        "Anything else?",
    );

    let action = extract_action(reply).expect("fenced block should decode");
    let result = engine().execute(Some(&action));
    assert_eq!(result_keys(&result), ["youtube", "gmail", "notion"]);

    // All three are browser targets, which report success unconditionally
    if let ExecutionResult::Success { results } = &result {
        assert!(results.iter().all(|(_, ok)| *ok));
    }
}

#[test]
fn test_partial_failure_keeps_status_success() {
    // The non-string item decodes to a target that can never launch
    let reply = concat!(
        "Let me try.\n",
        "```json\n",
        "{\"action\": \"open_apps\", \"value\": [\"youtube\", 3, \"notion\"]}\n",
        "```",
    );

    let action = extract_action(reply).expect("fenced block should decode");
    match engine().execute(Some(&action)) {
        ExecutionResult::Success { results } => {
            assert_eq!(
                results,
                vec![
                    ("youtube".to_string(), true),
                    ("3".to_string(), false),
                    ("notion".to_string(), true),
                ]
            );
        }
        other => panic!("one failed target must not change the status: {:?}", other),
    }
}

#[test]
fn test_unknown_payload_flows_to_status_report() {
    let reply = "Hmm, trying something:\n```json\n{\"action\": \"bogus\", \"value\": true}\n```";

    let action = extract_action(reply).expect("fenced block should decode");
    assert_eq!(
        engine().execute(Some(&action)),
        ExecutionResult::UnknownAction {
            action: Some("bogus".to_string())
        }
    );
}

#[test]
fn test_chatty_reply_produces_no_execution() {
    let reply = "Nah dude, nothing to open here. Just vibes.";
    assert!(extract_action(reply).is_none());
    assert_eq!(engine().execute(None), ExecutionResult::NoAction);
}

#[test]
fn test_malformed_block_and_missing_block_are_equivalent() {
    let malformed = "Sure!\n```json\n{\"action\": \"work_mode\",\n```";
    let missing = "Sure!";
    assert_eq!(extract_action(malformed), None);
    assert_eq!(extract_action(missing), None);
}

#[test]
fn test_empty_object_payload_is_no_action() {
    let reply = "Did nothing:\n```json\n{}\n```";
    let action = extract_action(reply);
    assert!(action.is_none());
    assert_eq!(engine().execute(action.as_ref()), ExecutionResult::NoAction);
}

#[test]
fn test_repeated_execution_yields_identical_key_sets() {
    let request =
        ActionRequest::OpenApps(vec![AppTarget::new("notion"), AppTarget::new("youtube")]);
    let eng = engine();
    assert_eq!(
        result_keys(&eng.execute(Some(&request))),
        result_keys(&eng.execute(Some(&request)))
    );
}
