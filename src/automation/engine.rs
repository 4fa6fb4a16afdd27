//! Automation engine: turns decoded requests into OS-level side effects
//!
//! Launches are fire-and-forget: success means the spawn call did not
//! error, never that the child ran to completion. Per-target failures are
//! recorded in the result and never escalate; nothing in here panics or
//! returns an error.

use crate::core::config::AppPaths;
use crate::llm::parser::{ActionRequest, AppTarget};
use std::process::Command;

const YOUTUBE_URL: &str = "https://youtube.com";
const GMAIL_URL: &str = "https://mail.google.com";
const NOTION_URL: &str = "https://notion.so";

/// Outcome of executing one request
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    /// The request ran; per-target launch outcomes in insertion order.
    /// Individual failures are recorded here, not escalated.
    Success { results: Vec<(String, bool)> },
    /// The payload named no recognized command; echoes the raw name
    UnknownAction { action: Option<String> },
    /// There was nothing to execute
    NoAction,
}

/// Executes automation requests against the local machine
pub struct AutomationEngine {
    paths: AppPaths,
}

impl AutomationEngine {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    /// Execute a decoded request, if any
    pub fn execute(&self, request: Option<&ActionRequest>) -> ExecutionResult {
        let Some(request) = request else {
            return ExecutionResult::NoAction;
        };

        match request {
            ActionRequest::OpenApps(apps) => ExecutionResult::Success {
                results: self.open_multiple(apps),
            },
            ActionRequest::LazyMode => ExecutionResult::Success {
                results: self.lazy_mode(),
            },
            ActionRequest::WorkMode => ExecutionResult::Success {
                results: self.work_mode(),
            },
            ActionRequest::DisableAlarms => ExecutionResult::Success {
                results: vec![("alarms".to_string(), self.disable_alarms())],
            },
            ActionRequest::EnableAlarms => ExecutionResult::Success {
                results: vec![("alarms".to_string(), self.enable_alarms())],
            },
            ActionRequest::Unrecognized(name) => ExecutionResult::UnknownAction {
                action: name.clone(),
            },
        }
    }

    /// Open an application by name
    ///
    /// Well-known web apps route to the default browser; otherwise the name
    /// resolves through the launch table or runs verbatim.
    pub fn open_app(&self, app_name: &str) -> bool {
        let lowered = app_name.to_lowercase();

        if let Some(url) = browser_target(&lowered) {
            // Navigation outcome is not observed
            if let Err(e) = open::that(url) {
                tracing::debug!(url, "browser open reported: {}", e);
            }
            return true;
        }

        let cmd = self.paths.resolve(&lowered).unwrap_or(app_name);
        self.launch_command(cmd)
    }

    /// Lazy day: Steam, Discord, YouTube, alarms off
    pub fn lazy_mode(&self) -> Vec<(String, bool)> {
        vec![
            ("steam".to_string(), self.open_app("steam")),
            ("discord".to_string(), self.open_app("discord")),
            ("youtube".to_string(), self.open_app("youtube")),
            ("alarms_disabled".to_string(), self.disable_alarms()),
        ]
    }

    /// Work: VS Code, Notion, Gmail
    pub fn work_mode(&self) -> Vec<(String, bool)> {
        vec![
            ("vscode".to_string(), self.open_app("vscode")),
            ("notion".to_string(), self.open_app("notion")),
            ("gmail".to_string(), self.open_app("gmail")),
        ]
    }

    /// Open several applications, collecting per-name outcomes in order
    pub fn open_multiple(&self, targets: &[AppTarget]) -> Vec<(String, bool)> {
        open_targets(targets, |name| self.open_app(name))
    }

    /// Placeholder until an OS notification hook exists
    pub fn disable_alarms(&self) -> bool {
        tracing::info!("alarms disabled (placeholder)");
        true
    }

    /// Placeholder until an OS notification hook exists
    pub fn enable_alarms(&self) -> bool {
        tracing::info!("alarms enabled (placeholder)");
        true
    }

    /// Spawn a launch command without waiting for it
    ///
    /// True iff the spawn call succeeded; the child's exit status is never
    /// observed, so a launch that fails later still reports true.
    fn launch_command(&self, cmd: &str) -> bool {
        match platform_command(cmd).spawn() {
            Ok(_child) => true,
            Err(e) => {
                tracing::warn!(command = cmd, "launch failed: {}", e);
                false
            }
        }
    }
}

/// Collect per-target outcomes in insertion order
///
/// Targets marked unlaunchable at decode time are recorded as failed
/// without calling the opener; a failed open never stops the rest of the
/// batch.
fn open_targets<F>(targets: &[AppTarget], mut open: F) -> Vec<(String, bool)>
where
    F: FnMut(&str) -> bool,
{
    targets
        .iter()
        .map(|target| {
            let ok = target.launchable && open(&target.name);
            (target.name.clone(), ok)
        })
        .collect()
}

/// Fixed browser destination for a lowercased app name, if it matches one
/// of the well-known web apps (substring match, so "check mail please"
/// still routes to Gmail)
pub fn browser_target(lowered_name: &str) -> Option<&'static str> {
    if lowered_name.contains("youtube") || lowered_name.contains("yt") {
        Some(YOUTUBE_URL)
    } else if lowered_name.contains("gmail") || lowered_name.contains("mail") {
        Some(GMAIL_URL)
    } else if lowered_name.contains("notion") {
        Some(NOTION_URL)
    } else {
        None
    }
}

#[cfg(target_os = "windows")]
fn platform_command(cmd: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", cmd]);
    command
}

#[cfg(target_os = "macos")]
fn platform_command(cmd: &str) -> Command {
    let mut command = Command::new("open");
    command.args(["-a", cmd]);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_command(cmd: &str) -> Command {
    use std::process::Stdio;
    let mut command = Command::new("sh");
    command
        .arg("-c")
        .arg(cmd)
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}
