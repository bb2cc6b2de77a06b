use serde::{Deserialize, Serialize};

/// The only event kind a scan runs for.
pub const TRIGGER_EVENT: &str = "pull_request";

/// Event actions that trigger a scan. Anything else is a clean no-op.
pub const TRIGGER_ACTIONS: &[&str] = &["opened", "synchronize"];

/// The slice of the webhook payload the scanner cares about.
///
/// The runner writes the full payload to disk; only the action and the
/// pull-request number are consumed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestEvent {
    /// Event action, e.g. "opened", "synchronize", "closed".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
}

/// The pull request the payload refers to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub number: u64,
}

impl PullRequestEvent {
    /// True when the payload's action is one the scanner runs for.
    pub fn is_trigger_action(&self) -> bool {
        self.action
            .as_deref()
            .is_some_and(|a| TRIGGER_ACTIONS.contains(&a))
    }

    /// The pull-request number, if the payload carries one.
    pub fn number(&self) -> Option<u64> {
        self.pull_request.as_ref().map(|pr| pr.number)
    }
}
