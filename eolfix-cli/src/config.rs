//! Explicit run configuration.
//!
//! Every ambient input is bound here exactly once at startup and passed by
//! reference from then on; nothing below `main` reads the process
//! environment.

use camino::Utf8PathBuf;
use eolfix_types::event::TRIGGER_EVENT;
use eolfix_types::files::RepoCoords;

/// Everything the run consumes from the hosting environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Checked-out workspace root.
    pub workspace_root: Utf8PathBuf,

    /// API token used for both outbound calls.
    pub token: String,

    /// Path to the JSON event payload written by the runner.
    pub event_path: Utf8PathBuf,

    /// Name of the triggering event, e.g. "pull_request" or "push".
    pub event_name: String,

    /// Repository coordinates in `owner/repo` form.
    pub repository: RepoCoords,

    /// Base URL of the REST API.
    pub api_url: String,
}

impl AppConfig {
    /// True when the triggering event is a pull-request event at all.
    ///
    /// The action-level gate needs the payload and happens after this one.
    pub fn is_pull_request_event(&self) -> bool {
        self.event_name == TRIGGER_EVENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(event_name: &str) -> AppConfig {
        AppConfig {
            workspace_root: Utf8PathBuf::from("/workspace"),
            token: "t".to_string(),
            event_path: Utf8PathBuf::from("/event.json"),
            event_name: event_name.to_string(),
            repository: "octocat/hello-world".parse().expect("coords"),
            api_url: "https://api.github.com".to_string(),
        }
    }

    #[test]
    fn only_pull_request_events_pass_the_gate() {
        assert!(config("pull_request").is_pull_request_event());
        assert!(!config("push").is_pull_request_event());
        assert!(!config("workflow_dispatch").is_pull_request_event());
    }
}
