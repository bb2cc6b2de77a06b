use anyhow::Context;
use camino::Utf8Path;
use eolfix_types::event::PullRequestEvent;
use fs_err as fs;
use tracing::debug;

/// Load and parse the webhook payload the runner wrote to disk.
///
/// Unreadable or malformed payloads are run-wide failures; the payload is
/// the only source of the pull-request number.
pub fn load_event(path: &Utf8Path) -> anyhow::Result<PullRequestEvent> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("read event payload {}", path))?;
    debug!(payload = %raw, "event payload");
    let event: PullRequestEvent =
        serde_json::from_str(&raw).with_context(|| format!("parse event payload {}", path))?;
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn write_payload(dir: &TempDir, contents: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join("event.json")).expect("utf8");
        std::fs::write(&path, contents).expect("write payload");
        path
    }

    #[test]
    fn loads_action_and_number() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_payload(
            &temp,
            r#"{ "action": "opened", "pull_request": { "number": 12 } }"#,
        );

        let event = load_event(&path).expect("load event");
        assert_eq!(event.action.as_deref(), Some("opened"));
        assert_eq!(event.number(), Some(12));
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("absent.json")).expect("utf8");
        let err = load_event(&path).expect_err("missing payload");
        assert!(err.to_string().contains("read event payload"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_payload(&temp, "{ not json");
        let err = load_event(&path).expect_err("malformed payload");
        assert!(err.to_string().contains("parse event payload"));
    }
}
