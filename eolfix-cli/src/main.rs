mod config;

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use config::AppConfig;
use eolfix_core::{FsWorkspace, GithubPullRequest};
use eolfix_github::{GithubClient, load_event};
use eolfix_types::files::RepoCoords;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "eolfix",
    version,
    about = "Repairs pull-request files that are missing a trailing line break."
)]
struct Cli {
    /// Checked-out workspace root.
    #[arg(long, env = "GITHUB_WORKSPACE")]
    workspace_root: Utf8PathBuf,

    /// API token used for the changed-file listing and the comment.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,

    /// Path to the JSON event payload written by the runner.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Utf8PathBuf,

    /// Name of the triggering event.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: String,

    /// Repository coordinates in owner/repo form.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: RepoCoords,

    /// Base URL of the REST API.
    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    api_url: String,
}

impl Cli {
    fn into_config(self) -> AppConfig {
        AppConfig {
            workspace_root: self.workspace_root,
            token: self.token,
            event_path: self.event_path,
            event_name: self.event_name,
            repository: self.repository,
            api_url: self.api_url,
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Cli::parse().into_config();

    if !config.is_pull_request_event() {
        info!(
            event = %config.event_name,
            "this tool runs for pushes to pull requests only, skipping"
        );
        return Ok(());
    }

    let event = load_event(&config.event_path)?;
    if !event.is_trigger_action() {
        info!(
            action = event.action.as_deref().unwrap_or("<none>"),
            "this tool runs for pushes to pull requests only, skipping"
        );
        return Ok(());
    }
    let number = event
        .number()
        .context("event payload has no pull_request.number")?;

    let client = GithubClient::new(&config.api_url, &config.token, config.repository.clone())?;
    let workspace = FsWorkspace::new(config.workspace_root.clone());
    let pr = GithubPullRequest::new(client, number);

    let summary = eolfix_core::run(&workspace, &pr)?;
    info!(
        repaired = summary.repaired.len(),
        changed = summary.changed_total,
        "scan complete"
    );
    Ok(())
}
