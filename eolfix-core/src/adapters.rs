//! Default port implementations: the real filesystem and the GitHub API.

use crate::ports::{PullRequestPort, WorkspaceFiles};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use eolfix_github::GithubClient;
use eolfix_types::files::ChangedFile;
use fs_err as fs;
use glob::glob;
use std::collections::BTreeSet;
use tracing::debug;

/// Filesystem-backed workspace access rooted at the checkout directory.
#[derive(Debug, Clone)]
pub struct FsWorkspace {
    root: Utf8PathBuf,
}

impl FsWorkspace {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    fn abs(&self, rel: &Utf8Path) -> Utf8PathBuf {
        self.root.join(rel)
    }
}

impl WorkspaceFiles for FsWorkspace {
    fn tracked_paths(&self) -> anyhow::Result<BTreeSet<Utf8PathBuf>> {
        let pattern = self.root.join("**/*");
        debug!(pattern = %pattern, "enumerating workspace files");

        let mut out = BTreeSet::new();
        for entry in glob(pattern.as_str()).context("glob workspace files")? {
            let path = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
            if !path.is_file() {
                continue;
            }
            let path = Utf8PathBuf::from_path_buf(path)
                .map_err(|p| anyhow::anyhow!("non-utf8 path {}", p.display()))?;
            let rel = path
                .strip_prefix(&self.root)
                .unwrap_or(&path)
                .to_path_buf();
            out.insert(rel);
        }
        Ok(out)
    }

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String> {
        let abs = self.abs(rel);
        fs::read_to_string(&abs).with_context(|| format!("read {}", abs))
    }

    fn write_file(&self, rel: &Utf8Path, contents: &str) -> anyhow::Result<()> {
        let abs = self.abs(rel);
        fs::write(&abs, contents).with_context(|| format!("write {}", abs))
    }
}

/// One pull request on GitHub, addressed through [`GithubClient`].
pub struct GithubPullRequest {
    client: GithubClient,
    number: u64,
}

impl GithubPullRequest {
    pub fn new(client: GithubClient, number: u64) -> Self {
        Self { client, number }
    }
}

impl PullRequestPort for GithubPullRequest {
    fn changed_files_page(&self, page: u32) -> anyhow::Result<Vec<ChangedFile>> {
        Ok(self.client.list_changed_files(self.number, page)?)
    }

    fn create_comment(&self, body: &str) -> anyhow::Result<()> {
        Ok(self.client.create_issue_comment(self.number, body)?)
    }
}
