//! Port traits abstracting all I/O away from the scan loop.

use camino::{Utf8Path, Utf8PathBuf};
use eolfix_types::files::ChangedFile;
use std::collections::BTreeSet;

/// Read/write access to the checked-out workspace.
pub trait WorkspaceFiles {
    /// Every tracked (regular, non-directory) file, workspace-relative.
    fn tracked_paths(&self) -> anyhow::Result<BTreeSet<Utf8PathBuf>>;

    fn read_to_string(&self, rel: &Utf8Path) -> anyhow::Result<String>;

    /// Replace the file's contents in place.
    fn write_file(&self, rel: &Utf8Path, contents: &str) -> anyhow::Result<()>;
}

/// The slice of the pull-request API the scanner drives.
pub trait PullRequestPort {
    /// One page of the changed-file listing. Pages are numbered from 1 and
    /// hold up to [`eolfix_types::files::PER_PAGE`] entries.
    fn changed_files_page(&self, page: u32) -> anyhow::Result<Vec<ChangedFile>>;

    /// Post the summary comment. Called at most once per run.
    fn create_comment(&self, body: &str) -> anyhow::Result<()>;
}
