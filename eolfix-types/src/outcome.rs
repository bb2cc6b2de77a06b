use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Result of one scan over a pull request's changed files.
///
/// The repair result set lives and dies with the run; it is built up while
/// scanning, read once to render the comment, then dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Paths rewritten during the run, in processing order. The comment
    /// lists paths in exactly this order.
    #[serde(default)]
    pub repaired: Vec<Utf8PathBuf>,

    /// Changed entries skipped because they are not tracked in the workspace.
    #[serde(default)]
    pub skipped_untracked: u64,

    /// Changed entries skipped by the text/binary heuristic.
    #[serde(default)]
    pub skipped_binary: u64,

    /// Files that already ended with a line break.
    #[serde(default)]
    pub already_compliant: u64,

    /// Total changed entries seen across all pages.
    #[serde(default)]
    pub changed_total: u64,
}
