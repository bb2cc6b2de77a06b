//! The sequential scan over one pull request's changed files.
//!
//! One file is fully processed (loaded, possibly repaired, possibly written
//! back) before the next begins. Nothing is retried; the first error fails
//! the whole run, leaving already-repaired files on disk and posting no
//! comment.

use crate::ports::{PullRequestPort, WorkspaceFiles};
use anyhow::Context;
use camino::Utf8PathBuf;
use eolfix_domain::{is_text_filename, repair};
use eolfix_render::render_comment_md;
use eolfix_types::files::PER_PAGE;
use eolfix_types::outcome::ScanSummary;
use tracing::{debug, info};

/// Walk every changed-file page, repair non-compliant tracked text files in
/// place, and collect the repaired paths.
pub fn scan_changed_files(
    workspace: &dyn WorkspaceFiles,
    pr: &dyn PullRequestPort,
) -> anyhow::Result<ScanSummary> {
    let tracked = workspace
        .tracked_paths()
        .context("enumerate tracked files")?;
    let mut summary = ScanSummary::default();

    info!("looking for changed files");
    let mut page: u32 = 0;
    loop {
        page += 1;
        info!(page, "fetching changed files");
        let entries = pr
            .changed_files_page(page)
            .with_context(|| format!("list changed files page {page}"))?;
        let page_len = entries.len();
        debug!(page, entries = page_len, "changed files page");

        for entry in entries {
            summary.changed_total += 1;
            let path = Utf8PathBuf::from(&entry.filename);

            if !tracked.contains(&path) {
                info!(file = %path, "not tracked in the workspace, skipping");
                summary.skipped_untracked += 1;
                continue;
            }
            if !is_text_filename(path.as_str()) {
                info!(file = %path, "not a text file, skipping");
                summary.skipped_binary += 1;
                continue;
            }

            let contents = workspace
                .read_to_string(&path)
                .with_context(|| format!("read {path}"))?;
            match repair(&contents) {
                None => {
                    info!(file = %path, "already ends with a line break, skipping");
                    summary.already_compliant += 1;
                }
                Some(fixed) => {
                    info!(file = %path, "missing a line break at end of file, fixing");
                    workspace
                        .write_file(&path, &fixed)
                        .with_context(|| format!("write {path}"))?;
                    summary.repaired.push(path);
                }
            }
        }

        // A short page is the last one.
        if page_len < PER_PAGE {
            break;
        }
    }

    Ok(summary)
}

/// Run the whole pass: scan, then post the comment when anything was fixed.
pub fn run(
    workspace: &dyn WorkspaceFiles,
    pr: &dyn PullRequestPort,
) -> anyhow::Result<ScanSummary> {
    let summary = scan_changed_files(workspace, pr)?;

    if summary.repaired.is_empty() {
        info!("no files needed fixing, skipping comment");
        return Ok(summary);
    }

    info!(count = summary.repaired.len(), "leaving comment on pull request");
    let body = render_comment_md(&summary.repaired);
    debug!(body = %body, "comment body");
    pr.create_comment(&body)
        .context("create pull request comment")?;

    Ok(summary)
}
