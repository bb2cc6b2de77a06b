//! Embeddable scan pipeline for eolfix (clap-free, port-driven).
//!
//! All filesystem and API access goes through the port traits, so the scan
//! loop can be exercised against in-memory stubs.

mod adapters;
mod ports;
mod scan;

pub use adapters::{FsWorkspace, GithubPullRequest};
pub use ports::{PullRequestPort, WorkspaceFiles};
pub use scan::{run, scan_changed_files};
