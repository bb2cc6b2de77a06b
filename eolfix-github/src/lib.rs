//! GitHub REST boundary: event-payload loading and the two API calls the
//! scanner drives (paginated changed-file listing, issue comment creation).
//!
//! Every call is attempted exactly once; there is no retry or backoff
//! anywhere. Failures surface as errors and fail the whole run.

mod client;
mod event;

pub use client::{GithubClient, GithubError};
pub use event::load_event;
