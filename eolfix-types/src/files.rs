use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Page size of the changed-file listing. A page shorter than this ends
/// pagination.
pub const PER_PAGE: usize = 100;

/// One entry of the pull request's changed-file listing.
///
/// The API returns per-file change statistics as well; only the fields the
/// scanner consumes are modeled, everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangedFile {
    /// Path relative to the repository root, as reported by the API.
    pub filename: String,

    /// Change status ("added", "modified", "removed", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Repository coordinates in `owner/repo` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoords {
    pub owner: String,
    pub repo: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid repository '{input}': expected owner/repo")]
pub struct RepoCoordsError {
    input: String,
}

impl FromStr for RepoCoords {
    type Err = RepoCoordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RepoCoordsError {
            input: s.to_string(),
        };
        let (owner, repo) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for RepoCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_owner_and_repo() {
        let coords: RepoCoords = "octocat/hello-world".parse().unwrap();
        assert_eq!(coords.owner, "octocat");
        assert_eq!(coords.repo, "hello-world");
        assert_eq!(coords.to_string(), "octocat/hello-world");
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for input in ["", "owner", "/repo", "owner/", "a/b/c"] {
            assert!(input.parse::<RepoCoords>().is_err(), "{input:?}");
        }
    }
}
