use eolfix_types::files::{ChangedFile, PER_PAGE, RepoCoords};
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("eolfix/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("github api returned {status} for {url}: {body}")]
    Status {
        status: StatusCode,
        url: String,
        body: String,
    },

    #[error("decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Minimal synchronous client for the two endpoints the scanner needs.
///
/// The run is strictly sequential, so a blocking client is the right shape;
/// nothing here coordinates concurrent requests.
pub struct GithubClient {
    http: Client,
    api_base: String,
    token: String,
    coords: RepoCoords,
}

impl GithubClient {
    /// Build a client for one repository.
    ///
    /// `api_base` is the REST root, e.g. `https://api.github.com`; a
    /// trailing slash is tolerated. A `User-Agent` header is always sent —
    /// the API rejects requests without one.
    pub fn new(
        api_base: impl Into<String>,
        token: impl Into<String>,
        coords: RepoCoords,
    ) -> Result<Self, GithubError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            api_base,
            token: token.into(),
            coords,
        })
    }

    fn files_url(&self, pr: u64) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/files",
            self.api_base, self.coords.owner, self.coords.repo, pr
        )
    }

    fn comments_url(&self, pr: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base, self.coords.owner, self.coords.repo, pr
        )
    }

    /// Fetch one page of the changed-file listing.
    ///
    /// Pages are numbered from 1 and hold up to [`PER_PAGE`] entries; the
    /// caller keeps requesting pages until one comes back short.
    pub fn list_changed_files(
        &self,
        pr: u64,
        page: u32,
    ) -> Result<Vec<ChangedFile>, GithubError> {
        let url = self.files_url(pr);
        let response = self
            .http
            .get(&url)
            .query(&[("page", page.to_string()), ("per_page", PER_PAGE.to_string())])
            .bearer_auth(&self.token)
            .send()?;
        let response = check_status(response, &url)?;

        let body = response.text()?;
        debug!(page, body = %body, "changed files response");
        let files = serde_json::from_str(&body).map_err(|source| GithubError::Decode {
            url,
            source,
        })?;
        Ok(files)
    }

    /// Create one comment on the pull request's issue thread.
    pub fn create_issue_comment(&self, pr: u64, body: &str) -> Result<(), GithubError> {
        let url = self.comments_url(pr);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({ "body": body }))
            .send()?;
        let response = check_status(response, &url)?;
        debug!(status = %response.status(), "created pull request comment");
        Ok(())
    }
}

fn check_status(response: Response, url: &str) -> Result<Response, GithubError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(GithubError::Status {
        status,
        url: url.to_string(),
        body,
    })
}
