//! Client for the remote repository-contents API.

use reqwest::header;
use tracing::warn;

use crate::models::ContentEntry;

/// Issues reads against the contents API.
///
/// One instance is built at startup and shared by every request; the inner
/// `reqwest::Client` pools connections across calls.
#[derive(Debug, Clone)]
pub struct ContentsClient {
    http: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl ContentsClient {
    pub fn new(api_base: String, token: Option<String>) -> reqwest::Result<Self> {
        // The API rejects requests that carry no User-Agent.
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base,
            token,
        })
    }

    /// Lists the entries under `path` in `repo` (empty `path` means the
    /// repository root).
    ///
    /// Failures are not surfaced: any transport, status, or decode error
    /// yields an empty list and a warning in the log, so callers see a
    /// missing directory and an erroring one identically.
    pub async fn list_contents(&self, repo: &str, path: &str) -> Vec<ContentEntry> {
        match self.fetch_contents(repo, path).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(repo, path, error = %err, "failed to list contents");
                Vec::new()
            }
        }
    }

    async fn fetch_contents(&self, repo: &str, path: &str) -> reqwest::Result<Vec<ContentEntry>> {
        let mut request = self.http.get(self.contents_url(repo, path));
        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {token}"));
        }

        request
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<ContentEntry>>()
            .await
    }

    /// Fetches the raw bytes of a file by its `download_url`. Unlike
    /// directory listings, failures here are the caller's to handle.
    pub async fn fetch_file(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.http.get(url).send().await?.error_for_status()
    }

    fn contents_url(&self, repo: &str, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/{}/contents", self.api_base, repo)
        } else {
            format!("{}/{}/contents/{}", self.api_base, repo, path)
        }
    }
}
