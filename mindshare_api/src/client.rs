//! HTTP client for the leaderboard endpoint.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::{
    query::{LeaderboardQuery, Query},
    Error,
};

/// Production leaderboard endpoint.
pub const DEFAULT_BASE_URL: &str = "https://leaderboard-bice-mu.vercel.app/api/zama";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the leaderboard API.
///
/// A single `reqwest::Client` is shared across requests. Timeout policy lives
/// here; callers see a failed page as an [`Error`] and decide what to do.
pub struct Client {
    http: reqwest::Client,
    /// Full endpoint URL, query parameters are appended per request.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production leaderboard endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom endpoint URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mindshare/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build configured HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self {
            http,
            base_api_url: base_url.to_string(),
        }
    }

    /// Returns the endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(format!("{}: {}", self.base_api_url, e))
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches one leaderboard page and returns the parsed JSON body as-is.
    pub async fn get_leaderboard_page(&self, query: &LeaderboardQuery) -> Result<Value, Error> {
        let url = self.get_url(query)?;
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get leaderboard page: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| {
            tracing::error!(
                "Failed to parse leaderboard page: {} | body: {}",
                e,
                truncate_body(&body)
            );
            Error::Decode(e.to_string())
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
