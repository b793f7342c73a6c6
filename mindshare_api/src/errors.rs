//! Error types for the API client.

/// Errors that can occur when fetching a leaderboard page.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL could not be parsed.
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
    /// The HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}
