//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation failures.
#[derive(Debug)]
pub enum MindshareError {
    /// An error from the underlying API client.
    Api(mindshare_api::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl MindshareError {
    /// True when the caller supplied bad input rather than something failing on our side.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl fmt::Display for MindshareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::InvalidInput(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for MindshareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<mindshare_api::Error> for MindshareError {
    fn from(e: mindshare_api::Error) -> Self {
        Self::Api(e)
    }
}
