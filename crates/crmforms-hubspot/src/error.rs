//! Internal error types for HubSpot operations.
//!
//! These errors are mapped to core port errors at the boundary; only
//! client construction surfaces them directly.

use thiserror::Error;

/// Result type alias for HubSpot operations.
pub type HubSpotResult<T> = Result<T, HubSpotError>;

/// Errors related to HubSpot API operations.
#[derive(Debug, Error)]
pub enum HubSpotError {
    /// API request failed with an HTTP error status.
    #[error("HubSpot API request failed with status {status}: {url}{}", detail(.message.as_deref()))]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// `message` field of the error body, when there was one
        message: Option<String>,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from HubSpot API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The identifier would not address a single object.
    #[error("Invalid object id: {id:?}")]
    InvalidObjectId {
        /// Rejected identifier
        id: String,
    },

    /// The access token cannot be sent as a header value.
    #[error("Access token contains characters not allowed in a header")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

fn detail(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}
