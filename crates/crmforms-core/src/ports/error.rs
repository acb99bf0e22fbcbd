//! Error types for remote object port operations.

use thiserror::Error;

/// Errors from remote object port operations.
///
/// These are domain-level errors that handlers can branch on.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum ObjectPortError {
    /// The collection or object does not exist.
    #[error("Not found: {}", describe_target(.collection, .id.as_deref()))]
    NotFound {
        /// Collection that was addressed
        collection: String,
        /// Object identifier, when a single object was addressed
        id: Option<String>,
    },

    /// The credential was missing, invalid or lacks the required scopes.
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Upstream explanation
        message: String,
    },

    /// The remote service rejected the submitted properties.
    #[error("Rejected by the remote service: {message}")]
    ValidationRejected {
        /// Upstream explanation
        message: String,
    },

    /// Remote rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// Network failure or an unexpected upstream status.
    #[error("Network error: {message}")]
    Network {
        /// Description of the failure
        message: String,
    },

    /// The remote service answered with something unparsable.
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Client configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl ObjectPortError {
    /// Whether retrying the same call later could succeed.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::RateLimited | Self::Network { .. })
    }
}

fn describe_target(collection: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("{collection}/{id}"),
        None => collection.to_string(),
    }
}

/// Result type alias for remote object port operations.
pub type ObjectPortResult<T> = Result<T, ObjectPortError>;
