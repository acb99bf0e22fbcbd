//! Public configuration for the HubSpot client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal settings are derived from this.

use std::fmt;
use std::time::Duration;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Configuration for the HubSpot client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use crmforms_hubspot::HubSpotClientConfig;
/// use std::time::Duration;
///
/// let config = HubSpotClientConfig::new("pat-na1-xxxx")
///     .with_timeout(Duration::from_secs(20))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Clone)]
pub struct HubSpotClientConfig {
    /// Base URL of the API host
    pub(crate) base_url: String,
    /// Private app access token sent as a bearer credential
    pub(crate) token: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout, `None` keeps the transport default
    pub(crate) timeout: Option<Duration>,
}

impl HubSpotClientConfig {
    /// Create a configuration for the production API with `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            user_agent: concat!("crmforms/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }

    /// Set the API base URL.
    ///
    /// Defaults to `https://api.hubapi.com`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a request timeout.
    ///
    /// Without one, requests wait as long as the transport allows.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// Keeps the token out of logs.
impl fmt::Debug for HubSpotClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubSpotClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HubSpotClientConfig::new("secret");
        assert_eq!(config.base_url, "https://api.hubapi.com");
        assert_eq!(config.token, "secret");
        assert!(config.user_agent.starts_with("crmforms/"));
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = HubSpotClientConfig::new("secret")
            .with_base_url("http://127.0.0.1:4010")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(60));

        assert_eq!(config.base_url(), "http://127.0.0.1:4010");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = HubSpotClientConfig::new("pat-na1-very-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
