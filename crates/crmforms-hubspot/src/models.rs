//! Internal API types for the HubSpot CRM objects endpoints.
//!
//! These types are internal to `crmforms-hubspot`. Consumers see
//! `RemoteObject` from `crmforms-core`.

use std::time::Duration;

use crmforms_core::PropertyBag;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Settings (used internally, see config.rs for public config)
// ============================================================================

/// Internal settings derived from `HubSpotClientConfig`.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Parsed API base URL
    pub base_url: Url,
    /// Bearer credential
    pub token: String,
    /// User agent string
    pub user_agent: String,
    /// Optional request timeout
    pub timeout: Option<Duration>,
}

#[cfg(test)]
impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(crate::config::DEFAULT_BASE_URL).expect("default URL is valid"),
            token: "test-token".to_string(),
            user_agent: "crmforms-test".to_string(),
            timeout: None,
        }
    }
}

// ============================================================================
// Request / response bodies
// ============================================================================

/// Body of create and update requests.
#[derive(Debug, Serialize)]
pub struct WriteRequest<'a> {
    pub properties: &'a PropertyBag,
}

/// A single object as returned by get, create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub properties: PropertyBag,
}

/// One page of a list response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub results: Vec<ObjectResponse>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl ListResponse {
    /// Whether the remote service has further pages.
    pub fn has_more(&self) -> bool {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_ref())
            .is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<NextPage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextPage {
    pub after: String,
}

/// Error body HubSpot sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Extract the human-readable message from an error body.
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.is_empty())
}
