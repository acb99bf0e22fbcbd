//! HubSpot client for the CRM v3 objects endpoints.
//!
//! This module provides the main client interface. The object operations
//! themselves live in `objects.rs`.

mod objects;

use crate::config::HubSpotClientConfig;
use crate::error::HubSpotResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::ClientSettings;
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default HubSpot client using the reqwest HTTP backend.
pub type DefaultHubSpotClient = HubSpotClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the HubSpot CRM objects API.
///
/// This client is generic over an HTTP backend, allowing for easy testing.
/// Use `DefaultHubSpotClient` for production code. The generic parameter `B`
/// is an implementation detail - external code should go through
/// `ObjectClientPort`.
pub struct HubSpotClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) settings: ClientSettings,
}

impl DefaultHubSpotClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails when the base URL does not parse or the token cannot be sent
    /// as a header.
    pub fn new(config: &HubSpotClientConfig) -> HubSpotResult<Self> {
        let settings = Self::to_settings(config)?;
        let backend = ReqwestBackend::new(&settings)?;
        Ok(Self { backend, settings })
    }

    fn to_settings(config: &HubSpotClientConfig) -> HubSpotResult<ClientSettings> {
        Ok(ClientSettings {
            base_url: Url::parse(&config.base_url)?,
            token: config.token.clone(),
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
        })
    }
}

impl<B: HttpBackend> HubSpotClient<B> {
    /// Create a new client with a custom backend.
    ///
    /// Use this for testing with a fake backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(settings: ClientSettings, backend: B) -> Self {
        Self { backend, settings }
    }
}
