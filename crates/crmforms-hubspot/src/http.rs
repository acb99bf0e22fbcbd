//! HTTP backend abstraction for the HubSpot API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest and performs exactly one request per call.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{HubSpotError, HubSpotResult};
use crate::models::{ClientSettings, parse_error_message};

/// Methods used for writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    /// Create
    Post,
    /// Partial update
    Patch,
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that exchange JSON with the API.
///
/// This is an implementation detail - external code should use the
/// `ObjectClientPort` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// `GET` a URL and deserialize the JSON response.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HubSpotResult<T>;

    /// Send a JSON body with `method` and deserialize the JSON response.
    async fn send_json<B, T>(&self, method: WriteMethod, url: &Url, body: &B) -> HubSpotResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Every request carries the bearer credential and a JSON content type.
/// There is no retry: a failed request is reported to the caller as is.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given settings.
    pub fn new(settings: &ClientSettings) -> HubSpotResult<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Turn a response into JSON, or into an error for non-2xx statuses.
    async fn read_json<T: DeserializeOwned>(
        response: reqwest::Response,
        url: &Url,
    ) -> HubSpotResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HubSpotError::ApiRequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
                message: parse_error_message(&body),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> HubSpotResult<T> {
        let response = self.client.get(url.as_str()).send().await?;
        Self::read_json(response, url).await
    }

    async fn send_json<B, T>(&self, method: WriteMethod, url: &Url, body: &B) -> HubSpotResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let request = match method {
            WriteMethod::Post => self.client.post(url.as_str()),
            WriteMethod::Patch => self.client.patch(url.as_str()),
        };
        let response = request.json(body).send().await?;
        Self::read_json(response, url).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reqwest_backend_creation() {
        let backend = ReqwestBackend::new(&ClientSettings::default());
        assert!(backend.is_ok());
    }

    #[test]
    fn test_reqwest_backend_rejects_bad_token() {
        let settings = ClientSettings {
            token: "line\nbreak".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            ReqwestBackend::new(&settings),
            Err(HubSpotError::InvalidToken(_))
        ));
    }

    mod fake_backend_tests {
        use super::super::testing::*;
        use super::super::*;
        use serde_json::json;

        #[tokio::test]
        async fn test_fake_backend_returns_canned_response() {
            let backend = FakeBackend::new().with_response(
                "objects/cars",
                CannedResponse::Json(json!({"id": "1", "properties": {}})),
            );

            let url = Url::parse("https://example.com/crm/v3/objects/cars/1").unwrap();
            let result: serde_json::Value = backend.get_json(&url).await.unwrap();

            assert_eq!(result["id"], "1");
            assert_eq!(backend.requests().lock().unwrap().len(), 1);
        }

        #[tokio::test]
        async fn test_fake_backend_returns_404_for_unknown_url() {
            let backend = FakeBackend::new();
            let url = Url::parse("https://example.com/unknown").unwrap();

            let result: HubSpotResult<serde_json::Value> = backend.get_json(&url).await;
            assert!(matches!(
                result,
                Err(HubSpotError::ApiRequestFailed { status: 404, .. })
            ));
        }

        #[tokio::test]
        async fn test_fake_backend_records_body() {
            let backend = FakeBackend::new()
                .with_response("objects", CannedResponse::Json(json!({"id": "9"})));
            let url = Url::parse("https://example.com/crm/v3/objects/cars").unwrap();

            let _: serde_json::Value = backend
                .send_json(WriteMethod::Post, &url, &json!({"properties": {"name": "Y"}}))
                .await
                .unwrap();

            let requests = backend.requests();
            let recorded = requests.lock().unwrap();
            assert_eq!(recorded[0].method, Some(WriteMethod::Post));
            assert_eq!(
                recorded[0].body,
                Some(json!({"properties": {"name": "Y"}}))
            );
        }
    }
}
