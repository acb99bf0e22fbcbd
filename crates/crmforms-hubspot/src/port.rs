//! Port trait implementation for `HubSpotClient`.
//!
//! This module implements the core-owned `ObjectClientPort` trait for
//! `HubSpotClient`, converting between the wire shapes and `RemoteObject`.

use async_trait::async_trait;
use crmforms_core::{
    DEFAULT_ID_PROPERTY, ObjectClientPort, ObjectPortError, ObjectPortResult, PropertyBag,
    RemoteObject,
};

use crate::client::HubSpotClient;
use crate::error::HubSpotError;
use crate::http::HttpBackend;
use crate::models::ObjectResponse;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `HubSpotError` to core `ObjectPortError`.
fn map_error(err: HubSpotError, collection: &str, id: Option<&str>) -> ObjectPortError {
    match err {
        HubSpotError::ApiRequestFailed {
            status,
            url,
            message,
        } => {
            let message = message.unwrap_or_else(|| format!("status {status} from {url}"));
            match status {
                404 => ObjectPortError::NotFound {
                    collection: collection.to_string(),
                    id: id.map(str::to_string),
                },
                401 | 403 => ObjectPortError::Unauthorized { message },
                400 | 409 | 422 => ObjectPortError::ValidationRejected { message },
                429 => ObjectPortError::RateLimited,
                _ => ObjectPortError::Network {
                    message: format!("API request failed with status {status}: {message}"),
                },
            }
        }
        HubSpotError::InvalidObjectId { id: rejected } => ObjectPortError::NotFound {
            collection: collection.to_string(),
            id: Some(rejected),
        },
        HubSpotError::Network(e) => ObjectPortError::Network {
            message: e.to_string(),
        },
        HubSpotError::InvalidUrl(e) => ObjectPortError::Configuration {
            message: e.to_string(),
        },
        HubSpotError::InvalidToken(e) => ObjectPortError::Configuration {
            message: e.to_string(),
        },
        HubSpotError::JsonParse(e) => ObjectPortError::InvalidResponse {
            message: e.to_string(),
        },
        HubSpotError::InvalidResponse { message } => ObjectPortError::InvalidResponse { message },
    }
}

// ============================================================================
// Type Conversions
// ============================================================================

/// Convert a wire object into a `RemoteObject`.
///
/// The identifier comes from `id`, falling back to the `hs_object_id`
/// property the API also returns.
fn to_remote_object(response: ObjectResponse) -> ObjectPortResult<RemoteObject> {
    let ObjectResponse { id, properties } = response;
    let id = id
        .filter(|id| !id.is_empty())
        .or_else(|| {
            properties
                .get(DEFAULT_ID_PROPERTY)
                .and_then(crmforms_core::value_text)
                .filter(|id| !id.is_empty())
        })
        .ok_or_else(|| ObjectPortError::InvalidResponse {
            message: "object without an id".to_string(),
        })?;

    Ok(RemoteObject::new(id, properties))
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> ObjectClientPort for HubSpotClient<B> {
    async fn list(
        &self,
        collection: &str,
        properties: &[String],
    ) -> ObjectPortResult<Vec<RemoteObject>> {
        let results = self
            .list_objects(collection, properties)
            .await
            .map_err(|e| map_error(e, collection, None))?;

        results.into_iter().map(to_remote_object).collect()
    }

    async fn get(
        &self,
        collection: &str,
        id: &str,
        properties: &[String],
    ) -> ObjectPortResult<RemoteObject> {
        let response = self
            .get_object(collection, id, properties)
            .await
            .map_err(|e| map_error(e, collection, Some(id)))?;

        to_remote_object(response)
    }

    async fn create(
        &self,
        collection: &str,
        properties: PropertyBag,
    ) -> ObjectPortResult<RemoteObject> {
        let response = self
            .create_object(collection, &properties)
            .await
            .map_err(|e| map_error(e, collection, None))?;

        to_remote_object(response)
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        properties: PropertyBag,
    ) -> ObjectPortResult<RemoteObject> {
        let response = self
            .update_object(collection, id, &properties)
            .await
            .map_err(|e| map_error(e, collection, Some(id)))?;

        to_remote_object(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::models::ClientSettings;
    use serde_json::json;

    fn api_error(status: u16) -> HubSpotError {
        HubSpotError::ApiRequestFailed {
            status,
            url: "https://api.hubapi.com/crm/v3/objects/cars/42".to_string(),
            message: Some("upstream says no".to_string()),
        }
    }

    #[test]
    fn test_map_error_statuses() {
        assert!(matches!(
            map_error(api_error(404), "cars", Some("42")),
            ObjectPortError::NotFound { ref collection, id: Some(ref id) }
                if collection == "cars" && id == "42"
        ));
        assert!(matches!(
            map_error(api_error(401), "cars", None),
            ObjectPortError::Unauthorized { .. }
        ));
        assert!(matches!(
            map_error(api_error(403), "cars", None),
            ObjectPortError::Unauthorized { .. }
        ));
        assert!(matches!(
            map_error(api_error(400), "cars", None),
            ObjectPortError::ValidationRejected { ref message } if message == "upstream says no"
        ));
        assert!(matches!(
            map_error(api_error(409), "cars", None),
            ObjectPortError::ValidationRejected { .. }
        ));
        assert!(matches!(
            map_error(api_error(429), "cars", None),
            ObjectPortError::RateLimited
        ));
        assert!(matches!(
            map_error(api_error(503), "cars", None),
            ObjectPortError::Network { .. }
        ));
    }

    #[test]
    fn test_map_error_parse_failures() {
        let err = serde_json::from_str::<ObjectResponse>("not json").unwrap_err();
        assert!(matches!(
            map_error(HubSpotError::JsonParse(err), "cars", None),
            ObjectPortError::InvalidResponse { .. }
        ));

        let err = url::Url::parse("::").unwrap_err();
        assert!(matches!(
            map_error(HubSpotError::InvalidUrl(err), "cars", None),
            ObjectPortError::Configuration { .. }
        ));
    }

    #[test]
    fn test_to_remote_object_id_fallback() {
        let object = to_remote_object(ObjectResponse {
            id: None,
            properties: json!({"hs_object_id": "17", "name": "A"})
                .as_object()
                .cloned()
                .unwrap(),
        })
        .unwrap();
        assert_eq!(object.id, "17");

        let missing = to_remote_object(ObjectResponse::default());
        assert!(matches!(
            missing,
            Err(ObjectPortError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_port_get_maps_not_found() {
        let client = HubSpotClient::with_backend(
            ClientSettings::default(),
            FakeBackend::new().with_response("objects/cars/42", CannedResponse::Status(404, None)),
        );

        let err = ObjectClientPort::get(&client, "cars", "42", &[])
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Not found: cars/42");
    }

    #[tokio::test]
    async fn test_port_dot_ids_are_not_found() {
        let backend = FakeBackend::new()
            .with_response("objects", CannedResponse::Json(json!({"results": []})));
        let requests = backend.requests();
        let client = HubSpotClient::with_backend(ClientSettings::default(), backend);

        let err = ObjectClientPort::get(&client, "cars", ".", &[])
            .await
            .unwrap_err();
        assert!(matches!(err, ObjectPortError::NotFound { id: Some(ref id), .. } if id == "."));

        let err = ObjectClientPort::update(&client, "cars", "..", PropertyBag::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ObjectPortError::NotFound { .. }));

        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_port_list_converts_objects() {
        let client = HubSpotClient::with_backend(
            ClientSettings::default(),
            FakeBackend::new().with_response(
                "objects/contacts",
                CannedResponse::Json(json!({
                    "results": [{
                        "id": "1",
                        "properties": {"email": "a@b.c", "hs_object_id": "1"}
                    }]
                })),
            ),
        );

        let objects = ObjectClientPort::list(&client, "contacts", &[])
            .await
            .unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].id, "1");
        assert_eq!(objects[0].property_text("email").as_deref(), Some("a@b.c"));
    }

    #[tokio::test]
    async fn test_port_create_validation_rejected() {
        let client = HubSpotClient::with_backend(
            ClientSettings::default(),
            FakeBackend::new().with_response(
                "objects/contacts",
                CannedResponse::Status(400, Some("Property values were not valid".to_string())),
            ),
        );

        let err = ObjectClientPort::create(&client, "contacts", PropertyBag::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ObjectPortError::ValidationRejected { .. }));
        assert!(!err.is_transient());
    }
}
