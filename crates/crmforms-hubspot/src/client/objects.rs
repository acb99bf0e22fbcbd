//! Object operations for the HubSpot client.

use crmforms_core::PropertyBag;

use crate::error::HubSpotResult;
use crate::http::{HttpBackend, WriteMethod};
use crate::models::{ListResponse, ObjectResponse, WriteRequest};
use crate::url::{build_collection_url, build_get_url, build_list_url, build_object_url};

use super::HubSpotClient;

impl<B: HttpBackend> HubSpotClient<B> {
    /// Fetch the first page of `collection`.
    ///
    /// Further pages are not requested.
    pub(crate) async fn list_objects(
        &self,
        collection: &str,
        properties: &[String],
    ) -> HubSpotResult<Vec<ObjectResponse>> {
        let url = build_list_url(&self.settings, collection, properties);
        let page: ListResponse = self.backend.get_json(&url).await?;

        if page.has_more() {
            tracing::debug!(
                target: "crmforms.remote",
                collection,
                returned = page.results.len(),
                "more pages available, showing the first page only"
            );
        }

        Ok(page.results)
    }

    /// Fetch one object by identifier.
    pub(crate) async fn get_object(
        &self,
        collection: &str,
        id: &str,
        properties: &[String],
    ) -> HubSpotResult<ObjectResponse> {
        let url = build_get_url(&self.settings, collection, id, properties)?;
        self.backend.get_json(&url).await
    }

    /// `POST` a new object.
    pub(crate) async fn create_object(
        &self,
        collection: &str,
        properties: &PropertyBag,
    ) -> HubSpotResult<ObjectResponse> {
        let url = build_collection_url(&self.settings, collection);
        self.backend
            .send_json(WriteMethod::Post, &url, &WriteRequest { properties })
            .await
    }

    /// `PATCH` an existing object.
    pub(crate) async fn update_object(
        &self,
        collection: &str,
        id: &str,
        properties: &PropertyBag,
    ) -> HubSpotResult<ObjectResponse> {
        let url = build_object_url(&self.settings, collection, id)?;
        self.backend
            .send_json(WriteMethod::Patch, &url, &WriteRequest { properties })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubSpotError;
    use crate::http::testing::{CannedResponse, FakeBackend};
    use crate::models::ClientSettings;
    use serde_json::json;

    fn client(backend: FakeBackend) -> HubSpotClient<FakeBackend> {
        HubSpotClient::with_backend(ClientSettings::default(), backend)
    }

    fn props(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[tokio::test]
    async fn test_list_objects_first_page_only() {
        let backend = FakeBackend::new().with_response(
            "objects/cars",
            CannedResponse::Json(json!({
                "results": [
                    {"id": "1", "properties": {"name": "A"}},
                    {"id": "2", "properties": {"name": "B"}}
                ],
                "paging": {"next": {"after": "2"}}
            })),
        );
        let requests = backend.requests();
        let client = client(backend);

        let results = client
            .list_objects("cars", &props(&["name", "hs_object_id"]))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        let recorded = requests.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert!(recorded[0].url.ends_with("?properties=name&properties=hs_object_id"));
        assert_eq!(recorded[0].method, None);
    }

    #[tokio::test]
    async fn test_get_object_not_found() {
        let client = client(FakeBackend::new().with_response(
            "objects/cars/42",
            CannedResponse::Status(404, Some("Object not found.".to_string())),
        ));

        let result = client.get_object("cars", "42", &props(&["name"])).await;
        assert!(matches!(
            result,
            Err(HubSpotError::ApiRequestFailed { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_create_object_posts_properties() {
        let backend = FakeBackend::new().with_response(
            "objects/cars",
            CannedResponse::Json(json!({"id": "9", "properties": {"name": "Y"}})),
        );
        let requests = backend.requests();
        let client = client(backend);

        let properties = json!({"name": "Y", "price": 3.5})
            .as_object()
            .cloned()
            .unwrap();
        let created = client.create_object("cars", &properties).await.unwrap();

        assert_eq!(created.id.as_deref(), Some("9"));
        let recorded = requests.lock().unwrap();
        assert_eq!(recorded[0].method, Some(WriteMethod::Post));
        assert_eq!(
            recorded[0].url,
            "https://api.hubapi.com/crm/v3/objects/cars"
        );
        assert_eq!(
            recorded[0].body,
            Some(json!({"properties": {"name": "Y", "price": 3.5}}))
        );
    }

    #[test]
    fn test_update_object_rejects_dot_id_without_request() {
        let backend = FakeBackend::new()
            .with_response("objects", CannedResponse::Json(json!({"id": "1"})));
        let requests = backend.requests();
        let client = client(backend);

        let result = tokio_test::block_on(client.update_object("cars", "..", &PropertyBag::new()));

        assert!(matches!(result, Err(HubSpotError::InvalidObjectId { .. })));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_object_patches_by_id() {
        let backend = FakeBackend::new().with_response(
            "objects/contacts/7",
            CannedResponse::Json(json!({"id": "7", "properties": {}})),
        );
        let requests = backend.requests();
        let client = client(backend);

        let properties = json!({"is_married": "true"}).as_object().cloned().unwrap();
        client
            .update_object("contacts", "7", &properties)
            .await
            .unwrap();

        let recorded = requests.lock().unwrap();
        assert_eq!(recorded[0].method, Some(WriteMethod::Patch));
        assert_eq!(
            recorded[0].url,
            "https://api.hubapi.com/crm/v3/objects/contacts/7"
        );
    }
}
