//! URL construction helpers for the CRM objects API.
//!
//! Pure functions so every call builds its URL the same way.

use url::Url;

use crate::error::{HubSpotError, HubSpotResult};
use crate::models::ClientSettings;

/// Path of the objects API below the base URL.
const OBJECTS_PATH: &str = "crm/v3/objects";

/// `{base}/crm/v3/objects/{collection}`, also the create URL.
pub fn build_collection_url(settings: &ClientSettings, collection: &str) -> Url {
    let mut url = settings.base_url.clone();

    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!(
        "{base_path}/{OBJECTS_PATH}/{}",
        urlencoding::encode(collection)
    ));
    url.set_query(None);

    url
}

/// `{base}/crm/v3/objects/{collection}/{id}`, also the update URL.
///
/// `.` and `..` are rejected: URL parsing resolves them (even
/// percent-encoded) and the request would address another resource.
pub fn build_object_url(
    settings: &ClientSettings,
    collection: &str,
    id: &str,
) -> HubSpotResult<Url> {
    if matches!(id, "." | "..") {
        return Err(HubSpotError::InvalidObjectId { id: id.to_string() });
    }

    let mut url = build_collection_url(settings, collection);

    let collection_path = url.path().to_string();
    url.set_path(&format!("{collection_path}/{}", urlencoding::encode(id)));

    Ok(url)
}

/// List URL with one `properties=` pair per requested property.
pub fn build_list_url(settings: &ClientSettings, collection: &str, properties: &[String]) -> Url {
    with_properties(build_collection_url(settings, collection), properties)
}

/// Get-by-id URL with one `properties=` pair per requested property.
pub fn build_get_url(
    settings: &ClientSettings,
    collection: &str,
    id: &str,
    properties: &[String],
) -> HubSpotResult<Url> {
    Ok(with_properties(
        build_object_url(settings, collection, id)?,
        properties,
    ))
}

fn with_properties(mut url: Url, properties: &[String]) -> Url {
    if !properties.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for property in properties {
            pairs.append_pair("properties", property);
        }
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ClientSettings {
        ClientSettings::default()
    }

    fn props(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_build_collection_url() {
        let url = build_collection_url(&settings(), "contacts");
        assert_eq!(url.as_str(), "https://api.hubapi.com/crm/v3/objects/contacts");
    }

    #[test]
    fn test_build_object_url() {
        let url = build_object_url(&settings(), "cars", "42").unwrap();
        assert_eq!(url.as_str(), "https://api.hubapi.com/crm/v3/objects/cars/42");
    }

    #[test]
    fn test_build_object_url_encodes_id() {
        let url = build_object_url(&settings(), "cars", "a/b c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.hubapi.com/crm/v3/objects/cars/a%2Fb%20c"
        );
    }

    #[test]
    fn test_build_object_url_rejects_dot_segments() {
        for id in [".", ".."] {
            assert!(matches!(
                build_object_url(&settings(), "cars", id),
                Err(HubSpotError::InvalidObjectId { .. })
            ));
            assert!(build_get_url(&settings(), "cars", id, &[]).is_err());
        }

        let url = build_object_url(&settings(), "cars", "...").unwrap();
        assert_eq!(url.as_str(), "https://api.hubapi.com/crm/v3/objects/cars/...");
        let url = build_object_url(&settings(), "cars", "./x").unwrap();
        assert_eq!(url.as_str(), "https://api.hubapi.com/crm/v3/objects/cars/.%2Fx");
    }

    #[test]
    fn test_build_list_url() {
        let url = build_list_url(
            &settings(),
            "contacts",
            &props(&["email", "favorite_book", "hs_object_id"]),
        );
        assert_eq!(
            url.as_str(),
            "https://api.hubapi.com/crm/v3/objects/contacts?properties=email&properties=favorite_book&properties=hs_object_id"
        );
    }

    #[test]
    fn test_build_get_url() {
        let url = build_get_url(&settings(), "cars", "42", &props(&["name", "price"])).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.hubapi.com/crm/v3/objects/cars/42?properties=name&properties=price"
        );
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let settings = ClientSettings {
            base_url: Url::parse("http://127.0.0.1:4010/mock/").unwrap(),
            ..Default::default()
        };
        let url = build_list_url(&settings, "cars", &props(&["name"]));
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:4010/mock/crm/v3/objects/cars?properties=name"
        );
    }

    #[test]
    fn test_no_properties_no_query() {
        let url = build_list_url(&settings(), "cars", &[]);
        assert_eq!(url.query(), None);
    }
}
