//! Remote object snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Named properties exchanged with the remote API for one object.
pub type PropertyBag = serde_json::Map<String, Value>;

/// A per-request snapshot of a record owned by the remote CRM.
///
/// This system never holds an authoritative copy; the snapshot is dropped
/// once the response has been rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteObject {
    /// Opaque identifier assigned by the remote service.
    pub id: String,
    /// Property values as returned by the remote service.
    #[serde(default)]
    pub properties: PropertyBag,
}

impl RemoteObject {
    /// Create a snapshot from an identifier and a property bag.
    pub fn new(id: impl Into<String>, properties: PropertyBag) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }

    /// Text form of a property, `None` when unset or `null`.
    pub fn property_text(&self, name: &str) -> Option<String> {
        self.properties.get(name).and_then(value_text)
    }
}

/// Render a JSON value the way it should appear in a page or form field.
///
/// Strings are taken verbatim; numbers and booleans use their JSON text.
/// `null` means "unset" and yields `None`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}
