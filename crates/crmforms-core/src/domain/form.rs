//! Inbound form submissions.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// Form input carrying the object identifier.
pub const ID_FIELD: &str = "id";

/// Errors decoding a submission body.
#[derive(Debug, Error)]
pub enum FormError {
    /// Body was declared as JSON but did not parse.
    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON body was not an object.
    #[error("JSON body must be an object")]
    NotAnObject,
}

/// Raw key/value data of one form post.
///
/// Every key maps to all the values submitted for it, in order. Keys
/// written with a trailing `[]` (`languages[]=en`) are stored without it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    values: HashMap<String, Vec<String>>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value, builder style.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a value for `key`.
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let key = key.strip_suffix("[]").unwrap_or(key);
        self.values
            .entry(key.to_string())
            .or_default()
            .push(value.into());
    }

    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let mut form = Self::new();
        for (key, value) in url::form_urlencoded::parse(body) {
            form.push(&key, value.into_owned());
        }
        form
    }

    /// Decode an `application/json` object body.
    ///
    /// Arrays contribute one value per element. `null` and `false` are
    /// treated as "not submitted", like an unchecked checkbox.
    pub fn from_json(body: &[u8]) -> Result<Self, FormError> {
        let Value::Object(map) = serde_json::from_slice::<Value>(body)? else {
            return Err(FormError::NotAnObject);
        };

        let mut form = Self::new();
        for (key, value) in map {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = json_scalar(item) {
                            form.push(&key, text);
                        }
                    }
                }
                other => {
                    if let Some(text) = json_scalar(other) {
                        form.push(&key, text);
                    }
                }
            }
        }
        Ok(form)
    }

    /// All values submitted for `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.values.get(name).map(Vec::as_slice)
    }

    /// First value submitted for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether `name` was submitted with a non-empty value.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name)
            .is_some_and(|values| values.iter().any(|v| !v.is_empty()))
    }

    /// The submitted identifier, if present and not blank.
    pub fn identifier(&self) -> Option<&str> {
        self.first(ID_FIELD)
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

fn json_scalar(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested @ (Value::Array(_) | Value::Object(_)) => Some(nested.to_string()),
    }
}
