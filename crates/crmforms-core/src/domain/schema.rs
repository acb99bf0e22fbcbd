//! Schema descriptors.
//!
//! A descriptor is the only thing that differs between deployments: the
//! remote collection, the page titles and the ordered field list with the
//! coercion rule of each field. Everything downstream (client, mapper,
//! handlers) is generic over it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier property maintained by the remote service.
pub const DEFAULT_ID_PROPERTY: &str = "hs_object_id";

/// Names accepted by [`ObjectSchema::preset`].
pub const PRESET_NAMES: &[&str] = &["contacts", "cars"];

/// Errors raised while loading or validating a schema descriptor.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The descriptor file could not be read.
    #[error("Failed to read schema file {}: {source}", path.display())]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not valid JSON for this shape.
    #[error("Failed to parse schema: {0}")]
    Parse(#[from] serde_json::Error),

    /// The descriptor parsed but is not usable.
    #[error("Invalid schema: {0}")]
    Invalid(String),

    /// No built-in preset has this name.
    #[error("Unknown schema preset '{name}' (expected one of: {})", PRESET_NAMES.join(", "))]
    UnknownPreset {
        /// Requested preset name
        name: String,
    },
}

/// One choice of a multi-select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Value stored upstream
    pub value: String,
    /// Text shown in the form
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Coercion rule and input widget of a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text, copied verbatim.
    #[default]
    Text,
    /// Multi-line free text, copied verbatim.
    TextArea,
    /// Email address, copied verbatim.
    Email,
    /// Boolean stored upstream as the strings `"true"` / `"false"`.
    Checkbox,
    /// Several values stored upstream as one `;`-delimited string.
    MultiSelect {
        /// Choices offered by the edit form
        #[serde(default)]
        options: Vec<SelectOption>,
    },
    /// Floating-point number, `0` when unparsable or absent.
    Number,
}

/// A single field of a deployment's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Remote property name, also used as the form input name
    pub name: String,
    /// Column header and form label
    pub label: String,
    /// Coercion rule
    #[serde(default)]
    pub kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }
}

fn default_id_property() -> String {
    DEFAULT_ID_PROPERTY.to_string()
}

/// Descriptor of one deployment.
///
/// # Example
///
/// ```
/// use crmforms_core::ObjectSchema;
///
/// let schema = ObjectSchema::cars();
/// assert_eq!(
///     schema.requested_properties(),
///     vec!["name", "description", "price", "hs_object_id"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// Remote collection (object type) name
    pub collection: String,
    /// Property holding the object identifier
    #[serde(default = "default_id_property")]
    pub id_property: String,
    /// Title of the list page
    pub list_title: String,
    /// Title of the edit form
    pub detail_title: String,
    /// Plain-text body returned when a submit fails
    pub submit_error_message: String,
    /// Fields in display order
    pub fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    /// Contacts with a reading preference and spoken languages.
    pub fn contacts() -> Self {
        Self {
            collection: "contacts".to_string(),
            id_property: default_id_property(),
            list_title: "Contact list | HubSpot APIs".to_string(),
            detail_title: "Contact Details | HubSpot APIs".to_string(),
            submit_error_message: "Error creating contact".to_string(),
            fields: vec![
                FieldSpec::new("email", "Email", FieldKind::Email),
                FieldSpec::new("favorite_book", "Favorite book", FieldKind::Text),
                FieldSpec::new("is_married", "Married", FieldKind::Checkbox),
                FieldSpec::new(
                    "languages",
                    "Languages",
                    FieldKind::MultiSelect {
                        options: vec![
                            SelectOption::new("en", "English"),
                            SelectOption::new("fr", "French"),
                            SelectOption::new("es", "Spanish"),
                            SelectOption::new("de", "German"),
                        ],
                    },
                ),
            ],
        }
    }

    /// Cars with a name, free-text description and price.
    pub fn cars() -> Self {
        Self {
            collection: "cars".to_string(),
            id_property: default_id_property(),
            list_title: "Car list | HubSpot APIs".to_string(),
            detail_title: "Car Details | HubSpot APIs".to_string(),
            submit_error_message: "Error saving car".to_string(),
            fields: vec![
                FieldSpec::new("name", "Name", FieldKind::Text),
                FieldSpec::new("description", "Description", FieldKind::TextArea),
                FieldSpec::new("price", "Price", FieldKind::Number),
            ],
        }
    }

    /// Look up a built-in preset by name.
    pub fn preset(name: &str) -> Result<Self, SchemaError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "contacts" | "contact" => Ok(Self::contacts()),
            "cars" | "car" => Ok(Self::cars()),
            _ => Err(SchemaError::UnknownPreset {
                name: name.to_string(),
            }),
        }
    }

    /// Parse and validate a JSON descriptor.
    pub fn from_json_str(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json)?;
        schema.validate()?;
        Ok(schema)
    }

    /// Read, parse and validate a JSON descriptor file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check the descriptor is usable by the mapper.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.collection.trim().is_empty() {
            return Err(SchemaError::Invalid("collection must not be empty".into()));
        }
        if self.id_property.trim().is_empty() {
            return Err(SchemaError::Invalid("id_property must not be empty".into()));
        }
        if self.fields.is_empty() {
            return Err(SchemaError::Invalid("at least one field is required".into()));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.trim().is_empty() {
                return Err(SchemaError::Invalid("field names must not be empty".into()));
            }
            if field.name == self.id_property || field.name == super::ID_FIELD {
                return Err(SchemaError::Invalid(format!(
                    "field '{}' clashes with the identifier",
                    field.name
                )));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::Invalid(format!(
                    "duplicate field '{}'",
                    field.name
                )));
            }
        }
        Ok(())
    }

    /// Find a field by its property name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Properties requested on list and get calls: every field, then the
    /// identifier property.
    pub fn requested_properties(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| f.name.clone())
            .chain(std::iter::once(self.id_property.clone()))
            .collect()
    }
}
